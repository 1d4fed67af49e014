//! Split of an address into network, subnet and host fields.

use super::{Ipv4, MAX_LENGTH};
use serde::Serialize;
use std::error::Error;

/// How the 32 address bits are divided.
///
/// `network_bits` leading bits identify the network, the next `subnet_bits`
/// pick the subnet, and whatever is left over identifies the host.
/// Only built through [`SubnetLayout::new`], so the two always fit in 32 bits.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubnetLayout {
    network_bits: u8,
    subnet_bits: u8,
}

impl SubnetLayout {
    /// Create a layout, checking that both fields fit inside an address.
    pub fn new(network_bits: u8, subnet_bits: u8) -> Result<SubnetLayout, Box<dyn Error>> {
        if network_bits > MAX_LENGTH {
            return Err(format!("Network length /{network_bits} is too long").into());
        }
        if subnet_bits > MAX_LENGTH - network_bits {
            return Err(format!(
                "{subnet_bits} subnet bits do not fit after a /{network_bits} network"
            )
            .into());
        }
        Ok(SubnetLayout {
            network_bits,
            subnet_bits,
        })
    }

    /// Layout using the prefix length of `cidr` as the network portion.
    pub fn for_network(cidr: Ipv4, subnet_bits: u8) -> Result<SubnetLayout, Box<dyn Error>> {
        SubnetLayout::new(cidr.mask, subnet_bits)
    }

    pub fn network_bits(&self) -> u8 {
        self.network_bits
    }

    pub fn subnet_bits(&self) -> u8 {
        self.subnet_bits
    }

    pub fn host_bits(&self) -> u8 {
        MAX_LENGTH
            .saturating_sub(self.network_bits)
            .saturating_sub(self.subnet_bits)
    }

    /// Number of subnets the subnet field can address.
    pub fn subnet_count(&self) -> u64 {
        1u64 << self.subnet_bits
    }

    /// Number of addresses in each subnet (network and broadcast included).
    pub fn host_count(&self) -> u64 {
        1u64 << self.host_bits()
    }
}

impl std::fmt::Display for SubnetLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "/{}+{}s+{}h",
            self.network_bits,
            self.subnet_bits,
            self.host_bits()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_bits() {
        let layout = SubnetLayout::new(24, 4).unwrap();
        assert_eq!(layout.host_bits(), 4);
        assert_eq!(layout.subnet_count(), 16);
        assert_eq!(layout.host_count(), 16);
        assert_eq!(layout.to_string(), "/24+4s+4h");
    }

    #[test]
    fn test_layout_edges() {
        let all_network = SubnetLayout::new(32, 0).unwrap();
        assert_eq!(all_network.host_bits(), 0);
        assert_eq!(all_network.host_count(), 1);

        let all_host = SubnetLayout::new(0, 0).unwrap();
        assert_eq!(all_host.host_bits(), 32);
        assert_eq!(all_host.host_count(), 1 << 32);

        let all_subnet = SubnetLayout::new(0, 32).unwrap();
        assert_eq!(all_subnet.subnet_count(), 1 << 32);
    }

    #[test]
    fn test_layout_rejects_overflow() {
        assert!(SubnetLayout::new(33, 0).is_err());
        assert!(SubnetLayout::new(24, 9).is_err());
        assert!(SubnetLayout::new(24, 8).is_ok());
        assert!(SubnetLayout::new(30, 10).is_err());
    }

    #[test]
    fn test_layout_serializes_fields() {
        let layout = SubnetLayout::new(30, 2).unwrap();
        assert_eq!(
            serde_json::to_string(&layout).unwrap(),
            r#"{"network_bits":30,"subnet_bits":2}"#
        );
        assert_eq!(layout.host_bits(), 0);
        assert_eq!(layout.host_count(), 1);
    }

    #[test]
    fn test_for_network() {
        let cidr = Ipv4::new("10.20.0.0/16").unwrap();
        let layout = SubnetLayout::for_network(cidr, 6).unwrap();
        assert_eq!(layout.network_bits(), 16);
        assert_eq!(layout.host_bits(), 10);
    }
}
