//! Validated lookups on real addresses.
//!
//! Wraps the binary string arithmetic in [`super::find`] with the parsing and
//! range checks it leaves to its callers.

use super::find::{find_host, find_ip, find_subnet, RESERVED};
use crate::models::{binary, cut_addr, decimal, SubnetLayout};
use serde::Serialize;
use std::error::Error;
use std::net::Ipv4Addr;

/// Where an address falls inside a subnetted network.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Location {
    /// The address that was looked up.
    pub address: Ipv4Addr,
    /// The address as 32 binary digits.
    pub binary: String,
    /// Network address of the `/network_bits` network.
    pub network: Ipv4Addr,
    pub layout: SubnetLayout,
    /// Subnet index, or -1 if the host field is reserved.
    pub subnet: i64,
    /// Host index, or -1 if the host field is reserved.
    pub host: i64,
}

impl Location {
    /// True when the host bits are all `0` or all `1`.
    pub fn is_reserved(&self) -> bool {
        self.subnet == RESERVED || self.host == RESERVED
    }
}

/// Find the subnet and host index of `address` under `layout`.
pub fn locate(address: Ipv4Addr, layout: SubnetLayout) -> Result<Location, Box<dyn Error>> {
    let bits = binary(address);
    let subnet = find_subnet(&bits, layout.network_bits(), layout.subnet_bits());
    let host = find_host(&bits, layout.network_bits(), layout.subnet_bits());
    log::debug!("locate({address}) layout={layout} bits={bits} subnet={subnet} host={host}");
    if subnet == RESERVED {
        log::warn!("{address}: host bits are reserved (network/broadcast) for {layout}");
    }

    Ok(Location {
        address,
        network: cut_addr(address, layout.network_bits())?,
        binary: bits,
        layout,
        subnet,
        host,
    })
}

/// Address of host `host` in subnet `subnet` of `network`.
///
/// Unlike [`find_ip`], indices that do not fit their field are an error.
pub fn build(
    network: Ipv4Addr,
    layout: SubnetLayout,
    subnet: u32,
    host: u32,
) -> Result<Ipv4Addr, Box<dyn Error>> {
    if layout.subnet_bits() > 0 && u64::from(subnet) >= layout.subnet_count() {
        return Err(format!(
            "Subnet {subnet} does not fit in {} subnet bits (max {})",
            layout.subnet_bits(),
            layout.subnet_count() - 1
        )
        .into());
    }
    if u64::from(host) >= layout.host_count() {
        return Err(format!(
            "Host {host} does not fit in {} host bits (max {})",
            layout.host_bits(),
            layout.host_count() - 1
        )
        .into());
    }

    let start = binary(network);
    let ip = if layout.host_bits() == 0 {
        // find_ip always writes at least one host digit, so assemble the
        // network and subnet fields directly
        let mut bits = start[..layout.network_bits() as usize].to_string();
        if layout.subnet_bits() > 0 {
            bits.push_str(&format!(
                "{subnet:0width$b}",
                width = layout.subnet_bits() as usize
            ));
        }
        decimal(&bits)?
    } else {
        find_ip(
            &start,
            subnet,
            host,
            layout.network_bits(),
            layout.subnet_bits(),
        )?
    };
    let addr = Ipv4Addr::from(ip);
    log::debug!("build({network}, {layout}, subnet={subnet}, host={host}) = {addr}");
    Ok(addr)
}
