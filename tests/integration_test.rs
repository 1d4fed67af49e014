//! Integration tests for subnet-calc
//!
//! These tests go from CIDR strings through the binary string arithmetic and back.

use std::net::Ipv4Addr;
use subnet_calc::{
    build_cidr, locate_cidr,
    models::{binary, decimal, SubnetLayout},
    processing::{find_host, find_ip, find_subnet, locate, RESERVED},
};

#[test]
fn test_locate_and_build_workflow() {
    let row = build_cidr("192.168.1.0/24", 4, 3, 5).expect("Failed to build address");
    assert_eq!(row.address, Ipv4Addr::new(192, 168, 1, 53));
    assert_eq!(row.layout.host_bits(), 4);

    let loc = locate_cidr(&format!("{}/24", row.address), 4).expect("Failed to locate");
    assert_eq!(loc.subnet, 3);
    assert_eq!(loc.host, 5);
    assert_eq!(loc.network, Ipv4Addr::new(192, 168, 1, 0));
}

#[test]
fn test_find_ip_example() {
    let start = "11000000101010000000000100000000";
    let ip = find_ip(start, 3, 5, 24, 4).expect("find_ip failed");
    let expected = format!("{}{}{}", &start[..24], "0011", "0101");
    assert_eq!(ip, decimal(&expected).unwrap());
    assert_eq!(Ipv4Addr::from(ip), Ipv4Addr::new(192, 168, 1, 53));
}

#[test]
fn test_reserved_host_field_for_all_layouts() {
    let network = "1".repeat(32);
    for network_bits in 0u8..=32 {
        for subnet_bits in 0..=(32 - network_bits) {
            let host_bits = 32 - network_bits - subnet_bits;
            if host_bits <= 1 {
                continue;
            }
            let prefix = &network[..(network_bits + subnet_bits) as usize];
            for fill in ["0", "1"] {
                let addr = format!("{prefix}{}", fill.repeat(host_bits as usize));
                assert_eq!(
                    find_subnet(&addr, network_bits, subnet_bits),
                    RESERVED,
                    "{addr} /{network_bits}+{subnet_bits}"
                );
                assert_eq!(find_host(&addr, network_bits, subnet_bits), RESERVED);
            }
        }
    }
}

#[test]
fn test_round_trip_through_find_ip() {
    let start = binary(Ipv4Addr::new(10, 42, 0, 0));
    for (network_bits, subnet_bits) in [(16u8, 8u8), (16, 4), (24, 2), (8, 12)] {
        let layout = SubnetLayout::new(network_bits, subnet_bits).unwrap();
        let subnet = (layout.subnet_count() - 1) as u32;
        let host = (layout.host_count() / 2 + 1) as u32;

        let ip = find_ip(&start, subnet, host, network_bits, subnet_bits).unwrap();
        let bits = binary(Ipv4Addr::from(ip));
        assert_eq!(find_subnet(&bits, network_bits, subnet_bits), subnet as i64);
        assert_eq!(find_host(&bits, network_bits, subnet_bits), host as i64);
    }
}

#[test]
fn test_build_layouts_without_host_bits() {
    let row = build_cidr("10.0.0.1/32", 0, 0, 0).expect("Failed to build /32");
    assert_eq!(row.address, Ipv4Addr::new(10, 0, 0, 1));
    assert_eq!(row.layout.host_bits(), 0);

    let row = build_cidr("192.168.1.0/24", 8, 5, 0).expect("Failed to build /24+8");
    assert_eq!(row.address, Ipv4Addr::new(192, 168, 1, 5));

    let row = build_cidr("192.168.1.6/31", 0, 0, 1).expect("Failed to build /31");
    assert_eq!(row.address, Ipv4Addr::new(192, 168, 1, 7));
}

#[test]
fn test_round_trip_first_subnet_first_host() {
    let row = build_cidr("172.16.0.0/20", 6, 0, 1).expect("Failed to build address");
    assert_eq!(row.address, Ipv4Addr::new(172, 16, 0, 1));

    let loc = locate_cidr(&format!("{}/20", row.address), 6).expect("Failed to locate");
    assert_eq!((loc.subnet, loc.host), (0, 1));
}

#[test]
fn test_host_never_zero() {
    let layout = SubnetLayout::new(30, 0).unwrap();
    for last in 0..4u8 {
        let loc = locate(Ipv4Addr::new(10, 0, 0, last), layout).unwrap();
        assert_ne!(loc.host, 0);
    }
}

#[test]
fn test_invalid_input() {
    assert!(locate_cidr("10.0.0.1", 0).is_err());
    assert!(locate_cidr("10.0.0.1/24", 9).is_err());
    assert!(build_cidr("10.0.0.0/24", 4, 16, 1).is_err());
    assert!(build_cidr("10.0.0.0/24", 4, 1, 16).is_err());
}
