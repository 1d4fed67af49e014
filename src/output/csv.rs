//! CSV output formatting for lookup results.

use super::terminal::format_field;
use super::BuiltRow;
use crate::processing::Location;

pub const LOCATION_HEADER: &str = r#""address","network","network_bits","subnet_bits","host_bits","subnet","host","binary""#;
pub const BUILT_HEADER: &str =
    r#""network","network_bits","subnet_bits","host_bits","subnet","host","address""#;

/// Format a single location CSV row.
pub fn location_row(loc: &Location) -> String {
    format!(
        "{address},{network},{network_bits},{subnet_bits},{host_bits},{subnet},{host},{binary}",
        address = format_field(loc.address, 17),
        network = format_field(loc.network, 17),
        network_bits = format_field(loc.layout.network_bits(), 4),
        subnet_bits = format_field(loc.layout.subnet_bits(), 4),
        host_bits = format_field(loc.layout.host_bits(), 4),
        subnet = format_field(loc.subnet, 12),
        host = format_field(loc.host, 12),
        binary = format_field(&loc.binary, 34),
    )
}

/// Format a single built address CSV row.
pub fn built_row(row: &BuiltRow) -> String {
    format!(
        "{network},{network_bits},{subnet_bits},{host_bits},{subnet},{host},{address}",
        network = format_field(row.network, 17),
        network_bits = format_field(row.layout.network_bits(), 4),
        subnet_bits = format_field(row.layout.subnet_bits(), 4),
        host_bits = format_field(row.layout.host_bits(), 4),
        subnet = format_field(row.subnet, 12),
        host = format_field(row.host, 12),
        address = format_field(row.address, 17),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubnetLayout;
    use crate::processing::locate;
    use std::net::Ipv4Addr;

    #[test]
    fn test_location_row() {
        let layout = SubnetLayout::new(24, 0).unwrap();
        let loc = locate(Ipv4Addr::new(10, 0, 0, 0), layout).unwrap();
        assert_eq!(
            location_row(&loc),
            r#"       "10.0.0.0",       "10.0.0.0","24", "0", "8",        "-1",        "-1","00001010000000000000000000000000""#
        );
    }

    #[test]
    fn test_built_row_matches_header_columns() {
        let row = BuiltRow {
            network: Ipv4Addr::new(192, 168, 1, 0),
            layout: SubnetLayout::new(24, 4).unwrap(),
            subnet: 3,
            host: 5,
            address: Ipv4Addr::new(192, 168, 1, 53),
        };
        let line = built_row(&row);
        assert_eq!(
            line.split(',').count(),
            BUILT_HEADER.split(',').count()
        );
        assert!(line.ends_with(r#""192.168.1.53""#));
    }
}
