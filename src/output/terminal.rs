//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use super::BuiltRow;
use crate::processing::{Location, RESERVED};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Index for display, the reserved sentinel shown as text.
fn index(value: i64) -> String {
    if value == RESERVED {
        "reserved".red().to_string()
    } else {
        value.to_string().green().to_string()
    }
}

/// Split the binary form into its network, subnet and host fields.
fn split_bits(bits: &str, network_bits: usize, subnet_bits: usize) -> String {
    let (network, rest) = bits.split_at(network_bits.min(bits.len()));
    let (subnet, host) = rest.split_at(subnet_bits.min(rest.len()));
    format!("{} {} {}", network.blue(), subnet.yellow(), host)
}

pub fn location_line(loc: &Location) -> String {
    format!(
        "{address} in {network}/{mask} {layout}: subnet={subnet} host={host}  [{bits}]",
        address = loc.address.to_string().bold(),
        network = loc.network,
        mask = loc.layout.network_bits(),
        layout = loc.layout,
        subnet = index(loc.subnet),
        host = index(loc.host),
        bits = split_bits(
            &loc.binary,
            loc.layout.network_bits() as usize,
            loc.layout.subnet_bits() as usize
        ),
    )
}

pub fn built_line(row: &BuiltRow) -> String {
    format!(
        "{network}/{mask} {layout}: subnet={subnet} host={host} => {address}",
        network = row.network,
        mask = row.layout.network_bits(),
        layout = row.layout,
        subnet = row.subnet,
        host = row.host,
        address = row.address.to_string().bold(),
    )
}
