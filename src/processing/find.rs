//! Subnet and host index arithmetic on binary address strings.
//!
//! Addresses are 32 characters of `'0'`/`'1'`, most significant bit first.
//! All functions here are pure and never log.

use crate::models::{decimal, MAX_LENGTH};
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;

/// Returned by [`find_subnet`] and [`find_host`] when the host field is a
/// run of identical bits, so the subnet has no usable host range.
pub const RESERVED: i64 = -1;

lazy_static! {
    static ref RESERVED_RE: Regex = Regex::new(r"^(0+|1+)$").expect("Invalid Regex?");
}

/// Everything after the first `n` characters, or "" when `n` runs past the end.
fn skip(s: &str, n: usize) -> &str {
    s.get(n.min(s.len())..).unwrap_or("")
}

/// The first `n` characters, or all of `s` when it is shorter.
fn take(s: &str, n: usize) -> &str {
    s.get(..n.min(s.len())).unwrap_or("")
}

/// Parse the leading run of binary digits, None when there is none.
fn parse_binary_prefix(s: &str) -> Option<i64> {
    let end = s.find(|c: char| c != '0' && c != '1').unwrap_or(s.len());
    i64::from_str_radix(&s[..end], 2).ok()
}

/// Host portion of `address` (subnet and host fields), or None when the host
/// field alone matches the reserved pattern.
fn split_host(address: &str, network_bits: u8, subnet_bits: u8) -> Option<&str> {
    let host = skip(address, network_bits as usize);
    let host_field = skip(host, subnet_bits as usize);
    let host_bits = MAX_LENGTH as i32 - network_bits as i32 - subnet_bits as i32;
    if host_bits > 1 && RESERVED_RE.is_match(host_field) {
        None
    } else {
        Some(host)
    }
}

/// Subnet index of `address` for a `/network_bits` network split by
/// `subnet_bits` subnet bits.
///
/// Returns [`RESERVED`] when the host bits are all `0` or all `1` (and there
/// is more than one of them). Returns 0 when there are no subnet bits to read.
///
/// # Examples
/// ```
/// use subnet_calc::processing::find_subnet;
/// let addr = "11000000101010000000000100110110";
/// assert_eq!(find_subnet(addr, 24, 4), 3);
/// ```
pub fn find_subnet(address: &str, network_bits: u8, subnet_bits: u8) -> i64 {
    match split_host(address, network_bits, subnet_bits) {
        None => RESERVED,
        Some(host) => parse_binary_prefix(take(host, subnet_bits as usize)).unwrap_or(0),
    }
}

/// Host index of `address` within its subnet.
///
/// Same reserved check as [`find_subnet`]. A host field that reads as zero,
/// or can not be read at all, reports host 1.
pub fn find_host(address: &str, network_bits: u8, subnet_bits: u8) -> i64 {
    match split_host(address, network_bits, subnet_bits) {
        None => RESERVED,
        Some(host) => match parse_binary_prefix(skip(host, subnet_bits as usize)) {
            Some(0) | None => 1,
            Some(index) => index,
        },
    }
}

/// Build the address with the network bits of `start`, then `subnet` and
/// `host` zero padded to their field widths.
///
/// Indices are not checked against their field width. One that is too wide
/// makes the assembled string longer than 32 bits and [`decimal`] rejects it.
pub fn find_ip(
    start: &str,
    subnet: u32,
    host: u32,
    network_bits: u8,
    subnet_bits: u8,
) -> Result<u32, Box<dyn Error>> {
    let host_bits =
        (MAX_LENGTH as usize).saturating_sub(network_bits as usize + subnet_bits as usize);
    let mut ip = take(start, network_bits as usize).to_string();
    if subnet_bits > 0 {
        ip.push_str(&format!("{subnet:0width$b}", width = subnet_bits as usize));
    }
    ip.push_str(&format!("{host:0width$b}", width = host_bits));
    decimal(&ip)
}
