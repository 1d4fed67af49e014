//! Domain models for subnet arithmetic.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`SubnetLayout`] - Division of an address into network, subnet and host bits
//! - [`binary`] / [`decimal`] - Conversion to and from the binary string form

mod ipv4;
mod layout;

// Re-export public types
pub use ipv4::{binary, cut_addr, decimal, get_cidr_mask, Ipv4, MAX_LENGTH};
pub use layout::SubnetLayout;
