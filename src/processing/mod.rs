//! Subnet arithmetic.
//!
//! - [`find`] - Subnet/host index extraction and address assembly on binary strings
//! - [`lookup`] - Validated wrappers working on parsed addresses

mod find;
mod lookup;

// Re-export public functions
pub use find::{find_host, find_ip, find_subnet, RESERVED};
pub use lookup::{build, locate, Location};
