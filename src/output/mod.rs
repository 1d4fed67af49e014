//! Output formatting for lookup results.
//!
//! This module handles formatting and outputting results:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors
//! - [`json`] - Pretty printed JSON

mod csv;
mod json;
mod terminal;

use crate::config::OutputFormat;
use crate::models::SubnetLayout;
use crate::processing::Location;
use serde::Serialize;
use std::error::Error;
use std::net::Ipv4Addr;

pub use csv::{built_row, location_row, BUILT_HEADER, LOCATION_HEADER};
pub use json::to_json;
pub use terminal::{built_line, format_field, location_line};

/// An address assembled from a network, subnet index and host index.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BuiltRow {
    pub network: Ipv4Addr,
    pub layout: SubnetLayout,
    pub subnet: u32,
    pub host: u32,
    pub address: Ipv4Addr,
}

/// Print a located address to stdout.
pub fn print_location(loc: &Location, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    log::debug!("print_location({}) as {format:?}", loc.address);
    match format {
        OutputFormat::Terminal => println!("{}", location_line(loc)),
        OutputFormat::Csv => {
            println!("{LOCATION_HEADER}");
            println!("{}", location_row(loc));
        }
        OutputFormat::Json => println!("{}", to_json(loc)?),
    }
    Ok(())
}

/// Print a built address to stdout.
pub fn print_built(row: &BuiltRow, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    log::debug!("print_built({}) as {format:?}", row.address);
    match format {
        OutputFormat::Terminal => println!("{}", built_line(row)),
        OutputFormat::Csv => {
            println!("{BUILT_HEADER}");
            println!("{}", built_row(row));
        }
        OutputFormat::Json => println!("{}", to_json(row)?),
    }
    Ok(())
}
