//! IPv4 subnet arithmetic.
//!
//! Finds the subnet and host index of an address inside a subnetted network,
//! and rebuilds an address from a network, subnet index and host index.

pub mod cmd;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

use cmd::{CommandLine, Commands};
use config::Config;
use models::{Ipv4, SubnetLayout};
use output::BuiltRow;
use processing::Location;
use std::error::Error;

/// Locate the address of a CIDR string (e.g. "192.168.1.54/24") inside its
/// network split by `subnet_bits`.
pub fn locate_cidr(target: &str, subnet_bits: u8) -> Result<Location, Box<dyn Error>> {
    let target = Ipv4::new(target)?;
    let layout = SubnetLayout::for_network(target, subnet_bits)?;
    processing::locate(target.addr, layout)
}

/// Build host `host` of subnet `subnet` in the network of a CIDR string.
pub fn build_cidr(
    network: &str,
    subnet_bits: u8,
    subnet: u32,
    host: u32,
) -> Result<BuiltRow, Box<dyn Error>> {
    let network = Ipv4::new(network)?;
    build_row(network, subnet_bits, subnet, host)
}

fn build_row(
    network: Ipv4,
    subnet_bits: u8,
    subnet: u32,
    host: u32,
) -> Result<BuiltRow, Box<dyn Error>> {
    let layout = SubnetLayout::for_network(network, subnet_bits)?;
    let address = processing::build(network.addr, layout, subnet, host)?;
    Ok(BuiltRow {
        network: network.network(),
        layout,
        subnet,
        host,
        address,
    })
}

/// Execute a parsed command line.
pub fn run(cli: CommandLine, config: &Config) -> Result<(), Box<dyn Error>> {
    let format = cli.output.unwrap_or(config.output);
    match cli.command {
        Commands::Locate {
            target,
            subnet_bits,
        } => {
            log::info!("Locate {target} with {subnet_bits} subnet bits");
            let layout = SubnetLayout::for_network(target, subnet_bits)?;
            let loc = processing::locate(target.addr, layout)?;
            output::print_location(&loc, format)
        }
        Commands::Build {
            network,
            subnet_bits,
            subnet,
            host,
        } => {
            log::info!("Build subnet {subnet} host {host} in {network} with {subnet_bits} subnet bits");
            let row = build_row(network, subnet_bits, subnet, host)?;
            output::print_built(&row, format)
        }
    }
}
