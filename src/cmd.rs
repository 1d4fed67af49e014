//! Command line interface.

use crate::config::OutputFormat;
use crate::models::Ipv4;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "subnet-calc")]
#[command(about = "Subnet and host index arithmetic for IPv4 networks.")]
pub struct CommandLine {
    /// Output format (terminal, csv, json), overrides SUBNET_CALC_OUTPUT
    #[arg(long, global = true, value_parser = parse_output)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the subnet and host index of an address, e.g. 192.168.1.54/24
    #[command(alias = "l")]
    Locate {
        #[arg(value_parser = parse_cidr)]
        target: Ipv4,
        /// Bits after the network prefix that select the subnet
        #[arg(short, long, default_value_t = 0)]
        subnet_bits: u8,
    },
    /// Build the address of a host in a subnet of a network, e.g. 192.168.1.0/24
    #[command(alias = "b")]
    Build {
        #[arg(value_parser = parse_cidr)]
        network: Ipv4,
        #[arg(short, long, default_value_t = 0)]
        subnet_bits: u8,
        /// Subnet index
        #[arg(long, default_value_t = 0)]
        subnet: u32,
        /// Host index
        #[arg(long)]
        host: u32,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_cidr(s: &str) -> Result<Ipv4, String> {
    Ipv4::new(s).map_err(|e| e.to_string())
}

fn parse_output(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
