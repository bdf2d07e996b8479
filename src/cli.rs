//! Command-line front end.

use crate::config::{Config, OutputFormat};
use crate::error::{AddressFault, MaskFault, Result, SubnetError};
use crate::output::{self, Report};
use crate::processing::{mask_table, resolve};
use clap::Parser;
use std::io::Write;

/// IPv4 subnet calculator: network, broadcast, host range and masks.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// IPv4 address, e.g. 192.168.1.10 or 192.168.1.10/24
    pub address: Option<String>,

    /// Subnet mask, dotted (255.255.255.0) or prefix (/24)
    pub mask: Option<String>,

    /// List every usable host address
    #[arg(long)]
    pub hosts: bool,

    /// Largest host list to print [env: SUBNET_CALC_HOST_LIMIT]
    #[arg(long)]
    pub limit: Option<u64>,

    /// Output format [env: SUBNET_CALC_FORMAT]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the /0 to /32 mask table and exit
    #[arg(long, conflicts_with_all = ["address", "mask", "hosts"])]
    pub masks: bool,
}

impl Cli {
    /// Address and mask text, splitting `addr/prefix` when no mask is given.
    pub fn inputs(&self) -> Result<(String, String)> {
        let address = self
            .address
            .as_deref()
            .ok_or_else(|| SubnetError::address("", AddressFault::Missing))?;

        match (&self.mask, address.split_once('/')) {
            (Some(mask), _) => Ok((address.to_string(), mask.clone())),
            (None, Some((addr, prefix))) => Ok((addr.to_string(), format!("/{prefix}"))),
            (None, None) => Err(SubnetError::mask("", MaskFault::Missing)),
        }
    }
}

/// Run one invocation, writing the result to `out`.
///
/// Flags take precedence over `config`.
pub fn run<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> Result<()> {
    let format = cli.format.unwrap_or(config.format);

    if cli.masks {
        return output::write_mask_table(out, &mask_table(), format);
    }

    let (address, mask) = cli.inputs()?;
    let result = resolve(&address, &mask)?;
    log::info!("Calculated {} for {address} {mask}", result.cidr());

    let limit = cli.limit.unwrap_or(config.host_limit);
    let report = Report::new(result, cli.hosts, limit);
    output::write_report(out, &report, format)
}
