//! Terminal output with colors.

use super::Report;
use crate::error::Result;
use crate::models::AddressClass;
use colored::{ColoredString, Colorize};
use itertools::Itertools;
use std::io::Write;

const LABEL_WIDTH: usize = 18;

/// Class letter colored the same way for every report.
pub fn class_colored(class: AddressClass) -> ColoredString {
    let text = class.as_str();
    match class {
        AddressClass::A => text.green(),
        AddressClass::B => text.blue(),
        AddressClass::C => text.purple(),
        AddressClass::D => text.yellow(),
        AddressClass::E => text.red(),
        AddressClass::Invalid => text.normal(),
    }
}

/// Format a count with `,` every three digits, e.g. `16,777,214`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(String::from_utf8_lossy)
        .join(",")
}

fn line<W: Write>(out: &mut W, label: &str, value: impl std::fmt::Display) -> Result<()> {
    writeln!(out, "{:<LABEL_WIDTH$}{value}", label.bold())?;
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    let r = &report.result;
    let dash = || "-".to_string();

    line(
        out,
        "IP Address",
        format!("{} (Class {})", r.address, class_colored(r.class)),
    )?;
    line(out, "Subnet Mask", format!("{} (/{})", r.subnet_mask, r.prefix_len))?;
    line(out, "Network Address", r.network.to_string().on_blue())?;
    line(out, "Broadcast Address", r.broadcast)?;
    line(out, "First Host", r.first_host.map_or_else(dash, |ip| ip.to_string()))?;
    line(out, "Last Host", r.last_host.map_or_else(dash, |ip| ip.to_string()))?;
    line(
        out,
        "Host Range",
        r.usable_range().map_or_else(|_| dash(), |range| range.to_string()),
    )?;
    line(out, "Total Hosts", group_thousands(r.total_hosts))?;
    line(out, "Wildcard Mask", r.wildcard)?;

    if let Some(hosts) = &report.hosts {
        writeln!(out, "{} ({} addresses)", "Host Addresses".bold(), hosts.len())?;
        for host in hosts {
            writeln!(out, "  {host}")?;
        }
    }
    if let Some(note) = &report.hosts_note {
        writeln!(out, "#{}# {note}", "NOTE".on_red())?;
    }
    Ok(())
}

pub fn write_mask_table<W: Write>(out: &mut W, table: &[(u8, String)]) -> Result<()> {
    for (prefix, mask) in table {
        writeln!(out, "{:>4}  {mask}", format!("/{prefix}"))?;
    }
    Ok(())
}
