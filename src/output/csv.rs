//! CSV output formatting for subnet results.

use super::Report;
use crate::error::Result;
use std::io::Write;
use std::net::Ipv4Addr;

/// Format a value as a quoted, right-aligned field.
///
/// Embedded quotes are doubled so the field stays valid CSV.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let escaped = value.to_string().replace('"', "\"\"");
    let quoted = format!("\"{escaped}\"");
    format!("{quoted:>width$}")
}

fn host_or_dash(host: Option<Ipv4Addr>) -> String {
    host.map_or_else(|| "-".to_string(), |ip| ip.to_string())
}

pub fn write_report<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    let r = &report.result;
    writeln!(
        out,
        r#""address","subnet_mask","prefix","network","broadcast","first_host","last_host","total_hosts","wildcard","class""#
    )?;
    writeln!(
        out,
        "{address},{mask},{prefix},{network},{broadcast},{first},{last},{hosts},{wildcard},{class}",
        address = format_field(r.address, 17),
        mask = format_field(r.subnet_mask, 17),
        prefix = format_field(r.prefix_len, 4),
        network = format_field(r.network, 17),
        broadcast = format_field(r.broadcast, 17),
        first = format_field(host_or_dash(r.first_host), 17),
        last = format_field(host_or_dash(r.last_host), 17),
        hosts = format_field(r.total_hosts, 12),
        wildcard = format_field(r.wildcard, 17),
        class = format_field(r.class, 9),
    )?;

    if let Some(hosts) = &report.hosts {
        writeln!(out, r#""host""#)?;
        for host in hosts {
            writeln!(out, "{}", format_field(host, 17))?;
        }
    }
    if let Some(note) = &report.hosts_note {
        log::warn!("{note}");
    }
    Ok(())
}

pub fn write_mask_table<W: Write>(out: &mut W, table: &[(u8, String)]) -> Result<()> {
    writeln!(out, r#""prefix","subnet_mask""#)?;
    for (prefix, mask) in table {
        writeln!(
            out,
            "{},{}",
            format_field(format!("/{prefix}"), 5),
            format_field(mask, 17)
        )?;
    }
    Ok(())
}
