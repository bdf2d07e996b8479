//! Output formatting for subnet results.
//!
//! This module handles rendering a calculation for the user:
//! - [`terminal`] - Labelled report with colors
//! - [`csv`] - Quoted CSV rows
//! - [`json`] - Pretty printed JSON
//!
//! All writers take any [`std::io::Write`].

mod csv;
mod json;
mod terminal;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::models::SubnetResult;
use crate::processing::host_list;
use serde::Serialize;
use std::io::Write;
use std::net::Ipv4Addr;

pub use terminal::{class_colored, group_thousands};

/// A result plus the optional host list requested alongside it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    #[serde(flatten)]
    pub result: SubnetResult,
    /// Usable hosts, when requested and within the limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<Ipv4Addr>>,
    /// Why a requested host list was withheld.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts_note: Option<String>,
}

impl Report {
    /// Build a report, enumerating hosts only when asked and within `host_limit`.
    pub fn new(result: SubnetResult, with_hosts: bool, host_limit: u64) -> Report {
        let (hosts, hosts_note) = if with_hosts {
            match host_list(&result, host_limit) {
                Ok(hosts) => (Some(hosts), None),
                Err(e) => (None, Some(e.to_string())),
            }
        } else {
            (None, None)
        };
        Report {
            result,
            hosts,
            hosts_note,
        }
    }
}

/// Write a report in the chosen format.
pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Terminal => terminal::write_report(out, report),
        OutputFormat::Csv => csv::write_report(out, report),
        OutputFormat::Json => json::write_report(out, report),
    }
}

/// Write the /0 to /32 prefix table in the chosen format.
pub fn write_mask_table<W: Write>(
    out: &mut W,
    table: &[(u8, String)],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Terminal => terminal::write_mask_table(out, table),
        OutputFormat::Csv => csv::write_mask_table(out, table),
        OutputFormat::Json => json::write_mask_table(out, table),
    }
}
