//! JSON output.

use super::Report;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct MaskRow<'a> {
    prefix: u8,
    subnet_mask: &'a str,
}

fn write_pretty<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    write_pretty(out, report)
}

pub fn write_mask_table<W: Write>(out: &mut W, table: &[(u8, String)]) -> Result<()> {
    let rows: Vec<MaskRow> = table
        .iter()
        .map(|(prefix, mask)| MaskRow {
            prefix: *prefix,
            subnet_mask: mask,
        })
        .collect();
    write_pretty(out, &rows)
}
