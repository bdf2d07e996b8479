//! Conversion between CIDR prefix lengths and dotted masks.

use super::validator::validate_mask;
use crate::error::Result;
use crate::models::{get_cidr_mask, MAX_LENGTH};
use itertools::Itertools;

/// Prefix length of a mask given as `/N` or dotted decimal.
///
/// Validates first, so a non-contiguous mask is an error rather than a
/// count of its 1-bits.
pub fn mask_to_cidr(text: &str) -> Result<u8> {
    Ok(validate_mask(text)?.prefix_len())
}

/// Dotted-decimal mask for a prefix length (0-32).
///
/// # Examples
/// ```
/// use ip_subnet_calc::processing::cidr_to_mask;
/// assert_eq!(cidr_to_mask(20).unwrap(), "255.255.240.0");
/// ```
pub fn cidr_to_mask(n: u8) -> Result<String> {
    let mask = get_cidr_mask(n)?;
    Ok(mask.to_be_bytes().iter().join("."))
}

/// Every prefix from /0 to /32 with its dotted mask.
pub fn mask_table() -> Vec<(u8, String)> {
    (0..=MAX_LENGTH)
        .filter_map(|n| cidr_to_mask(n).ok().map(|mask| (n, mask)))
        .collect()
}
