//! Calculated subnet data model.

use super::{AddressClass, HostRange, SubnetMask};
use crate::error::{Result, SubnetError};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything derived from one address and mask pair.
///
/// Built fresh by [`crate::processing::resolve`] and never mutated.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetResult {
    /// The address as supplied.
    pub address: Ipv4Addr,
    /// Canonical dotted form of the supplied mask.
    pub subnet_mask: SubnetMask,
    /// Prefix length (0-32).
    pub prefix_len: u8,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    /// First usable host, absent for /31 and /32.
    pub first_host: Option<Ipv4Addr>,
    /// Last usable host, absent for /31 and /32.
    pub last_host: Option<Ipv4Addr>,
    /// `2^(32 - prefix) - 2`, floored at 0.
    pub total_hosts: u64,
    pub class: AddressClass,
    pub wildcard: Ipv4Addr,
}

impl SubnetResult {
    /// The usable host range, or [`SubnetError::DegenerateRange`] when the
    /// subnet has none.
    pub fn usable_range(&self) -> Result<HostRange> {
        match (self.first_host, self.last_host) {
            (Some(first), Some(last)) => Ok(HostRange::new(first, last)),
            _ => Err(SubnetError::DegenerateRange {
                prefix: self.prefix_len,
            }),
        }
    }

    /// `network/prefix` notation.
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.network, self.prefix_len)
    }
}

impl std::fmt::Display for SubnetResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len)
    }
}
