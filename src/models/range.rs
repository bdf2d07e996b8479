//! Inclusive range of usable host addresses.

use serde::Serialize;
use std::net::Ipv4Addr;

/// First and last usable host of a subnet, both inclusive.
#[derive(Serialize, Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct HostRange {
    pub first: Ipv4Addr,
    pub last: Ipv4Addr,
}

impl HostRange {
    pub fn new(first: Ipv4Addr, last: Ipv4Addr) -> Self {
        HostRange { first, last }
    }

    /// Number of addresses in the range, 0 when `first > last`.
    pub fn len(&self) -> u64 {
        let first = u32::from(self.first) as u64;
        let last = u32::from(self.last) as u64;
        if first > last {
            0
        } else {
            last - first + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    /// Check if an address lies inside the range.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.first && ip <= self.last
    }

    /// Every address from `first` to `last` in ascending order.
    ///
    /// Lazy, but the range can hold up to 2^32 addresses; callers should
    /// check [`HostRange::len`] against their own limit before collecting.
    pub fn iter(&self) -> impl Iterator<Item = Ipv4Addr> {
        let first = u32::from(self.first);
        let last = u32::from(self.last);
        (first..=last).map(Ipv4Addr::from)
    }
}

impl std::fmt::Display for HostRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} - {}", self.first, self.last)
    }
}
