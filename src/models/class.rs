//! Legacy classful address categories.

use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;

/// Address class by first-octet range. Informational only, never used
/// in subnet arithmetic.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
    /// First octet 0 or 127, which no class range covers.
    Invalid,
}

impl AddressClass {
    /// Classify an address by its first octet.
    pub fn of(addr: Ipv4Addr) -> AddressClass {
        match addr.octets()[0] {
            1..=126 => AddressClass::A,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            224..=239 => AddressClass::D,
            240..=255 => AddressClass::E,
            _ => AddressClass::Invalid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
            AddressClass::Invalid => "Invalid",
        }
    }
}

impl std::fmt::Display for AddressClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AddressClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
