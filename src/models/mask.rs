//! Subnet mask value type.

use super::ipv4::{get_cidr_mask, MAX_LENGTH};
use crate::error::{MaskFault, Result, SubnetError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;
use std::str::FromStr;

lazy_static! {
    // Zero or more 1s followed by zero or more 0s over the padded bit string.
    static ref CONTIGUOUS_BITS: Regex = Regex::new(r"^1*0*$").expect("Invalid Regex?");
}

/// True when the 32-bit value is a run of 1-bits followed only by 0-bits.
pub fn is_contiguous(bits: u32) -> bool {
    CONTIGUOUS_BITS.is_match(&format!("{bits:032b}"))
}

/// A subnet mask whose bits are known to be contiguous.
///
/// Always built from a prefix length, so a CIDR mask and the equivalent
/// dotted mask are the same value.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct SubnetMask {
    prefix_len: u8,
}

impl SubnetMask {
    /// Create a mask from a prefix length (0-32).
    pub fn from_prefix(prefix_len: u8) -> Result<SubnetMask> {
        if prefix_len > MAX_LENGTH {
            return Err(SubnetError::mask(
                &format!("/{prefix_len}"),
                MaskFault::PrefixOutOfRange(prefix_len.to_string()),
            ));
        }
        Ok(SubnetMask { prefix_len })
    }

    /// Create a mask from its 32-bit value, rejecting non-contiguous bits.
    pub fn from_bits(bits: u32) -> Result<SubnetMask> {
        if !is_contiguous(bits) {
            return Err(SubnetError::mask(
                &Ipv4Addr::from(bits).to_string(),
                MaskFault::NonContiguous,
            ));
        }
        Ok(SubnetMask {
            prefix_len: bits.leading_ones() as u8,
        })
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// The mask as a 32-bit value.
    pub fn bits(&self) -> u32 {
        // prefix_len is checked on construction
        get_cidr_mask(self.prefix_len).unwrap_or(u32::MAX)
    }

    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.bits())
    }

    /// Bitwise complement of the mask over exactly 32 bits.
    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.bits())
    }
}

impl FromStr for SubnetMask {
    type Err = SubnetError;

    /// Accepts `/N` or a dotted mask such as `255.255.255.0`.
    fn from_str(s: &str) -> Result<SubnetMask> {
        crate::processing::validate_mask(s)
    }
}

impl std::fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.addr())
    }
}

impl Serialize for SubnetMask {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_contiguous() {
        assert!(is_contiguous(0));
        assert!(is_contiguous(u32::MAX));
        assert!(is_contiguous(0xFFFFFF00));
        assert!(is_contiguous(0x80000000));
        assert!(!is_contiguous(0xFF00FF00));
        assert!(!is_contiguous(0x00000001));
        assert!(!is_contiguous(0xFFFFFF01));
    }

    #[test]
    fn test_from_prefix() {
        let mask = SubnetMask::from_prefix(24).unwrap();
        assert_eq!(mask.bits(), 0xFFFFFF00);
        assert_eq!(mask.to_string(), "255.255.255.0");
        assert_eq!(mask.wildcard(), Ipv4Addr::new(0, 0, 0, 255));

        assert_eq!(SubnetMask::from_prefix(0).unwrap().bits(), 0);
        assert_eq!(SubnetMask::from_prefix(32).unwrap().bits(), u32::MAX);
        assert_eq!(
            SubnetMask::from_prefix(0).unwrap().wildcard(),
            Ipv4Addr::BROADCAST
        );
        assert!(SubnetMask::from_prefix(33).is_err());
    }

    #[test]
    fn test_from_bits() {
        assert_eq!(SubnetMask::from_bits(0xFFFF0000).unwrap().prefix_len(), 16);
        assert_eq!(SubnetMask::from_bits(u32::MAX).unwrap().prefix_len(), 32);
        assert_eq!(SubnetMask::from_bits(0).unwrap().prefix_len(), 0);
        assert!(matches!(
            SubnetMask::from_bits(0xFF00FF00),
            Err(SubnetError::MalformedMask {
                reason: MaskFault::NonContiguous,
                ..
            })
        ));
    }

    #[test]
    fn test_from_str_forms_agree() {
        let cidr: SubnetMask = "/20".parse().unwrap();
        let dotted: SubnetMask = "255.255.240.0".parse().unwrap();
        assert_eq!(cidr, dotted);
        assert!("255.0.255.0".parse::<SubnetMask>().is_err());
    }
}
