//! IPv4 address codec.
//!
//! Converts between dotted-decimal text and the 32-bit value all subnet
//! arithmetic works on, along with the prefix-to-mask bit convention.

use crate::error::{AddressFault, MaskFault, Result, SubnetError};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ip_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(SubnetError::mask(
            &format!("/{len}"),
            MaskFault::PrefixOutOfRange(len.to_string()),
        ))
    } else {
        let right_len = MAX_LENGTH - len;
        // u64 so a shift by 32 (prefix 0) stays defined.
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Parse dotted-decimal text into an address.
///
/// Exactly four `.`-separated parts, each made of ASCII digits only and
/// worth at most 255. Whitespace and signs are rejected. Leading zeros are
/// read as base 10.
pub fn parse_address(text: &str) -> Result<Ipv4Addr> {
    parse_octets(text)
        .map(Ipv4Addr::from)
        .map_err(|reason| SubnetError::address(text, reason))
}

/// Parse four dotted octets, reporting only the reason on failure.
///
/// Shared by address parsing and dotted-mask parsing, which wrap the
/// fault in their own error variant.
pub(crate) fn parse_octets(text: &str) -> std::result::Result<[u8; 4], AddressFault> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return Err(AddressFault::OctetCount(parts.len()));
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AddressFault::NonNumeric(part.to_string()));
        }
        *octet = part
            .parse()
            .map_err(|_| AddressFault::OutOfRange(part.to_string()))?;
    }
    Ok(octets)
}

/// Format a 32-bit value as dotted decimal, most significant octet first.
pub fn format_address(value: u32) -> String {
    let [a, b, c, d] = value.to_be_bytes();
    format!("{a}.{b}.{c}.{d}")
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(1).unwrap(), 0x80000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(
            parse_address("192.168.1.10").unwrap(),
            Ipv4Addr::new(192, 168, 1, 10)
        );
        assert_eq!(parse_address("0.0.0.0").unwrap(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(
            parse_address("255.255.255.255").unwrap(),
            Ipv4Addr::BROADCAST
        );
        // leading zeros are plain base 10
        assert_eq!(parse_address("010.0.0.1").unwrap(), Ipv4Addr::new(10, 0, 0, 1));
    }

    #[test]
    fn test_parse_address_faults() {
        let fault = |s: &str| match parse_address(s) {
            Err(SubnetError::MalformedAddress { reason, .. }) => reason,
            other => panic!("expected MalformedAddress for {s:?}, got {other:?}"),
        };
        assert_eq!(fault("1.2.3"), AddressFault::OctetCount(3));
        assert_eq!(fault("1.2.3.4.5"), AddressFault::OctetCount(5));
        assert_eq!(fault(""), AddressFault::OctetCount(1));
        assert_eq!(fault("1.2..4"), AddressFault::NonNumeric("".into()));
        assert_eq!(fault("1.2.x.4"), AddressFault::NonNumeric("x".into()));
        assert_eq!(fault(" 1.2.3.4"), AddressFault::NonNumeric(" 1".into()));
        assert_eq!(fault("1.2.3.4 "), AddressFault::NonNumeric("4 ".into()));
        assert_eq!(fault("+1.2.3.4"), AddressFault::NonNumeric("+1".into()));
        assert_eq!(fault("256.1.1.1"), AddressFault::OutOfRange("256".into()));
        assert_eq!(
            fault("1.1.1.99999999999"),
            AddressFault::OutOfRange("99999999999".into())
        );
    }

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(0), "0.0.0.0");
        assert_eq!(format_address(0xC0A8010A), "192.168.1.10");
        assert_eq!(format_address(u32::MAX), "255.255.255.255");
    }

    #[test]
    fn test_format_parse_identity() {
        for s in ["0.0.0.0", "10.0.0.1", "172.16.254.3", "255.255.255.255"] {
            let value = u32::from(parse_address(s).unwrap());
            assert_eq!(format_address(value), s);
        }
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), ip);
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 8).unwrap(),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(broadcast_addr(ip, 0).unwrap(), Ipv4Addr::BROADCAST);
        assert_eq!(broadcast_addr(ip, 32).unwrap(), ip);
    }
}
