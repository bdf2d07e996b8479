//! Syntactic checks for address and mask text.

use crate::error::{MaskFault, Result, SubnetError};
use crate::models::{is_contiguous, parse_address, parse_octets, SubnetMask};
use std::net::Ipv4Addr;

/// Validate address text, returning the parsed address.
pub fn validate_address(text: &str) -> Result<Ipv4Addr> {
    parse_address(text).inspect_err(|e| log::trace!("rejected address: {e}"))
}

/// True iff `text` is four dotted decimal octets in [0,255].
pub fn is_valid_address(text: &str) -> bool {
    validate_address(text).is_ok()
}

/// Validate mask text in either `/N` or dotted form.
///
/// A dotted mask must be a run of 1-bits followed by 0-bits;
/// `255.0.255.0` is rejected, `0.0.0.0` and `255.255.255.255` are accepted.
pub fn validate_mask(text: &str) -> Result<SubnetMask> {
    let mask = match text.strip_prefix('/') {
        Some(prefix) => parse_prefix(prefix).map_err(|reason| SubnetError::mask(text, reason)),
        None => parse_dotted_mask(text).map_err(|reason| SubnetError::mask(text, reason)),
    };
    mask.inspect_err(|e| log::trace!("rejected mask: {e}"))
}

/// True iff `text` is a `/0`..`/32` prefix or a contiguous dotted mask.
pub fn is_valid_mask(text: &str) -> bool {
    validate_mask(text).is_ok()
}

fn parse_prefix(prefix: &str) -> std::result::Result<SubnetMask, MaskFault> {
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MaskFault::PrefixNotNumeric(prefix.to_string()));
    }
    let len: u8 = prefix
        .parse()
        .map_err(|_| MaskFault::PrefixOutOfRange(prefix.to_string()))?;
    SubnetMask::from_prefix(len).map_err(|_| MaskFault::PrefixOutOfRange(prefix.to_string()))
}

fn parse_dotted_mask(text: &str) -> std::result::Result<SubnetMask, MaskFault> {
    let bits = u32::from_be_bytes(parse_octets(text).map_err(MaskFault::Octets)?);
    if !is_contiguous(bits) {
        return Err(MaskFault::NonContiguous);
    }
    SubnetMask::from_bits(bits).map_err(|_| MaskFault::NonContiguous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressFault;

    fn mask_fault(text: &str) -> MaskFault {
        match validate_mask(text) {
            Err(SubnetError::MalformedMask { reason, .. }) => reason,
            other => panic!("expected MalformedMask for {text:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_is_valid_address() {
        assert!(is_valid_address("192.168.1.1"));
        assert!(is_valid_address("0.0.0.0"));
        assert!(is_valid_address("255.255.255.255"));
        assert!(!is_valid_address("256.1.1.1"));
        assert!(!is_valid_address("1.1.1"));
        assert!(!is_valid_address("1.1.1.1.1"));
        assert!(!is_valid_address("a.b.c.d"));
        assert!(!is_valid_address("1.1.1.1a"));
        assert!(!is_valid_address(" 1.1.1.1"));
        assert!(!is_valid_address("1.1.1.-1"));
        assert!(!is_valid_address(""));
    }

    #[test]
    fn test_is_valid_mask_cidr() {
        assert!(is_valid_mask("/0"));
        assert!(is_valid_mask("/24"));
        assert!(is_valid_mask("/32"));
        assert!(!is_valid_mask("/33"));
        assert!(!is_valid_mask("/"));
        assert!(!is_valid_mask("/-1"));
        assert!(!is_valid_mask("/2x"));
        assert!(!is_valid_mask("24"));
    }

    #[test]
    fn test_is_valid_mask_dotted() {
        assert!(is_valid_mask("255.255.255.0"));
        assert!(is_valid_mask("255.255.255.255"));
        assert!(is_valid_mask("0.0.0.0"));
        assert!(is_valid_mask("255.255.255.252"));
        assert!(is_valid_mask("128.0.0.0"));
        assert!(!is_valid_mask("255.0.255.0"));
        assert!(!is_valid_mask("0.255.255.255"));
        assert!(!is_valid_mask("255.255.255.1"));
        assert!(!is_valid_mask("255.255.256.0"));
        assert!(!is_valid_mask("255.255.255"));
    }

    #[test]
    fn test_mask_fault_reasons() {
        assert_eq!(mask_fault("/"), MaskFault::PrefixNotNumeric("".into()));
        assert_eq!(mask_fault("/33"), MaskFault::PrefixOutOfRange("33".into()));
        assert_eq!(mask_fault("/300"), MaskFault::PrefixOutOfRange("300".into()));
        assert_eq!(mask_fault("255.0.255.0"), MaskFault::NonContiguous);
        assert_eq!(
            mask_fault("255.255"),
            MaskFault::Octets(AddressFault::OctetCount(2))
        );
    }

    #[test]
    fn test_validate_mask_canonical() {
        assert_eq!(validate_mask("/24").unwrap(), validate_mask("255.255.255.0").unwrap());
        assert_eq!(validate_mask("0.0.0.0").unwrap().prefix_len(), 0);
        assert_eq!(validate_mask("255.255.255.255").unwrap().prefix_len(), 32);
    }
}
