//! Error types for subnet calculations.
//!
//! Address and mask problems are kept apart so a caller can point at the
//! field that is wrong instead of reporting a generic failure.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum SubnetError {
    /// The address text is not four dotted octets in [0,255].
    #[error("invalid IP address '{input}': {reason}")]
    MalformedAddress { input: String, reason: AddressFault },

    /// The mask text is neither a valid `/N` prefix nor a contiguous dotted mask.
    #[error("invalid subnet mask '{input}': {reason}")]
    MalformedMask { input: String, reason: MaskFault },

    /// A /31 or /32 has no usable host range.
    #[error("/{prefix} has no usable host addresses")]
    DegenerateRange { prefix: u8 },

    /// The host list was requested for a subnet larger than the caller allows.
    #[error("host list limited to {limit} addresses, subnet has {hosts}")]
    HostLimitExceeded { hosts: u64, limit: u64 },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Output I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why an address (or the octets of a dotted mask) failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressFault {
    #[error("no address given")]
    Missing,

    #[error("expected 4 octets, found {0}")]
    OctetCount(usize),

    #[error("octet '{0}' is not a decimal number")]
    NonNumeric(String),

    #[error("octet '{0}' is outside 0-255")]
    OutOfRange(String),
}

/// Why a mask failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskFault {
    #[error("no mask given")]
    Missing,

    #[error("prefix '{0}' is not a decimal number")]
    PrefixNotNumeric(String),

    #[error("prefix length {0} is outside 0-32")]
    PrefixOutOfRange(String),

    #[error("{0}")]
    Octets(AddressFault),

    /// A 1-bit follows a 0-bit, e.g. 255.0.255.0.
    #[error("mask bits are not contiguous")]
    NonContiguous,
}

impl SubnetError {
    pub(crate) fn address(input: &str, reason: AddressFault) -> Self {
        SubnetError::MalformedAddress {
            input: input.to_string(),
            reason,
        }
    }

    pub(crate) fn mask(input: &str, reason: MaskFault) -> Self {
        SubnetError::MalformedMask {
            input: input.to_string(),
            reason,
        }
    }

    /// Name of the input field at fault, if the error is about user input.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SubnetError::MalformedAddress { .. } => Some("address"),
            SubnetError::MalformedMask { .. } => Some("mask"),
            _ => None,
        }
    }
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, SubnetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SubnetError::address("256.1.1.1", AddressFault::OutOfRange("256".into()));
        assert_eq!(
            err.to_string(),
            "invalid IP address '256.1.1.1': octet '256' is outside 0-255"
        );
        assert_eq!(err.field(), Some("address"));

        let err = SubnetError::mask("255.0.255.0", MaskFault::NonContiguous);
        assert_eq!(
            err.to_string(),
            "invalid subnet mask '255.0.255.0': mask bits are not contiguous"
        );
        assert_eq!(err.field(), Some("mask"));

        let err = SubnetError::DegenerateRange { prefix: 31 };
        assert_eq!(err.to_string(), "/31 has no usable host addresses");
        assert_eq!(err.field(), None);
    }
}
