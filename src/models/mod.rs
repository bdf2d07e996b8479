//! Domain models for the subnet calculator.
//!
//! This module contains the value types the calculator works with:
//! - [`ipv4`] - Dotted-decimal codec and prefix bit helpers
//! - [`SubnetMask`] - Mask with contiguous bits
//! - [`AddressClass`] - Legacy classful category
//! - [`SubnetResult`] and [`HostRange`] - Calculation output

mod class;
mod ipv4;
mod mask;
mod range;
mod subnet;

// Re-export public types
pub use class::AddressClass;
pub use ipv4::{
    broadcast_addr, cut_addr, format_address, get_cidr_mask, parse_address, MAX_LENGTH,
};
pub(crate) use ipv4::parse_octets;
pub use mask::{is_contiguous, SubnetMask};
pub use range::HostRange;
pub use subnet::SubnetResult;
