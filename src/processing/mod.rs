//! Subnet arithmetic.
//!
//! This module contains the pure calculation logic:
//! - [`validator`] - Address and mask syntax checks
//! - [`mask_converter`] - Prefix length and dotted mask conversion
//! - [`resolver`] - Network, broadcast, host range and host enumeration

mod mask_converter;
mod resolver;
mod validator;

// Re-export public functions
pub use mask_converter::{cidr_to_mask, mask_table, mask_to_cidr};
pub use resolver::{
    classify, enumerate_hosts, host_list, num_hosts, resolve, wildcard_mask, DEFAULT_HOST_LIMIT,
};
pub use validator::{is_valid_address, is_valid_mask, validate_address, validate_mask};
