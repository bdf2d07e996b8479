//! IPv4 subnet calculator.
//!
//! Pure address arithmetic: validate an address and mask, convert between
//! prefix and dotted masks, and derive network, broadcast, usable host
//! range, host count, wildcard mask and legacy address class.
//!
//! ```
//! use ip_subnet_calc::resolve;
//! let r = resolve("192.168.1.10", "/24").unwrap();
//! assert_eq!(r.network.to_string(), "192.168.1.0");
//! assert_eq!(r.total_hosts, 254);
//! ```
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Result, SubnetError};
pub use models::{format_address, parse_address, AddressClass, HostRange, SubnetMask, SubnetResult};
pub use processing::{
    cidr_to_mask, classify, enumerate_hosts, host_list, is_valid_address, is_valid_mask,
    mask_to_cidr, resolve, wildcard_mask,
};
