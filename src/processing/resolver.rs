//! Subnet derivation from an address and mask.

use super::validator::{validate_address, validate_mask};
use crate::error::{Result, SubnetError};
use crate::models::{broadcast_addr, cut_addr, AddressClass, HostRange, SubnetResult, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Host list size the calculator front end allows by default.
pub const DEFAULT_HOST_LIMIT: u64 = 1024;

/// Classify address text by its first octet.
pub fn classify(address: &str) -> Result<AddressClass> {
    Ok(AddressClass::of(validate_address(address)?))
}

/// Wildcard mask (`255 - octet` per octet) for mask text in either form.
pub fn wildcard_mask(mask: &str) -> Result<String> {
    Ok(validate_mask(mask)?.wildcard().to_string())
}

/// Number of usable hosts for a prefix: `2^(32 - p) - 2`, floored at 0.
///
/// /31 and /32 give 0; point-to-point and single-host conventions are not
/// applied.
pub fn num_hosts(prefix_len: u8) -> u64 {
    let size = 1u64 << (MAX_LENGTH - prefix_len.min(MAX_LENGTH));
    size.saturating_sub(2)
}

/// Calculate all subnet values for an address and mask.
///
/// The address is checked before the mask, so input with both fields wrong
/// reports the address.
///
/// # Returns
/// * `Ok(SubnetResult)` - Network, broadcast, host range and counts
/// * `Err(MalformedAddress | MalformedMask)` - Nothing is computed
pub fn resolve(address: &str, mask: &str) -> Result<SubnetResult> {
    let addr = validate_address(address)?;
    let mask = validate_mask(mask)?;
    let prefix_len = mask.prefix_len();

    let network = cut_addr(addr, prefix_len)?;
    let broadcast = broadcast_addr(addr, prefix_len)?;
    let total_hosts = num_hosts(prefix_len);

    let (first_host, last_host) = if total_hosts == 0 {
        (None, None)
    } else {
        (
            Some(Ipv4Addr::from(u32::from(network) + 1)),
            Some(Ipv4Addr::from(u32::from(broadcast) - 1)),
        )
    };

    let result = SubnetResult {
        address: addr,
        subnet_mask: mask,
        prefix_len,
        network,
        broadcast,
        first_host,
        last_host,
        total_hosts,
        class: AddressClass::of(addr),
        wildcard: mask.wildcard(),
    };
    log::debug!(
        "resolve({address}, {mask}) -> {cidr} hosts={total_hosts}",
        cidr = result.cidr()
    );
    Ok(result)
}

/// Every address from `first` to `last` inclusive, ascending.
///
/// Yields nothing when `first > last`. The sequence is lazy but unbounded
/// by this function: callers are expected to check the range size against
/// their own limit first (see [`host_list`]).
pub fn enumerate_hosts(first: &str, last: &str) -> Result<impl Iterator<Item = String>> {
    let range = HostRange::new(validate_address(first)?, validate_address(last)?);
    Ok(range.iter().map(|ip| ip.to_string()))
}

/// Usable hosts of a result, refusing ranges larger than `limit`.
///
/// # Returns
/// * `Ok(Vec)` - Every usable host in ascending order
/// * `Err(DegenerateRange)` - /31 or /32, no usable hosts
/// * `Err(HostLimitExceeded)` - More than `limit` usable hosts
pub fn host_list(result: &SubnetResult, limit: u64) -> Result<Vec<Ipv4Addr>> {
    let range = result.usable_range()?;
    if range.len() > limit {
        log::warn!(
            "Host list skipped for {}: {} hosts > limit {limit}",
            result.cidr(),
            range.len()
        );
        return Err(SubnetError::HostLimitExceeded {
            hosts: range.len(),
            limit,
        });
    }
    Ok(range.iter().collect())
}
