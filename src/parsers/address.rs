use crate::domain::{MacAddress, MacAddressError};
use std::net::{AddrParseError, IpAddr};

/// Parses an IPv4 or IPv6 address, ignoring surrounding whitespace.
pub fn parse_ip(s: &str) -> Result<IpAddr, AddrParseError> {
    s.trim().parse()
}

/// An empty value is an absent address, anything else must be a valid address.
pub fn parse_optional_ip(s: &str) -> Result<Option<IpAddr>, AddrParseError> {
    match s.trim() {
        "" => Ok(None),
        value => value.parse().map(Some),
    }
}

/// Parses every non-blank entry of an address list.
pub fn parse_ip_list(values: &[String]) -> Result<Vec<IpAddr>, AddrParseError> {
    values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()).map(str::parse).collect()
}

/// Parses a MAC address after trimming the whitespace and newlines the device sometimes appends.
pub fn parse_mac(s: &str) -> Result<MacAddress, MacAddressError> {
    s.trim().parse()
}

/// An empty value is an absent MAC address.
pub fn parse_optional_mac(s: &str) -> Result<Option<MacAddress>, MacAddressError> {
    match s.trim() {
        "" => Ok(None),
        value => value.parse().map(Some),
    }
}
