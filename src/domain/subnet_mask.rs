use ipnetwork::{ipv4_mask_to_prefix, ipv6_mask_to_prefix};
use std::fmt::{Display, Formatter};
use std::net::IpAddr;

/// A dotted-decimal (or IPv6) netmask. Kept as a mask, never as a host address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetMask(IpAddr);

impl SubnetMask {
    /// Parses a netmask. Returns `None` for anything that is not an address.
    pub fn parse(s: &str) -> Option<SubnetMask> {
        s.trim().parse().ok().map(SubnetMask)
    }

    pub fn addr(&self) -> IpAddr {
        self.0
    }

    /// The mask's prefix length, `None` when its bits are not contiguous.
    pub fn prefix_len(&self) -> Option<u8> {
        match self.0 {
            IpAddr::V4(mask) => ipv4_mask_to_prefix(mask).ok(),
            IpAddr::V6(mask) => ipv6_mask_to_prefix(mask).ok(),
        }
    }

    pub fn octets(&self) -> Vec<u8> {
        match self.0 {
            IpAddr::V4(mask) => mask.octets().to_vec(),
            IpAddr::V6(mask) => mask.octets().to_vec(),
        }
    }
}

impl Display for SubnetMask {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("255.255.255.0", Some(24))]
    #[case("255.255.0.0", Some(16))]
    #[case("0.0.0.0", Some(0))]
    #[case("ffff:ffff:ffff:ffff::", Some(64))]
    #[case::holes("255.0.255.0", None)]
    fn computes_prefix_length(#[case] input: &str, #[case] expected: Option<u8>) {
        assert_eq!(SubnetMask::parse(input).and_then(|m| m.prefix_len()), expected);
    }

    #[test]
    fn ipv4_masks_are_four_bytes() {
        let mask = SubnetMask::parse(" 255.255.255.0 ").expect("valid mask");
        assert_eq!(mask.octets(), vec![255, 255, 255, 0]);
        assert_eq!(mask.to_string(), "255.255.255.0");
    }

    #[rstest]
    #[case("")]
    #[case("255.255.255")]
    #[case("mask")]
    fn rejects_non_addresses(#[case] input: &str) {
        assert_eq!(SubnetMask::parse(input), None);
    }
}
