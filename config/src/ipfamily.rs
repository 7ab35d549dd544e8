// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Address family classification of addresses and prefixes given as strings

use std::fmt::Display;
use std::net::IpAddr;

use ipnet::{AddrParseError, IpNet};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum IpFamily {
    #[serde(rename = "ipv4")]
    IPv4,
    #[serde(rename = "ipv6")]
    IPv6,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("could not determine address family of '{address}': {reason}")]
pub struct IpFamilyError {
    pub address: String,
    pub reason: AddrParseError,
}

impl IpFamily {
    /// Tell the family of `input`, which may be an address (`192.0.2.1`, `2001:db8::1`) or a
    /// prefix in CIDR notation (`192.0.2.0/24`). Host bits in prefixes are not checked.
    /// IPv4-mapped IPv6 addresses (`::ffff:192.0.2.1`) and prefixes based on them are IPv4.
    ///
    /// # Errors
    /// Fails if `input` is neither an address nor a prefix.
    pub fn classify(input: &str) -> Result<Self, IpFamilyError> {
        if let Ok(address) = input.parse::<IpAddr>() {
            return Ok(address.into());
        }
        match input.parse::<IpNet>() {
            Ok(IpNet::V4(_)) => Ok(IpFamily::IPv4),
            Ok(IpNet::V6(net)) => Ok(IpAddr::V6(net.addr()).into()),
            Err(reason) => Err(IpFamilyError {
                address: input.to_string(),
                reason,
            }),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IpFamily::IPv4 => "ipv4",
            IpFamily::IPv6 => "ipv6",
        }
    }
}

impl From<IpAddr> for IpFamily {
    fn from(address: IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => IpFamily::IPv4,
            IpAddr::V6(v6) if v6.to_ipv4_mapped().is_some() => IpFamily::IPv4,
            IpAddr::V6(_) => IpFamily::IPv6,
        }
    }
}

impl Display for IpFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_addresses() {
        assert_eq!(IpFamily::classify("192.0.2.1"), Ok(IpFamily::IPv4));
        assert_eq!(IpFamily::classify("2001:db8::1"), Ok(IpFamily::IPv6));
    }

    #[test]
    fn test_classify_ipv4_mapped() {
        assert_eq!(IpFamily::classify("::ffff:192.0.2.1"), Ok(IpFamily::IPv4));
        assert_eq!(IpFamily::classify("::ffff:192.0.2.0/120"), Ok(IpFamily::IPv4));
        // IPv4-compatible (deprecated) and NAT64 addresses stay IPv6
        assert_eq!(IpFamily::classify("::192.0.2.1"), Ok(IpFamily::IPv6));
        assert_eq!(IpFamily::classify("64:ff9b::192.0.2.1"), Ok(IpFamily::IPv6));
    }

    #[test]
    fn test_classify_prefixes() {
        assert_eq!(IpFamily::classify("192.0.2.0/24"), Ok(IpFamily::IPv4));
        assert_eq!(IpFamily::classify("192.0.2.1/24"), Ok(IpFamily::IPv4));
        assert_eq!(IpFamily::classify("0.0.0.0/0"), Ok(IpFamily::IPv4));
        assert_eq!(IpFamily::classify("2001:db8::/64"), Ok(IpFamily::IPv6));
        assert_eq!(IpFamily::classify("::/0"), Ok(IpFamily::IPv6));
    }

    #[test]
    fn test_classify_garbage() {
        for input in ["", "192.0.2", "192.0.2.0/33", "2001:db8::/129", "foo", "10.0.0.0/"] {
            let err = IpFamily::classify(input).unwrap_err();
            assert_eq!(err.address, input);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(IpFamily::IPv4.to_string(), "ipv4");
        assert_eq!(IpFamily::IPv6.to_string(), "ipv6");
    }
}
