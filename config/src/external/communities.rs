// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Communities requested on advertised prefixes

use std::fmt::Display;

/// Marker of a large community in the declarative API
pub const LARGE_COMMUNITY_PREFIX: &str = "large:";

/// A community tag as requested for an advertised prefix. The value is not validated:
/// the routing daemon is the authority on community syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvCommunity<'a> {
    /// A standard community, e.g. `65000:100`
    Standard(&'a str),
    /// A large community, stripped of its `large:` marker, e.g. `65000:100:1`
    Large(&'a str),
}

impl<'a> From<&'a str> for AdvCommunity<'a> {
    fn from(community: &'a str) -> Self {
        match community.strip_prefix(LARGE_COMMUNITY_PREFIX) {
            Some(large) => AdvCommunity::Large(large),
            None => AdvCommunity::Standard(community),
        }
    }
}

impl Display for AdvCommunity<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvCommunity::Standard(c) => write!(f, "{c}"),
            AdvCommunity::Large(c) => write!(f, "{LARGE_COMMUNITY_PREFIX}{c}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_communities() {
        assert_eq!(AdvCommunity::from("10:100"), AdvCommunity::Standard("10:100"));
        assert_eq!(
            AdvCommunity::from("large:123:456:7890"),
            AdvCommunity::Large("123:456:7890")
        );
        // only a leading marker counts
        assert_eq!(
            AdvCommunity::from("10:large:1"),
            AdvCommunity::Standard("10:large:1")
        );
        assert_eq!(AdvCommunity::from("large:"), AdvCommunity::Large(""));
    }

    #[test]
    fn test_display_restores_marker() {
        for c in ["10:100", "large:1:2:3"] {
            assert_eq!(AdvCommunity::from(c).to_string(), c);
        }
    }
}
