// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Prefix policies of neighbors

use k8s_intf::frr_configuration_crd::{AllowMode, AllowedPrefixes};

/// Which prefixes a policy lets through. The explicit list only exists when restricted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixPolicy<'a> {
    /// Every prefix. For outbound policies, every prefix originated by the router.
    AllowAll,
    /// Only the listed prefixes, of either family
    AllowRestricted(&'a [String]),
}

impl<'a> From<&'a AllowedPrefixes> for PrefixPolicy<'a> {
    fn from(allowed: &'a AllowedPrefixes) -> Self {
        match allowed.mode {
            AllowMode::AllowAll => PrefixPolicy::AllowAll,
            AllowMode::AllowRestricted => PrefixPolicy::AllowRestricted(&allowed.prefixes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_deny_all() {
        let allowed = AllowedPrefixes::default();
        assert_eq!(PrefixPolicy::from(&allowed), PrefixPolicy::AllowRestricted(&[]));
    }

    #[test]
    fn test_allow_all_ignores_list() {
        let allowed = AllowedPrefixes {
            prefixes: vec!["192.0.2.0/24".to_string()],
            mode: AllowMode::AllowAll,
        };
        assert_eq!(PrefixPolicy::from(&allowed), PrefixPolicy::AllowAll);
    }

    #[test]
    fn test_restricted_keeps_list() {
        let allowed = AllowedPrefixes {
            prefixes: vec!["192.0.2.0/24".to_string(), "2001:db8::/64".to_string()],
            mode: AllowMode::AllowRestricted,
        };
        assert_eq!(
            PrefixPolicy::from(&allowed),
            PrefixPolicy::AllowRestricted(allowed.prefixes.as_slice())
        );
    }
}
