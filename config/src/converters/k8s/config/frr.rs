// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Compilation of an `FRRConfigurationSpec` into the resolved FRR config.
//!
//! For every router, originated prefixes are split by family. For every neighbor, the
//! outbound and inbound policies are turned into per-family filter lists, and the requested
//! communities are then attached to the outbound filters. The first error aborts the
//! conversion: routers, neighbors, community entries and their prefixes are visited in
//! declaration order, so the error reported for a given spec is always the same.

use k8s_intf::frr_configuration_crd::{
    CommunityPrefixes, FRRConfiguration, FRRConfigurationSpec, Neighbor, Router,
};
use tracing::{debug, trace};

use crate::converters::k8s::FromK8sConversionError;
use crate::external::{AdvCommunity, PrefixPolicy};
use crate::internal::frr::{
    AllowedIn, AllowedOut, BGP_DEFAULT_PORT, Config, NeighborConfig, RouterConfig,
};
use crate::ipfamily::IpFamily;

fn allowed_out(
    router: &RouterConfig,
    policy: PrefixPolicy<'_>,
) -> Result<AllowedOut, FromK8sConversionError> {
    let mut allowed = AllowedOut::default();
    match policy {
        PrefixPolicy::AllowAll => {
            for family in [IpFamily::IPv4, IpFamily::IPv6] {
                for prefix in router.prefixes(family) {
                    allowed.allow(family, prefix);
                }
            }
        }
        PrefixPolicy::AllowRestricted(prefixes) => {
            for prefix in prefixes {
                allowed.allow(IpFamily::classify(prefix)?, prefix);
            }
        }
    }
    Ok(allowed)
}

fn allowed_in(policy: PrefixPolicy<'_>) -> Result<AllowedIn, FromK8sConversionError> {
    let mut allowed = AllowedIn::default();
    match policy {
        PrefixPolicy::AllowAll => allowed.all = true,
        PrefixPolicy::AllowRestricted(prefixes) => {
            for prefix in prefixes {
                allowed.allow(IpFamily::classify(prefix)?, prefix);
            }
        }
    }
    Ok(allowed)
}

/// Attach communities to the outgoing filters of a neighbor. Attaching the same community
/// twice to a prefix lists it twice.
fn attach_communities(
    outgoing: &mut AllowedOut,
    neighbor_addr: &str,
    entries: &[CommunityPrefixes],
) -> Result<(), FromK8sConversionError> {
    for entry in entries {
        let community = AdvCommunity::from(entry.community.as_str());
        for prefix in &entry.prefixes {
            let family = IpFamily::classify(prefix)?;
            let Some(filter) = outgoing.filter_mut(family, prefix) else {
                debug!(
                    "Refusing community {} for prefix {prefix}: not advertised to {neighbor_addr}",
                    entry.community
                );
                return Err(FromK8sConversionError::PolicyViolation {
                    prefix: prefix.clone(),
                    community: entry.community.clone(),
                    neighbor: neighbor_addr.to_owned(),
                });
            };
            match community {
                AdvCommunity::Standard(c) => filter.communities.push(c.to_owned()),
                AdvCommunity::Large(c) => filter.large_communities.push(c.to_owned()),
            }
        }
    }
    Ok(())
}

fn build_neighbor(
    router: &RouterConfig,
    neighbor: &Neighbor,
) -> Result<NeighborConfig, FromK8sConversionError> {
    let family = IpFamily::classify(&neighbor.address)?;
    let port = neighbor.port.unwrap_or(BGP_DEFAULT_PORT);
    let mut config = NeighborConfig::new(family, neighbor.asn, &neighbor.address, port);
    trace!("Building filters for neighbor {}", config.name);

    config.outgoing = allowed_out(router, PrefixPolicy::from(&neighbor.to_advertise.allowed))?;
    config.incoming = allowed_in(PrefixPolicy::from(&neighbor.to_receive.allowed))?;
    attach_communities(
        &mut config.outgoing,
        &config.addr,
        &neighbor.to_advertise.prefixes_with_community,
    )?;
    Ok(config)
}

fn build_router(router: &Router) -> Result<RouterConfig, FromK8sConversionError> {
    let mut config = RouterConfig::new(router.asn, &router.id, &router.vrf);
    for prefix in &router.prefixes {
        config.add_prefix(IpFamily::classify(prefix)?, prefix);
    }
    for neighbor in &router.neighbors {
        let neighbor = build_neighbor(&config, neighbor)?;
        config.add_neighbor(neighbor);
    }
    Ok(config)
}

/// Compile a declarative `FRRConfigurationSpec` into the resolved FRR config.
///
/// # Errors
/// Fails with [`FromK8sConversionError::MalformedAddress`] if some address or prefix has no
/// recognizable family, or with [`FromK8sConversionError::PolicyViolation`] if a community is
/// requested for a prefix the neighbor may not advertise. No partial config is produced.
pub fn api_to_frr(spec: &FRRConfigurationSpec) -> Result<Config, FromK8sConversionError> {
    debug!(
        "Converting FRR configuration with {} routers",
        spec.bgp.routers.len()
    );
    let mut config = Config::new();
    for router in &spec.bgp.routers {
        config.add_router(build_router(router)?);
    }
    debug!("Resolved FRR configuration:\n{config}");
    Ok(config)
}

impl TryFrom<&FRRConfigurationSpec> for Config {
    type Error = FromK8sConversionError;

    fn try_from(spec: &FRRConfigurationSpec) -> Result<Self, Self::Error> {
        api_to_frr(spec)
    }
}

impl TryFrom<&FRRConfiguration> for Config {
    type Error = FromK8sConversionError;

    fn try_from(crd: &FRRConfiguration) -> Result<Self, Self::Error> {
        debug!(
            "Converting FRRConfiguration {}",
            crd.metadata.name.as_deref().unwrap_or("(unnamed)")
        );
        api_to_frr(&crd.spec)
    }
}
