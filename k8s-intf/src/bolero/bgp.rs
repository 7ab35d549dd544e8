// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use std::net::Ipv4Addr;
use std::ops::Bound;

use bolero::{Driver, ValueGenerator};

use crate::bolero::support::{MixedCidrGenerator, PeerAddressGenerator, choose, subsequence};
use crate::frr_configuration_crd::{
    Advertise, AllowMode, AllowedPrefixes, CommunityPrefixes, Neighbor, Receive, Router,
};

fn community<D: Driver>(d: &mut D) -> Option<String> {
    let value = d.gen_u16(Bound::Included(&0), Bound::Included(&u16::MAX))?;
    if d.gen_bool(None)? {
        Some(format!("large:65000:{value}:1"))
    } else {
        Some(format!("65000:{value}"))
    }
}

fn allowed_prefixes<D: Driver>(d: &mut D, candidates: &[String]) -> Option<AllowedPrefixes> {
    let mode = choose(d, &[AllowMode::AllowAll, AllowMode::AllowRestricted])?;
    let prefixes = match mode {
        AllowMode::AllowAll => vec![],
        AllowMode::AllowRestricted => subsequence(d, candidates)?,
    };
    Some(AllowedPrefixes { prefixes, mode })
}

/// Generates a legal neighbor of a router originating `router_prefixes`.
///
/// Communities are only requested for prefixes that the neighbor is allowed to advertise.
pub struct LegalNeighborGenerator<'a> {
    router_prefixes: &'a [String],
    router_index: u8,
    index: u8,
}

impl<'a> LegalNeighborGenerator<'a> {
    #[must_use]
    pub fn new(router_prefixes: &'a [String], router_index: u8, index: u8) -> Self {
        Self {
            router_prefixes,
            router_index,
            index,
        }
    }
}

impl ValueGenerator for LegalNeighborGenerator<'_> {
    type Output = Neighbor;

    fn generate<D: Driver>(&self, d: &mut D) -> Option<Self::Output> {
        let asn = d.gen_u32(Bound::Included(&1), Bound::Included(&u32::MAX))?;
        let address = PeerAddressGenerator::new(self.router_index, self.index).generate(d)?;
        let port = choose(d, &[None, Some(179), Some(1179)])?;

        let allowed = allowed_prefixes(d, self.router_prefixes)?;
        let advertised = match allowed.mode {
            AllowMode::AllowAll => self.router_prefixes,
            AllowMode::AllowRestricted => allowed.prefixes.as_slice(),
        };
        let num_communities = d.gen_usize(Bound::Included(&0), Bound::Included(&4))?;
        let mut prefixes_with_community = Vec::with_capacity(num_communities);
        for _ in 0..num_communities {
            prefixes_with_community.push(CommunityPrefixes {
                prefixes: subsequence(d, advertised)?,
                community: community(d)?,
            });
        }

        // inbound policy may refer to prefixes not originated locally
        let mut receivable = self.router_prefixes.to_vec();
        receivable.extend(MixedCidrGenerator::new(4).generate(d)?);

        Some(Neighbor {
            asn,
            address,
            port,
            to_advertise: Advertise {
                allowed,
                prefixes_with_community,
            },
            to_receive: Receive {
                allowed: allowed_prefixes(d, &receivable)?,
            },
        })
    }
}

/// Generates a legal router. `index` keeps neighbor addresses distinct across routers.
pub struct LegalRouterGenerator {
    index: u8,
}

impl LegalRouterGenerator {
    #[must_use]
    pub fn new(index: u8) -> Self {
        Self { index }
    }
}

impl ValueGenerator for LegalRouterGenerator {
    type Output = Router;

    fn generate<D: Driver>(&self, d: &mut D) -> Option<Self::Output> {
        let asn = d.gen_u32(Bound::Included(&1), Bound::Included(&u32::MAX))?;
        let id = Ipv4Addr::from(d.gen_u32(Bound::Included(&1), Bound::Included(&u32::MAX))?);
        let vrf = if d.gen_bool(None)? {
            String::new()
        } else {
            format!("vrf{}", self.index)
        };
        let prefixes = MixedCidrGenerator::new(8).generate(d)?;

        let num_neighbors = d.gen_u8(Bound::Included(&0), Bound::Included(&4))?;
        let mut neighbors = Vec::with_capacity(usize::from(num_neighbors));
        for i in 0..num_neighbors {
            neighbors.push(LegalNeighborGenerator::new(&prefixes, self.index, i).generate(d)?);
        }

        Some(Router {
            asn,
            id: id.to_string(),
            vrf,
            neighbors,
            prefixes,
        })
    }
}
