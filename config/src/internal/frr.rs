// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Resolved FRR configuration model.
//!
//! Every prefix and filter list is present, if empty, and keeps the order of the declarative
//! objects it was built from. Outgoing filters only carry communities for prefixes the
//! neighbor may advertise, so the renderer need not re-validate cross references.

use serde::Serialize;

use crate::ipfamily::IpFamily;

/// Default BGP port, used for neighbors that do not specify one
pub const BGP_DEFAULT_PORT: u16 = 179;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub routers: Vec<RouterConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterConfig {
    pub my_asn: u32,
    pub router_id: String,
    pub vrf: String,
    pub neighbors: Vec<NeighborConfig>,
    pub ipv4_prefixes: Vec<String>,
    pub ipv6_prefixes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborConfig {
    pub ip_family: IpFamily,
    pub name: String,
    pub asn: u32,
    pub addr: String,
    pub port: u16,
    pub outgoing: AllowedOut,
    pub incoming: AllowedIn,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowedOut {
    pub prefixes_v4: Vec<OutgoingFilter>,
    pub prefixes_v6: Vec<OutgoingFilter>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowedIn {
    /// Accept every prefix. The per-family lists are then empty.
    pub all: bool,
    pub prefixes_v4: Vec<IncomingFilter>,
    pub prefixes_v6: Vec<IncomingFilter>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingFilter {
    pub ip_family: IpFamily,
    pub prefix: String,
    pub communities: Vec<String>,
    pub large_communities: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingFilter {
    pub ip_family: IpFamily,
    pub prefix: String,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_router(&mut self, router: RouterConfig) {
        self.routers.push(router);
    }
}

impl RouterConfig {
    #[must_use]
    pub fn new(my_asn: u32, router_id: &str, vrf: &str) -> Self {
        Self {
            my_asn,
            router_id: router_id.to_owned(),
            vrf: vrf.to_owned(),
            ..Default::default()
        }
    }
    /// Add a locally originated prefix to the list of its family
    pub fn add_prefix(&mut self, family: IpFamily, prefix: &str) {
        match family {
            IpFamily::IPv4 => self.ipv4_prefixes.push(prefix.to_owned()),
            IpFamily::IPv6 => self.ipv6_prefixes.push(prefix.to_owned()),
        }
    }
    #[must_use]
    pub fn prefixes(&self, family: IpFamily) -> &[String] {
        match family {
            IpFamily::IPv4 => &self.ipv4_prefixes,
            IpFamily::IPv6 => &self.ipv6_prefixes,
        }
    }
    pub fn add_neighbor(&mut self, neighbor: NeighborConfig) {
        self.neighbors.push(neighbor);
    }
    /// Look up a neighbor by its address
    #[must_use]
    pub fn neighbor(&self, addr: &str) -> Option<&NeighborConfig> {
        self.neighbors.iter().find(|n| n.addr == addr)
    }
}

impl NeighborConfig {
    /// Build a neighbor that may neither advertise nor receive anything
    #[must_use]
    pub fn new(ip_family: IpFamily, asn: u32, addr: &str, port: u16) -> Self {
        Self {
            ip_family,
            name: format!("{asn}@{addr}"),
            asn,
            addr: addr.to_owned(),
            port,
            outgoing: AllowedOut::default(),
            incoming: AllowedIn::default(),
        }
    }
}

impl AllowedOut {
    /// Allow advertising `prefix`, with no communities
    pub fn allow(&mut self, family: IpFamily, prefix: &str) {
        self.filters_mut(family)
            .push(OutgoingFilter::new(family, prefix));
    }
    #[must_use]
    pub fn filters(&self, family: IpFamily) -> &[OutgoingFilter] {
        match family {
            IpFamily::IPv4 => &self.prefixes_v4,
            IpFamily::IPv6 => &self.prefixes_v6,
        }
    }
    pub fn filters_mut(&mut self, family: IpFamily) -> &mut Vec<OutgoingFilter> {
        match family {
            IpFamily::IPv4 => &mut self.prefixes_v4,
            IpFamily::IPv6 => &mut self.prefixes_v6,
        }
    }
    /// Look up the filter for exactly `prefix`, as spelled when allowed
    pub fn filter_mut(&mut self, family: IpFamily, prefix: &str) -> Option<&mut OutgoingFilter> {
        self.filters_mut(family)
            .iter_mut()
            .find(|f| f.prefix == prefix)
    }
}

impl AllowedIn {
    /// Accept `prefix` from the neighbor
    pub fn allow(&mut self, family: IpFamily, prefix: &str) {
        let filter = IncomingFilter {
            ip_family: family,
            prefix: prefix.to_owned(),
        };
        match family {
            IpFamily::IPv4 => self.prefixes_v4.push(filter),
            IpFamily::IPv6 => self.prefixes_v6.push(filter),
        }
    }
    #[must_use]
    pub fn filters(&self, family: IpFamily) -> &[IncomingFilter] {
        match family {
            IpFamily::IPv4 => &self.prefixes_v4,
            IpFamily::IPv6 => &self.prefixes_v6,
        }
    }
}

impl OutgoingFilter {
    #[must_use]
    pub fn new(ip_family: IpFamily, prefix: &str) -> Self {
        Self {
            ip_family,
            prefix: prefix.to_owned(),
            communities: vec![],
            large_communities: vec![],
        }
    }
}
