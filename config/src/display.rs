// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Display of the resolved FRR configuration, for logging

use std::fmt::Display;

use crate::external::AdvCommunity;
use crate::internal::frr::{AllowedIn, AllowedOut, Config, NeighborConfig, RouterConfig};

macro_rules! NEIGHBOR_FMT {
    ($name:expr, $family:expr, $port:expr) => {
        format_args!("    {:<40} {:<6} port {:<5}", $name, $family, $port)
    };
}

macro_rules! FILTER_FMT {
    ($dir:expr, $prefix:expr, $communities:expr) => {
        format_args!("      {:<4} {:<43} {}", $dir, $prefix, $communities)
    };
}

fn vrf_name(vrf: &str) -> &str {
    if vrf.is_empty() { "default" } else { vrf }
}

impl Display for AllowedOut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for filter in self.prefixes_v4.iter().chain(&self.prefixes_v6) {
            let communities = filter
                .communities
                .iter()
                .map(|c| AdvCommunity::Standard(c.as_str()))
                .chain(filter.large_communities.iter().map(|c| AdvCommunity::Large(c.as_str())))
                .map(|c| ToString::to_string(&c))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", FILTER_FMT!("out", filter.prefix, communities))?;
        }
        Ok(())
    }
}

impl Display for AllowedIn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.all {
            return writeln!(f, "{}", FILTER_FMT!("in", "any", ""));
        }
        for filter in self.prefixes_v4.iter().chain(&self.prefixes_v6) {
            writeln!(f, "{}", FILTER_FMT!("in", filter.prefix, ""))?;
        }
        Ok(())
    }
}

impl Display for NeighborConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", NEIGHBOR_FMT!(self.name, self.ip_family, self.port))?;
        write!(f, "{}", self.outgoing)?;
        write!(f, "{}", self.incoming)
    }
}

impl Display for RouterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "  router asn {} id {} vrf {}",
            self.my_asn,
            self.router_id,
            vrf_name(&self.vrf)
        )?;
        for prefix in self.ipv4_prefixes.iter().chain(&self.ipv6_prefixes) {
            writeln!(f, "    network {prefix}")?;
        }
        for neighbor in &self.neighbors {
            write!(f, "{neighbor}")?;
        }
        Ok(())
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, " ━━━━━━━━━━ FRR configuration ━━━━━━━━━━")?;
        for router in &self.routers {
            write!(f, "{router}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::internal::frr::{BGP_DEFAULT_PORT, Config, NeighborConfig, RouterConfig};
    use crate::ipfamily::IpFamily;

    #[test]
    fn test_display_config() {
        let mut router = RouterConfig::new(65001, "192.0.2.1", "");
        router.add_prefix(IpFamily::IPv4, "192.0.2.0/24");
        let mut neighbor =
            NeighborConfig::new(IpFamily::IPv4, 65002, "192.0.2.2", BGP_DEFAULT_PORT);
        neighbor.outgoing.allow(IpFamily::IPv4, "192.0.2.0/24");
        if let Some(filter) = neighbor.outgoing.filter_mut(IpFamily::IPv4, "192.0.2.0/24") {
            filter.communities.push("10:100".to_string());
            filter.large_communities.push("1:2:3".to_string());
        }
        neighbor.incoming.all = true;
        router.add_neighbor(neighbor);
        let mut config = Config::new();
        config.add_router(router);

        let out = config.to_string();
        assert!(out.contains("router asn 65001 id 192.0.2.1 vrf default"));
        assert!(out.contains("network 192.0.2.0/24"));
        assert!(out.contains("65002@192.0.2.2"));
        assert!(out.contains("10:100 large:1:2:3"));
        assert!(out.contains("any"));
    }
}
