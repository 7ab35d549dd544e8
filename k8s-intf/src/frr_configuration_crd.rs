// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The declarative `FRRConfiguration` API. Every collection defaults to empty and every
//! policy defaults to [`AllowMode::AllowRestricted`] when absent from the object.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// API group of the `FRRConfiguration` resource
pub const FRRK8S_API_GROUP: &str = "frrk8s.metallb.io";

/// API version of the `FRRConfiguration` resource
pub const FRRK8S_API_VERSION: &str = "v1beta1";

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[kube(
    group = "frrk8s.metallb.io",
    version = "v1beta1",
    kind = "FRRConfiguration",
    plural = "frrconfigurations",
    namespaced,
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct FRRConfigurationSpec {
    #[serde(default)]
    pub bgp: BgpConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BgpConfig {
    #[serde(default)]
    pub routers: Vec<Router>,
}

/// A BGP router, possibly living in a non-default VRF
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Router {
    pub asn: u32,
    #[serde(default)]
    pub id: String,
    /// Name of the VRF. Empty for the default VRF.
    #[serde(default)]
    pub vrf: String,
    #[serde(default)]
    pub neighbors: Vec<Neighbor>,
    /// Prefixes originated by this router, of either address family
    #[serde(default)]
    pub prefixes: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Neighbor {
    pub asn: u32,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default)]
    pub to_advertise: Advertise,
    #[serde(default)]
    pub to_receive: Receive,
}

/// Outbound policy of a neighbor
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Advertise {
    #[serde(default)]
    pub allowed: AllowedPrefixes,
    #[serde(default, rename = "withCommunity")]
    pub prefixes_with_community: Vec<CommunityPrefixes>,
}

/// Inbound policy of a neighbor
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Receive {
    #[serde(default)]
    pub allowed: AllowedPrefixes,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllowedPrefixes {
    /// Used only when `mode` is [`AllowMode::AllowRestricted`]
    #[serde(default)]
    pub prefixes: Vec<String>,
    #[serde(default)]
    pub mode: AllowMode,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, JsonSchema)]
pub enum AllowMode {
    #[serde(rename = "all")]
    AllowAll,
    #[default]
    #[serde(rename = "filtered")]
    AllowRestricted,
}

/// A set of prefixes to be tagged with a community when advertised.
/// Communities of the form `large:A:B:C` denote large communities.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPrefixes {
    #[serde(default)]
    pub prefixes: Vec<String>,
    pub community: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r"
apiVersion: frrk8s.metallb.io/v1beta1
kind: FRRConfiguration
metadata:
  name: test
  namespace: frr-k8s-system
spec:
  bgp:
    routers:
    - asn: 64512
      id: 192.0.2.1
      prefixes:
      - 192.0.2.0/24
      neighbors:
      - asn: 64513
        address: 192.0.2.2
        toAdvertise:
          allowed:
            mode: all
          withCommunity:
          - prefixes: [192.0.2.0/24]
            community: large:1:2:3
        toReceive:
          allowed:
            prefixes: [10.0.0.0/8]
";

    #[test]
    fn test_deserialize_sample() {
        let crd: FRRConfiguration = serde_yaml_ng::from_str(SAMPLE).unwrap();
        assert_eq!(crd.metadata.name.as_deref(), Some("test"));

        let router = &crd.spec.bgp.routers[0];
        assert_eq!(router.asn, 64512);
        assert_eq!(router.vrf, "");
        assert_eq!(router.prefixes, vec!["192.0.2.0/24".to_string()]);

        let neighbor = &router.neighbors[0];
        assert_eq!(neighbor.port, None);
        assert_eq!(neighbor.to_advertise.allowed.mode, AllowMode::AllowAll);
        assert_eq!(
            neighbor.to_advertise.prefixes_with_community,
            vec![CommunityPrefixes {
                prefixes: vec!["192.0.2.0/24".to_string()],
                community: "large:1:2:3".to_string(),
            }]
        );
        assert_eq!(neighbor.to_receive.allowed.mode, AllowMode::AllowRestricted);
        assert_eq!(
            neighbor.to_receive.allowed.prefixes,
            vec!["10.0.0.0/8".to_string()]
        );
    }

    #[test]
    fn test_missing_policies_default_to_restricted() {
        let neighbor: Neighbor =
            serde_json::from_str(r#"{"asn": 65000, "address": "2001:db8::1", "port": 180}"#)
                .unwrap();
        assert_eq!(neighbor.port, Some(180));
        assert_eq!(neighbor.to_advertise, Advertise::default());
        assert_eq!(neighbor.to_receive, Receive::default());
        assert_eq!(neighbor.to_receive.allowed.mode, AllowMode::AllowRestricted);
    }

    #[test]
    fn test_empty_spec() {
        let spec: FRRConfigurationSpec = serde_json::from_str("{}").unwrap();
        assert!(spec.bgp.routers.is_empty());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let res = serde_json::from_str::<AllowedPrefixes>(r#"{"mode": "some"}"#);
        assert!(res.is_err());
    }
}
