// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use std::collections::BTreeMap;
use std::ops::Bound;

use bolero::{Driver, TypeGenerator};
use kube::core::ObjectMeta;

use crate::bolero::LegalValue;
use crate::bolero::support::choose;
use crate::frr_configuration_crd::{FRRConfiguration, FRRConfigurationSpec};

/// Namespaces where frr-k8s configurations are usually found
const NAMESPACES: [&str; 3] = ["frr-k8s-system", "metallb-system", "default"];

/// A DNS-1123 label: lowercase alphanumerics, starting with a letter
fn dns_label<D: Driver>(d: &mut D) -> Option<String> {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let len = d.gen_usize(Bound::Included(&1), Bound::Included(&12))?;
    let mut label = String::with_capacity(len + 4);
    label.push_str("frr-");
    for _ in 0..len {
        let c = choose(d, ALPHABET)?;
        label.push(char::from(c));
    }
    Some(label)
}

/// Generate a random legal `FRRConfiguration` object, optionally tied to a node through the
/// label frr-k8s uses to select nodes
///
/// The spec is produced by the `LegalValue<FRRConfigurationSpec>` generator
impl TypeGenerator for LegalValue<FRRConfiguration> {
    fn generate<D: Driver>(d: &mut D) -> Option<Self> {
        let name = dns_label(d)?;
        let namespace = choose(d, &NAMESPACES)?;
        let labels = if d.gen_bool(None)? {
            let node = dns_label(d)?;
            Some(BTreeMap::from([("kubernetes.io/hostname".to_string(), node)]))
        } else {
            None
        };
        let spec = d.produce::<LegalValue<FRRConfigurationSpec>>()?.take();
        let mut crd = FRRConfiguration::new(&name, spec);
        crd.metadata = ObjectMeta {
            name: Some(name),
            namespace: Some(namespace.to_string()),
            labels,
            ..Default::default()
        };
        Some(LegalValue(crd))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_objects_are_named() {
        bolero::check!()
            .with_type::<LegalValue<FRRConfiguration>>()
            .for_each(|crd| {
                let crd = crd.as_ref();
                let name = crd.metadata.name.as_deref().unwrap();
                assert!(name.starts_with("frr-"));
                assert!(name.len() <= 63);
                assert!(
                    name.bytes()
                        .all(|c| c == b'-' || c.is_ascii_lowercase() || c.is_ascii_digit())
                );
                let namespace = crd.metadata.namespace.as_deref().unwrap();
                assert!(NAMESPACES.contains(&namespace));
            });
    }
}
