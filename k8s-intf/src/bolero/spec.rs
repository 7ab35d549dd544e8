// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use std::ops::Bound;

use bolero::{Driver, TypeGenerator, ValueGenerator};

use crate::bolero::LegalValue;
use crate::bolero::bgp::LegalRouterGenerator;
use crate::frr_configuration_crd::{BgpConfig, FRRConfigurationSpec};

/// Generate a random legal `FRRConfigurationSpec`
///
/// This does not cover all legal specs: prefixes and neighbor addresses follow fixed
/// patterns, and communities use a fixed ASN.
impl TypeGenerator for LegalValue<FRRConfigurationSpec> {
    fn generate<D: Driver>(d: &mut D) -> Option<Self> {
        let num_routers = d.gen_u8(Bound::Included(&0), Bound::Included(&3))?;
        let mut routers = Vec::with_capacity(usize::from(num_routers));
        for i in 0..num_routers {
            routers.push(LegalRouterGenerator::new(i).generate(d)?);
        }
        Some(LegalValue(FRRConfigurationSpec {
            bgp: BgpConfig { routers },
        }))
    }
}
