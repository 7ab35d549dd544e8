// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

pub mod bgp;
pub mod crd;
pub mod spec;
pub mod support;

/// A type on which implement `bolero::TypeGenerator` for legal values of `T`
///
/// Generally, `bolero` type generators should generate all possible values of `T` so that it is
/// possible to test validation logic.
/// But often it is desirable to generate only legal values.
/// Here, legal means that the value compiles into a resolved configuration without errors:
/// all addresses and prefixes are well formed, and communities are only requested for prefixes
/// that the neighbor is allowed to advertise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegalValue<T>(T);

impl<T> LegalValue<T> {
    #[must_use]
    pub fn take(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for LegalValue<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}
