// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Compiler of `FRRConfiguration` objects into the resolved configuration consumed by the
//! FRR config renderer. The external model is the declarative k8s API; the internal model
//! is fully resolved: prefixes split per address family, per-neighbor filters enumerated
//! and communities attached to the prefixes they tag.

#![deny(
    unsafe_code,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::missing_errors_doc)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

pub mod converters;
pub mod display;
pub mod external;
pub mod internal;
pub mod ipfamily;

pub use converters::k8s::{FromK8sConversionError, api_to_frr}; // re-export
pub use internal::frr::Config; // re-export
pub use ipfamily::{IpFamily, IpFamilyError}; // re-export
