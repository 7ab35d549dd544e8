// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Types of the `FRRConfiguration` custom resource and helpers to load it from files.

#![deny(clippy::all, clippy::pedantic)]

#[cfg(any(test, feature = "bolero"))]
pub mod bolero;
pub mod frr_configuration_crd;
pub mod utils;
