// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Resolved configuration model, as consumed by the FRR config renderer.

pub mod frr;
