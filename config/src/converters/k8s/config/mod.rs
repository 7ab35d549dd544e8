// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Converter for `FRRConfiguration` objects to the resolved FRR config

pub mod frr;
