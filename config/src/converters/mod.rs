// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Converters from external models to the resolved configuration

pub mod k8s;
