// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Converter for frr-k8s k8s objects to the resolved FRR config

#![deny(clippy::all, clippy::pedantic)]

pub mod config;

use thiserror::Error;

use crate::ipfamily::IpFamilyError;

pub use config::frr::api_to_frr;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FromK8sConversionError {
    #[error("prefix {prefix} with community {community} not in allowed list for neighbor {neighbor}")]
    PolicyViolation {
        prefix: String,
        community: String,
        neighbor: String,
    },
    #[error("Malformed address: {0}")]
    MalformedAddress(#[from] IpFamilyError),
}
