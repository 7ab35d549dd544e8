// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Views over the declarative API model, as consumed by the converters.

pub mod communities;
pub mod policy;

pub use communities::AdvCommunity;
pub use policy::PrefixPolicy;
