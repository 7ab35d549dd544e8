// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Open Network Fabric Authors

use std::net::{Ipv4Addr, Ipv6Addr};
use std::ops::Bound;

use bolero::{Driver, ValueGenerator};

fn v4cidr_from_bytes(addr_bytes: u32, mask: u8) -> String {
    let and_mask = u32::MAX.unbounded_shl(32 - u32::from(mask));
    let addr = Ipv4Addr::from(addr_bytes & and_mask);
    format!("{addr}/{mask}")
}

fn v6cidr_from_bytes(addr_bytes: u128, mask: u8) -> String {
    let and_mask = u128::MAX.unbounded_shl(128 - u32::from(mask));
    let addr = Ipv6Addr::from(addr_bytes & and_mask);
    format!("{addr}/{mask}")
}

/// Generates up to `max` distinct prefixes of mixed address families, in random order.
///
/// The i-th prefix embeds `i` in its network bits so that no two prefixes are the same,
/// whatever their family.
pub struct MixedCidrGenerator {
    max: u8,
}

impl MixedCidrGenerator {
    #[must_use]
    pub fn new(max: u8) -> Self {
        Self { max }
    }
}

impl ValueGenerator for MixedCidrGenerator {
    type Output = Vec<String>;

    fn generate<D: Driver>(&self, d: &mut D) -> Option<Self::Output> {
        let count = d.gen_u8(Bound::Included(&0), Bound::Included(&self.max))?;
        let mut cidrs = Vec::with_capacity(usize::from(count));
        for i in 0..count {
            let host = d.gen_u8(Bound::Included(&0), Bound::Included(&u8::MAX))?;
            if d.gen_bool(None)? {
                // 10.i.host.0/24
                let bytes = 0x0a00_0000 | (u32::from(i) << 16) | (u32::from(host) << 8);
                cidrs.push(v4cidr_from_bytes(bytes, 24));
            } else {
                // 2001:db8:i:host::/64
                let bytes =
                    (0x2001_0db8_u128 << 96) | (u128::from(i) << 80) | (u128::from(host) << 64);
                cidrs.push(v6cidr_from_bytes(bytes, 64));
            }
        }
        Some(cidrs)
    }
}

/// Generates a unicast address of either family, unique for a given `(major, minor)` pair.
pub struct PeerAddressGenerator {
    major: u8,
    minor: u8,
}

impl PeerAddressGenerator {
    #[must_use]
    pub fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl ValueGenerator for PeerAddressGenerator {
    type Output = String;

    fn generate<D: Driver>(&self, d: &mut D) -> Option<Self::Output> {
        let minor = self.minor.saturating_add(1);
        if d.gen_bool(None)? {
            Some(Ipv4Addr::new(172, 16, self.major, minor).to_string())
        } else {
            let major = u16::from(self.major);
            let addr = Ipv6Addr::new(0xfd00, 0, 0, 0, 0, 0, major, u16::from(minor));
            Some(addr.to_string())
        }
    }
}

/// Pick a random subsequence of `items`, keeping their relative order
pub fn subsequence<T: Clone, D: Driver>(d: &mut D, items: &[T]) -> Option<Vec<T>> {
    let mut picked = Vec::with_capacity(items.len());
    for item in items {
        if d.gen_bool(None)? {
            picked.push(item.clone());
        }
    }
    Some(picked)
}

pub fn choose<T: Clone, D: Driver>(d: &mut D, choices: &[T]) -> Option<T> {
    let index = d.gen_usize(Bound::Included(&0), Bound::Excluded(&choices.len()))?;
    Some(choices[index].clone())
}
