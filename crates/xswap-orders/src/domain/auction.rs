//! # Auction & Whitelist
//!
//! Dutch-auction pricing parameters and resolver access gating.

use super::value_objects::Address;
use serde::{Deserialize, Serialize};

/// One checkpoint of the decay curve.
///
/// `delay` is measured from the previous checkpoint (or the auction start).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuctionPoint {
    /// Rate bump reached at this checkpoint.
    pub coefficient: u32,
    /// Seconds after the previous checkpoint.
    pub delay: u32,
}

/// Dutch-auction parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AuctionDetails {
    /// Rate bump at auction start.
    pub initial_rate_bump: u32,
    /// Decay checkpoints, in order.
    pub points: Vec<AuctionPoint>,
    /// Auction length in seconds.
    pub duration: u64,
    /// Auction start, unix seconds.
    pub start_time: u64,
}

impl AuctionDetails {
    /// Plain value constructor; no validation.
    pub fn new(
        initial_rate_bump: u32,
        points: Vec<AuctionPoint>,
        duration: u64,
        start_time: u64,
    ) -> Self {
        Self {
            initial_rate_bump,
            points,
            duration,
            start_time,
        }
    }

    /// When the bump reaches zero.
    pub fn end_time(&self) -> u64 {
        self.start_time.saturating_add(self.duration)
    }

    /// Rate bump in effect at `time`.
    ///
    /// Linear between checkpoints; `initial_rate_bump` until the start and
    /// zero from the end on.
    pub fn rate_bump_at(&self, time: u64) -> u64 {
        let end = self.end_time();
        if time <= self.start_time {
            return u64::from(self.initial_rate_bump);
        }
        if time >= end {
            return 0;
        }

        let t = u128::from(time);
        let mut prev_time = u128::from(self.start_time);
        let mut prev_coef = u128::from(self.initial_rate_bump);

        for point in &self.points {
            let point_time = prev_time + u128::from(point.delay);
            let coef = u128::from(point.coefficient);
            if t < point_time {
                let bump = ((t - prev_time) * coef + (point_time - t) * prev_coef)
                    / (point_time - prev_time);
                return bump as u64;
            }
            prev_time = point_time;
            prev_coef = coef;
        }

        let end = u128::from(end);
        ((end - t) * prev_coef / (end - prev_time)) as u64
    }
}

/// Resolver allowed to fill from `allow_from` on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitelistItem {
    /// Resolver address.
    pub address: Address,
    /// Earliest fill time, unix seconds.
    pub allow_from: u64,
}

/// Ordered resolver whitelist.
///
/// Insertion order is kept as given; with duplicate addresses the first
/// entry decides.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Whitelist(Vec<WhitelistItem>);

impl Whitelist {
    /// Wrap entries in order.
    pub fn new(items: Vec<WhitelistItem>) -> Self {
        Self(items)
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[WhitelistItem] {
        &self.0
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nobody is whitelisted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `allow_from` of the first entry for `resolver`.
    pub fn allow_from(&self, resolver: &Address) -> Option<u64> {
        self.0
            .iter()
            .find(|item| item.address == *resolver)
            .map(|item| item.allow_from)
    }

    /// Whether `resolver` is listed at all.
    pub fn is_whitelisted(&self, resolver: &Address) -> bool {
        self.allow_from(resolver).is_some()
    }

    /// Whether `resolver` may fill at `time`.
    pub fn can_execute_at(&self, resolver: &Address, time: u64) -> bool {
        self.allow_from(resolver)
            .map(|from| time >= from)
            .unwrap_or(false)
    }

    /// Addresses that appear more than once, in first-seen order.
    pub fn duplicates(&self) -> Vec<Address> {
        let mut seen = std::collections::HashSet::new();
        let mut dups = Vec::new();
        for item in &self.0 {
            if !seen.insert(item.address) && !dups.contains(&item.address) {
                dups.push(item.address);
            }
        }
        dups
    }
}

impl From<Vec<WhitelistItem>> for Whitelist {
    fn from(items: Vec<WhitelistItem>) -> Self {
        Self(items)
    }
}
