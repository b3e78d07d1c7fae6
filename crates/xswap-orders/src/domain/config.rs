//! # Order Defaults
//!
//! Policy values applied by the order construction workflow and by the
//! serializer's fallback path.

use super::errors::OrderResult;
use super::time_locks::TimeLocks;
use super::value_objects::U256;
use serde::{Deserialize, Serialize};

/// 0.001 ETH in wei.
pub const DEFAULT_SAFETY_DEPOSIT_WEI: u64 = 1_000_000_000_000_000;

/// Placeholder written to `hashLock.data` when no secret was supplied.
pub const SECRET_PLACEHOLDER: &str = "placeholder";

/// Seconds after auction end before an unfilled order expires.
pub const ORDER_EXPIRATION_DELAY_SECS: u64 = 12;

/// Defaults for newly built orders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderDefaults {
    /// Staged escrow schedule.
    pub time_locks: TimeLocks,
    /// Source-chain safety deposit, wei.
    pub src_safety_deposit: U256,
    /// Destination-chain safety deposit, wei.
    pub dst_safety_deposit: U256,
    /// Auction length in seconds.
    pub auction_duration: u64,
    /// Rate bump at auction start.
    pub initial_rate_bump: u32,
    /// Resolving start time written to new orders.
    pub resolving_start_time: u64,
    /// `allowFrom` of the designated resolver's whitelist entry.
    pub resolver_allow_from: u64,
}

impl Default for OrderDefaults {
    fn default() -> Self {
        Self {
            time_locks: TimeLocks::new(10, 120, 121, 122, 10, 100, 101),
            src_safety_deposit: U256::from(DEFAULT_SAFETY_DEPOSIT_WEI),
            dst_safety_deposit: U256::from(DEFAULT_SAFETY_DEPOSIT_WEI),
            auction_duration: 120,
            initial_rate_bump: 0,
            resolving_start_time: 0,
            resolver_allow_from: 0,
        }
    }
}

impl OrderDefaults {
    /// Load from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> OrderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
