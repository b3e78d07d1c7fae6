//! # Transport Representation
//!
//! Wire shape of a persisted or transmitted order. Field names are shared
//! with the persistence and signing collaborators, so they are fixed.
//!
//! Big integers travel as decimal strings; chain ids stay native integers.

use crate::domain::{
    Address, AuctionDetails, AuctionPoint, HashLockKind, OrderError, OrderResult, SecureSecret,
    TimeLocks, Whitelist, WhitelistItem, U256,
};
use serde::{Deserialize, Serialize};

/// Secret material recorded in `hashLock.data`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HashLockData {
    /// Single secret (or the placeholder).
    Single(SecureSecret),
    /// Secret list (or a one-element placeholder list).
    Multiple(Vec<SecureSecret>),
}

/// `hashLock` record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedHashLock {
    /// `single` or `multiple`.
    #[serde(rename = "type")]
    pub kind: HashLockKind,
    /// Raw secret material, never commitments.
    pub data: HashLockData,
}

/// `timeLocks` record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedTimeLocks {
    /// Offset, decimal string.
    pub src_withdrawal: String,
    /// Offset, decimal string.
    pub src_public_withdrawal: String,
    /// Offset, decimal string.
    pub src_cancellation: String,
    /// Offset, decimal string.
    pub src_public_cancellation: String,
    /// Offset, decimal string.
    pub dst_withdrawal: String,
    /// Offset, decimal string.
    pub dst_public_withdrawal: String,
    /// Offset, decimal string.
    pub dst_cancellation: String,
}

impl From<&TimeLocks> for SerializedTimeLocks {
    fn from(t: &TimeLocks) -> Self {
        Self {
            src_withdrawal: t.src_withdrawal.to_string(),
            src_public_withdrawal: t.src_public_withdrawal.to_string(),
            src_cancellation: t.src_cancellation.to_string(),
            src_public_cancellation: t.src_public_cancellation.to_string(),
            dst_withdrawal: t.dst_withdrawal.to_string(),
            dst_public_withdrawal: t.dst_public_withdrawal.to_string(),
            dst_cancellation: t.dst_cancellation.to_string(),
        }
    }
}

impl SerializedTimeLocks {
    /// Parse back into a schedule.
    pub fn to_time_locks(&self) -> OrderResult<TimeLocks> {
        Ok(TimeLocks::new(
            parse_u64("timeLocks.srcWithdrawal", &self.src_withdrawal)?,
            parse_u64("timeLocks.srcPublicWithdrawal", &self.src_public_withdrawal)?,
            parse_u64("timeLocks.srcCancellation", &self.src_cancellation)?,
            parse_u64("timeLocks.srcPublicCancellation", &self.src_public_cancellation)?,
            parse_u64("timeLocks.dstWithdrawal", &self.dst_withdrawal)?,
            parse_u64("timeLocks.dstPublicWithdrawal", &self.dst_public_withdrawal)?,
            parse_u64("timeLocks.dstCancellation", &self.dst_cancellation)?,
        ))
    }
}

/// `auction` record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedAuction {
    /// Initial rate bump.
    pub initial_rate_bump: u32,
    /// Decay checkpoints.
    pub points: Vec<AuctionPoint>,
    /// Duration, decimal string.
    pub duration: String,
    /// Start time, decimal string.
    pub start_time: String,
}

impl From<&AuctionDetails> for SerializedAuction {
    fn from(a: &AuctionDetails) -> Self {
        Self {
            initial_rate_bump: a.initial_rate_bump,
            points: a.points.clone(),
            duration: a.duration.to_string(),
            start_time: a.start_time.to_string(),
        }
    }
}

impl SerializedAuction {
    /// Record written when an order carries no auction: zero-length, no bump.
    pub fn fallback() -> Self {
        Self::from(&AuctionDetails::default())
    }

    /// Parse back into auction details.
    pub fn to_auction(&self) -> OrderResult<AuctionDetails> {
        Ok(AuctionDetails::new(
            self.initial_rate_bump,
            self.points.clone(),
            parse_u64("auction.duration", &self.duration)?,
            parse_u64("auction.startTime", &self.start_time)?,
        ))
    }
}

/// One `whitelist` entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedWhitelistItem {
    /// Resolver.
    pub address: Address,
    /// Earliest fill time, decimal string.
    pub allow_from: String,
}

/// Convert a whitelist, keeping order.
pub fn whitelist_to_transport(whitelist: &Whitelist) -> Vec<SerializedWhitelistItem> {
    whitelist
        .items()
        .iter()
        .map(|item| SerializedWhitelistItem {
            address: item.address,
            allow_from: item.allow_from.to_string(),
        })
        .collect()
}

/// Parse a whitelist, keeping order.
pub fn whitelist_from_transport(items: &[SerializedWhitelistItem]) -> OrderResult<Whitelist> {
    items
        .iter()
        .map(|item| {
            Ok(WhitelistItem {
                address: item.address,
                allow_from: parse_u64("whitelist.allowFrom", &item.allow_from)?,
            })
        })
        .collect::<OrderResult<Vec<_>>>()
        .map(Whitelist::new)
}

/// Out-of-band copy of the secrets, used first on reconstruction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalParams {
    /// Single-fill secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<SecureSecret>,
    /// Multi-fill secrets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Vec<SecureSecret>>,
    /// Multi-fill flag at serialization time.
    pub allow_multiple_fills: bool,
}

/// Complete transport record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedOrder {
    /// Salt, decimal string.
    pub salt: String,
    /// Maker.
    pub maker: Address,
    /// Making amount, decimal string.
    pub making_amount: String,
    /// Taking amount, decimal string.
    pub taking_amount: String,
    /// Maker asset.
    pub maker_asset: Address,
    /// Taker asset.
    pub taker_asset: Address,

    /// Commitment type and raw secret material.
    pub hash_lock: SerializedHashLock,
    /// Escrow schedule.
    pub time_locks: SerializedTimeLocks,
    /// Source chain id.
    pub src_chain_id: u64,
    /// Destination chain id.
    pub dst_chain_id: u64,
    /// Source safety deposit, decimal string.
    pub src_safety_deposit: String,
    /// Destination safety deposit, decimal string.
    pub dst_safety_deposit: String,

    /// Auction.
    pub auction: SerializedAuction,
    /// Whitelist in order.
    pub whitelist: Vec<SerializedWhitelistItem>,
    /// Resolving start, decimal string.
    pub resolving_start_time: String,

    /// Nonce, decimal string.
    pub nonce: String,
    /// Partial fills allowed.
    pub allow_partial_fills: bool,
    /// Multiple fills allowed.
    pub allow_multiple_fills: bool,

    /// Escrow factory.
    pub escrow_factory: Address,

    /// Original secrets.
    pub original_params: OriginalParams,
}

impl SerializedOrder {
    /// Encode as JSON text.
    pub fn to_json(&self) -> OrderResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON text.
    pub fn from_json(json: &str) -> OrderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Parse a decimal U256 field.
pub fn parse_u256(field: &str, value: &str) -> OrderResult<U256> {
    // from_dec_str reads "" as zero
    if value.is_empty() {
        return Err(OrderError::MalformedTransportData(format!(
            "{field}={value:?}: empty"
        )));
    }
    U256::from_dec_str(value)
        .map_err(|e| OrderError::MalformedTransportData(format!("{field}={value:?}: {e:?}")))
}

/// Parse a decimal u64 field.
pub fn parse_u64(field: &str, value: &str) -> OrderResult<u64> {
    value
        .parse::<u64>()
        .map_err(|e| OrderError::MalformedTransportData(format!("{field}={value:?}: {e}")))
}
