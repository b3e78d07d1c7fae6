//! # Alternative Order View
//!
//! Read-only projection that keeps the order data and the extension apart,
//! for inspection and logging. It records the public commitment instead of
//! any secret, so it cannot be turned back into an order.

use super::transport::{
    whitelist_to_transport, SerializedAuction, SerializedTimeLocks, SerializedWhitelistItem,
};
use crate::domain::{Address, HashLockKind, Order, ORDER_EXPIRATION_DELAY_SECS};
use serde::{Deserialize, Serialize};

/// Order identity, amounts and derived auction times.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeOrderData {
    /// Salt.
    pub salt: String,
    /// Maker.
    pub maker: Address,
    /// Making amount.
    pub making_amount: String,
    /// Taking amount.
    pub taking_amount: String,
    /// Maker asset.
    pub maker_asset: Address,
    /// Taker asset.
    pub taker_asset: Address,
    /// Receiver; zero means the maker.
    pub receiver: Address,
    /// Auction end plus the expiration delay, when the order has an auction.
    pub deadline: Option<String>,
    /// Auction start, when present.
    pub auction_start_time: Option<String>,
    /// Auction end, when present.
    pub auction_end_time: Option<String>,
    /// Nonce.
    pub nonce: String,
    /// Partial fills allowed.
    pub partial_fill_allowed: bool,
    /// Multiple fills allowed.
    pub multiple_fills_allowed: bool,
}

/// Extension fields exactly as the order holds them; absent stays `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeExtension {
    /// Auction.
    pub auction: Option<SerializedAuction>,
    /// Whitelist.
    pub whitelist: Option<Vec<SerializedWhitelistItem>>,
    /// Resolving start.
    pub resolving_start_time: Option<String>,
}

/// Public side of the hash lock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeHashLock {
    /// Commitment type.
    #[serde(rename = "type")]
    pub kind: HashLockKind,
    /// Packed commitment, `0x` hex.
    pub commitment: String,
}

/// Escrow parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeEscrowParams {
    /// Commitment.
    pub hash_lock: AlternativeHashLock,
    /// Schedule.
    pub time_locks: SerializedTimeLocks,
    /// Source chain id.
    pub src_chain_id: u64,
    /// Destination chain id.
    pub dst_chain_id: u64,
    /// Source safety deposit.
    pub src_safety_deposit: String,
    /// Destination safety deposit.
    pub dst_safety_deposit: String,
}

/// Inspection view of an order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeSerializedOrder {
    /// Order data.
    pub order_data: AlternativeOrderData,
    /// Extension fields.
    pub extension: AlternativeExtension,
    /// Escrow parameters.
    pub escrow_params: AlternativeEscrowParams,
    /// Escrow factory.
    pub escrow_factory: Address,
}

/// Build the inspection view.
pub fn serialize_alternative(order: &Order) -> AlternativeSerializedOrder {
    let auction = order.auction();

    AlternativeSerializedOrder {
        order_data: AlternativeOrderData {
            salt: order.salt().to_string(),
            maker: order.maker(),
            making_amount: order.making_amount().to_string(),
            taking_amount: order.taking_amount().to_string(),
            maker_asset: order.maker_asset(),
            taker_asset: order.taker_asset(),
            receiver: Address::ZERO,
            deadline: auction.map(|a| {
                a.end_time()
                    .saturating_add(ORDER_EXPIRATION_DELAY_SECS)
                    .to_string()
            }),
            auction_start_time: auction.map(|a| a.start_time.to_string()),
            auction_end_time: auction.map(|a| a.end_time().to_string()),
            nonce: order.nonce().to_string(),
            partial_fill_allowed: order.allow_partial_fills(),
            multiple_fills_allowed: order.allow_multiple_fills(),
        },
        extension: AlternativeExtension {
            auction: auction.map(SerializedAuction::from),
            whitelist: order.whitelist().map(whitelist_to_transport),
            resolving_start_time: order.resolving_start_time().map(|t| t.to_string()),
        },
        escrow_params: AlternativeEscrowParams {
            hash_lock: AlternativeHashLock {
                kind: order.hash_lock().kind(),
                commitment: order.hash_lock().to_hex(),
            },
            time_locks: SerializedTimeLocks::from(order.time_locks()),
            src_chain_id: order.src_chain_id(),
            dst_chain_id: order.dst_chain_id(),
            src_safety_deposit: order.src_safety_deposit().to_string(),
            dst_safety_deposit: order.dst_safety_deposit().to_string(),
        },
        escrow_factory: order.escrow_factory(),
    }
}
