//! # Domain Entities
//!
//! The order aggregate and its parameter groups.
//!
//! Orders are immutable once built. Anything that looks like an update
//! produces a new `Order` from serialized data plus the original secrets.

use super::auction::{AuctionDetails, Whitelist};
use super::errors::{Hash, OrderError, OrderResult};
use super::hash_lock::HashLock;
use super::invariants::{
    check_time_lock_schedule, check_whitelist_duplicates, invariant_chain_ids,
    invariant_fill_flags, invariant_nonce_range,
};
use super::time_locks::TimeLocks;
use super::value_objects::{Address, U256};
use crate::algorithms::eip712::{self, TypedData};

/// Identity, parties and amounts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderInfo {
    /// Uniqueness hint (160-bit range).
    pub salt: U256,
    /// Order creator.
    pub maker: Address,
    /// Amount of `maker_asset` offered.
    pub making_amount: U256,
    /// Amount of `taker_asset` requested.
    pub taking_amount: U256,
    /// Asset sold on the source chain.
    pub maker_asset: Address,
    /// Asset bought on the destination chain.
    pub taker_asset: Address,
}

/// Escrow parameters; all of them are structurally mandatory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EscrowParams {
    /// Secret commitment.
    pub hash_lock: HashLock,
    /// Staged escrow schedule.
    pub time_locks: TimeLocks,
    /// Source chain id.
    pub src_chain_id: u64,
    /// Destination chain id.
    pub dst_chain_id: u64,
    /// Resolver collateral on the source chain.
    pub src_safety_deposit: U256,
    /// Resolver collateral on the destination chain.
    pub dst_safety_deposit: U256,
}

/// Auction and access parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Details {
    /// Dutch-auction pricing.
    pub auction: AuctionDetails,
    /// Resolvers allowed to fill.
    pub whitelist: Whitelist,
    /// Earliest resolving time, unix seconds.
    pub resolving_start_time: u64,
}

/// Nonce and fill policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extra {
    /// Replay-distinguishing nonce, at most 2^40 - 1.
    pub nonce: u64,
    /// Order may be filled in parts.
    pub allow_partial_fills: bool,
    /// Order may be filled by several resolvers.
    pub allow_multiple_fills: bool,
}

/// Details group as found in an upstream extension; any field may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailsPatch {
    /// Auction, if present.
    pub auction: Option<AuctionDetails>,
    /// Whitelist, if present.
    pub whitelist: Option<Whitelist>,
    /// Resolving start, if present.
    pub resolving_start_time: Option<u64>,
}

impl DetailsPatch {
    /// Fill each missing field from `fallback`.
    pub fn or(self, fallback: DetailsPatch) -> DetailsPatch {
        DetailsPatch {
            auction: self.auction.or(fallback.auction),
            whitelist: self.whitelist.or(fallback.whitelist),
            resolving_start_time: self.resolving_start_time.or(fallback.resolving_start_time),
        }
    }

    /// True when every field is present.
    pub fn is_complete(&self) -> bool {
        self.auction.is_some() && self.whitelist.is_some() && self.resolving_start_time.is_some()
    }
}

impl From<Details> for DetailsPatch {
    fn from(details: Details) -> Self {
        Self {
            auction: Some(details.auction),
            whitelist: Some(details.whitelist),
            resolving_start_time: Some(details.resolving_start_time),
        }
    }
}

/// Extension object as produced by upstream order builders.
///
/// Auction, whitelist and resolving start may sit at the top level, under
/// `details`, or under `extension`. [`Order::from_extension`] collapses the
/// layouts once; nothing downstream probes them again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderExtension {
    /// Escrow parameters.
    pub escrow: Option<EscrowParams>,
    /// Top-level details fields.
    pub top: DetailsPatch,
    /// Fields nested under `details`.
    pub details: Option<DetailsPatch>,
    /// Fields nested under `extension`.
    pub extension: Option<DetailsPatch>,
}

impl OrderExtension {
    /// Collapse the layouts; per field the top level wins, then `details`,
    /// then `extension`.
    pub fn normalize(self) -> OrderResult<(EscrowParams, DetailsPatch)> {
        let escrow = self.escrow.ok_or_else(|| {
            OrderError::MissingEscrowExtension("escrow parameters are absent".to_string())
        })?;
        let details = self
            .top
            .or(self.details.unwrap_or_default())
            .or(self.extension.unwrap_or_default());
        Ok((escrow, details))
    }
}

/// Cross-chain swap order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    escrow_factory: Address,
    info: OrderInfo,
    escrow: EscrowParams,
    details: DetailsPatch,
    extra: Extra,
}

impl Order {
    /// Build an order from fully specified parameter groups.
    pub fn new(
        escrow_factory: Address,
        info: OrderInfo,
        escrow: EscrowParams,
        details: Details,
        extra: Extra,
    ) -> OrderResult<Self> {
        Self::build(escrow_factory, info, escrow, details.into(), extra)
    }

    /// Build an order from an upstream extension object.
    ///
    /// Missing escrow parameters are fatal. Missing auction, whitelist or
    /// resolving start are kept absent; the serializer substitutes defaults.
    pub fn from_extension(
        escrow_factory: Address,
        info: OrderInfo,
        extension: OrderExtension,
        extra: Extra,
    ) -> OrderResult<Self> {
        let (escrow, details) = extension.normalize()?;
        if !details.is_complete() {
            tracing::debug!("[xswap] Extension lacks some auction/whitelist fields");
        }
        Self::build(escrow_factory, info, escrow, details, extra)
    }

    fn build(
        escrow_factory: Address,
        info: OrderInfo,
        escrow: EscrowParams,
        details: DetailsPatch,
        extra: Extra,
    ) -> OrderResult<Self> {
        invariant_fill_flags(extra.allow_partial_fills, extra.allow_multiple_fills)?;
        invariant_nonce_range(extra.nonce)?;
        invariant_chain_ids(escrow.src_chain_id, escrow.dst_chain_id)?;
        check_time_lock_schedule(&escrow.time_locks);
        if let Some(whitelist) = &details.whitelist {
            check_whitelist_duplicates(whitelist);
        }

        Ok(Self {
            escrow_factory,
            info,
            escrow,
            details,
            extra,
        })
    }

    /// Escrow factory contract.
    pub fn escrow_factory(&self) -> Address {
        self.escrow_factory
    }

    /// Salt.
    pub fn salt(&self) -> U256 {
        self.info.salt
    }

    /// Maker address.
    pub fn maker(&self) -> Address {
        self.info.maker
    }

    /// Offered amount.
    pub fn making_amount(&self) -> U256 {
        self.info.making_amount
    }

    /// Requested amount.
    pub fn taking_amount(&self) -> U256 {
        self.info.taking_amount
    }

    /// Offered asset.
    pub fn maker_asset(&self) -> Address {
        self.info.maker_asset
    }

    /// Requested asset.
    pub fn taker_asset(&self) -> Address {
        self.info.taker_asset
    }

    /// Identity and amount group.
    pub fn info(&self) -> &OrderInfo {
        &self.info
    }

    /// Escrow group.
    pub fn escrow(&self) -> &EscrowParams {
        &self.escrow
    }

    /// Secret commitment.
    pub fn hash_lock(&self) -> &HashLock {
        &self.escrow.hash_lock
    }

    /// Escrow schedule.
    pub fn time_locks(&self) -> &TimeLocks {
        &self.escrow.time_locks
    }

    /// Source chain id.
    pub fn src_chain_id(&self) -> u64 {
        self.escrow.src_chain_id
    }

    /// Destination chain id.
    pub fn dst_chain_id(&self) -> u64 {
        self.escrow.dst_chain_id
    }

    /// Source safety deposit.
    pub fn src_safety_deposit(&self) -> U256 {
        self.escrow.src_safety_deposit
    }

    /// Destination safety deposit.
    pub fn dst_safety_deposit(&self) -> U256 {
        self.escrow.dst_safety_deposit
    }

    /// Auction, if the order carries one.
    pub fn auction(&self) -> Option<&AuctionDetails> {
        self.details.auction.as_ref()
    }

    /// Whitelist, if the order carries one.
    pub fn whitelist(&self) -> Option<&Whitelist> {
        self.details.whitelist.as_ref()
    }

    /// Resolving start, if the order carries one.
    pub fn resolving_start_time(&self) -> Option<u64> {
        self.details.resolving_start_time
    }

    /// Details exactly as normalized.
    pub fn details(&self) -> &DetailsPatch {
        &self.details
    }

    /// Nonce.
    pub fn nonce(&self) -> u64 {
        self.extra.nonce
    }

    /// Partial fills allowed.
    pub fn allow_partial_fills(&self) -> bool {
        self.extra.allow_partial_fills
    }

    /// Multiple fills allowed.
    pub fn allow_multiple_fills(&self) -> bool {
        self.extra.allow_multiple_fills
    }

    /// Nonce and flags group.
    pub fn extra(&self) -> &Extra {
        &self.extra
    }

    /// Whether `resolver` may fill at `time`.
    pub fn can_execute_at(&self, resolver: &Address, time: u64) -> bool {
        let resolving_start = self.details.resolving_start_time.unwrap_or(0);
        time >= resolving_start
            && self
                .details
                .whitelist
                .as_ref()
                .is_some_and(|wl| wl.can_execute_at(resolver, time))
    }

    /// Packed maker traits word for the signing payload.
    pub fn maker_traits(&self) -> U256 {
        eip712::maker_traits(self)
    }

    /// EIP-712 payload for off-chain signing.
    pub fn typed_data(&self, verifying_contract: Address) -> TypedData {
        eip712::typed_data(self, verifying_contract)
    }

    /// EIP-712 digest the maker signs.
    pub fn order_hash(&self, verifying_contract: Address) -> Hash {
        eip712::order_hash(self, verifying_contract)
    }
}
