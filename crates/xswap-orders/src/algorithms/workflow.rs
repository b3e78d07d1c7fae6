//! # Order Construction Workflow
//!
//! Builds a fresh order from user-facing parameters, filling in the
//! configured defaults, a random salt and a random nonce.
//!
//! The fill policy follows the secret material: several secrets make a
//! multi-fill order (partial and multiple fills allowed), one secret makes a
//! single-fill order (neither allowed).

use crate::domain::{
    Address, AuctionDetails, Details, EscrowParams, Extra, HashLock, Order, OrderDefaults,
    OrderInfo, OrderResult, SecretMaterial, Whitelist, WhitelistItem, U256, UINT_40_MAX,
};
use rand::{Rng, RngCore};
use tracing::debug;

/// Inputs for a new order.
#[derive(Clone, Debug)]
pub struct CreateOrderParams {
    /// Escrow factory on the source chain.
    pub escrow_factory: Address,
    /// Order creator.
    pub maker: Address,
    /// Amount offered.
    pub making_amount: U256,
    /// Amount requested.
    pub taking_amount: U256,
    /// Asset offered.
    pub maker_asset: Address,
    /// Asset requested.
    pub taker_asset: Address,
    /// Secret(s) the commitment is built from.
    pub secrets: SecretMaterial,
    /// Source chain id.
    pub src_chain_id: u64,
    /// Destination chain id.
    pub dst_chain_id: u64,
    /// Current source-chain time; the auction starts here.
    pub src_timestamp: u64,
    /// Resolver placed on the whitelist.
    pub resolver: Address,
}

/// A new order together with the material needed to serialize it.
#[derive(Clone, Debug)]
pub struct CreatedOrder {
    /// The order.
    pub order: Order,
    /// Secret material the commitment was built from.
    pub secrets: SecretMaterial,
}

/// Random salt in the 160-bit range.
fn random_salt<R: RngCore + ?Sized>(rng: &mut R) -> U256 {
    let mut bytes = [0u8; 20];
    rng.fill_bytes(&mut bytes);
    U256::from_big_endian(&bytes)
}

/// Build a new order.
pub fn create_order<R: RngCore>(
    params: CreateOrderParams,
    defaults: &OrderDefaults,
    rng: &mut R,
) -> OrderResult<CreatedOrder> {
    let hash_lock = HashLock::from_material(&params.secrets)?;
    let multi_fill = matches!(params.secrets, SecretMaterial::Multiple(_));

    let info = OrderInfo {
        salt: random_salt(rng),
        maker: params.maker,
        making_amount: params.making_amount,
        taking_amount: params.taking_amount,
        maker_asset: params.maker_asset,
        taker_asset: params.taker_asset,
    };

    let escrow = EscrowParams {
        hash_lock,
        time_locks: defaults.time_locks,
        src_chain_id: params.src_chain_id,
        dst_chain_id: params.dst_chain_id,
        src_safety_deposit: defaults.src_safety_deposit,
        dst_safety_deposit: defaults.dst_safety_deposit,
    };

    let details = Details {
        auction: AuctionDetails::new(
            defaults.initial_rate_bump,
            Vec::new(),
            defaults.auction_duration,
            params.src_timestamp,
        ),
        whitelist: Whitelist::new(vec![WhitelistItem {
            address: params.resolver,
            allow_from: defaults.resolver_allow_from,
        }]),
        resolving_start_time: defaults.resolving_start_time,
    };

    let extra = Extra {
        nonce: rng.gen_range(0..=UINT_40_MAX),
        allow_partial_fills: multi_fill,
        allow_multiple_fills: multi_fill,
    };

    let order = Order::new(params.escrow_factory, info, escrow, details, extra)?;

    debug!(
        "[xswap] Created {} order {} -> {} (nonce {})",
        order.hash_lock().kind(),
        order.src_chain_id(),
        order.dst_chain_id(),
        order.nonce()
    );

    Ok(CreatedOrder {
        order,
        secrets: params.secrets,
    })
}

/// [`create_order`] with the thread-local RNG.
pub fn create_order_random(
    params: CreateOrderParams,
    defaults: &OrderDefaults,
) -> OrderResult<CreatedOrder> {
    create_order(params, defaults, &mut rand::thread_rng())
}
