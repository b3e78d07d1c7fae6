//! # Integration Flows
//!
//! Shared fixtures plus one module per flow.

pub mod fill_proofs;
pub mod round_trip;
pub mod service_flow;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use xswap_orders::{
    create_order, Address, CreateOrderParams, CreatedOrder, OrderDefaults, SecretMaterial, U256,
};

/// Escrow factory used by every fixture.
pub const ESCROW_FACTORY: Address = Address::new([0xEF; 20]);
/// Maker used by every fixture.
pub const MAKER: Address = Address::new([0x10; 20]);
/// Whitelisted resolver.
pub const RESOLVER: Address = Address::new([0x99; 20]);
/// Limit-order protocol contract.
pub const LIMIT_ORDER_PROTOCOL: Address = Address::new([0x11; 20]);

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parameters for a 1000 -> 2000 swap from chain 1 to chain 1001.
pub fn swap_params(secrets: SecretMaterial) -> CreateOrderParams {
    CreateOrderParams {
        escrow_factory: ESCROW_FACTORY,
        maker: MAKER,
        making_amount: U256::from(1000u64),
        taking_amount: U256::from(2000u64),
        maker_asset: Address::new([0x20; 20]),
        taker_asset: Address::new([0x30; 20]),
        secrets,
        src_chain_id: 1,
        dst_chain_id: 1001,
        src_timestamp: 1_700_000_000,
        resolver: RESOLVER,
    }
}

/// Seeded order for `secrets`.
pub fn seeded_order(secrets: SecretMaterial, seed: u64) -> CreatedOrder {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    create_order(swap_params(secrets), &OrderDefaults::default(), &mut rng)
        .expect("fixture order must build")
}
