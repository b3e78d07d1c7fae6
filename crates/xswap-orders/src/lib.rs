//! # XSwap Orders
//!
//! Hash-locked cross-chain swap orders and their canonical serialization.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! A maker locks funds on a source chain; a resolver releases the matching
//! funds on a destination chain. Both escrows are keyed to the same secret
//! commitment and bounded by a staged schedule. This crate:
//! - Builds Keccak-256 commitments for one secret or a Merkle tree of secrets
//! - Models the escrow schedule, Dutch auction and resolver whitelist
//! - Serializes orders to a transport record and rebuilds them exactly
//! - Projects orders onto the EIP-712 payload the maker signs
//!
//! ## Round-Trip Guarantees
//!
//! | Input | Reconstruction |
//! |-------|----------------|
//! | Order + single secret | Exact (`originalParams.secret`) |
//! | Order + secret list | Exact (`originalParams.secrets`) |
//! | Order without secrets | Rejected by `deserialize`, best effort otherwise |
//!
//! ## Module Structure
//!
//! ```text
//! xswap-orders/
//! ├── domain/          # Order, HashLock, TimeLocks, Auction, errors, defaults
//! ├── algorithms/      # Keccak/Merkle, EIP-712, order workflow
//! ├── codec/           # Transport record, serializer, alternative view
//! ├── ports/           # SwapOrderApi, OrderSigner, OrderRepository
//! ├── adapters/        # In-memory repository, deterministic signer
//! └── service.rs       # OrderService
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod codec;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{DeterministicSigner, InMemoryOrderRepository};
pub use algorithms::{
    create_order, create_order_random, generate_random_secret, CreateOrderParams, CreatedOrder,
    MerkleTree, TypedData,
};
pub use codec::{
    deserialize, deserialize_best_effort, from_text, serialize, serialize_alternative, to_text,
    AlternativeSerializedOrder, Fidelity, Reconstruction, SerializeDiagnostic, SerializeOverrides,
    Serialized, SerializedOrder,
};
pub use domain::{
    Address, AuctionDetails, AuctionPoint, Details, EscrowParams, Extra, Hash, HashLock,
    HashLockKind, Order, OrderDefaults, OrderError, OrderExtension, OrderInfo, OrderResult,
    SecretMaterial, SecureSecret, TimeLocks, Whitelist, WhitelistItem, U256,
};
pub use ports::{OrderRepository, OrderSigner, OrderStatus, StoredOrder, SwapOrderApi};
pub use service::{OrderService, OrderServiceConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
