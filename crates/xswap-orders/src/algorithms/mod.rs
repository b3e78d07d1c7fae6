//! # Algorithms Module
//!
//! Hashing, Merkle commitments, the signing payload and order construction.

pub mod eip712;
pub mod merkle;
pub mod secret;
pub mod workflow;

pub use eip712::{
    domain_separator, extension_hash, maker_traits, order_hash, struct_hash, typed_data,
    TypedData,
};
pub use merkle::{hash_pair, process_proof, verify_proof, MerkleTree};
pub use secret::{
    generate_random_secret, generate_random_secret_with, get_merkle_leaves,
    get_merkle_leaves_from_secret_hashes, hash_secret, keccak256, merkle_leaf,
};
pub use workflow::{create_order, create_order_random, CreateOrderParams, CreatedOrder};
