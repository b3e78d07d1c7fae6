//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits for order storage and signing.

mod deterministic_signer;
mod memory_repository;

pub use deterministic_signer::DeterministicSigner;
pub use memory_repository::InMemoryOrderRepository;
