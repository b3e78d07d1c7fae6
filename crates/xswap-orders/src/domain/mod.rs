//! # Domain Module
//!
//! Core domain types for cross-chain swap orders.

pub mod auction;
pub mod config;
pub mod entities;
pub mod errors;
pub mod hash_lock;
pub mod invariants;
pub mod secure_secret;
pub mod time_locks;
pub mod value_objects;

pub use auction::*;
pub use config::*;
pub use entities::*;
pub use errors::*;
pub use hash_lock::*;
pub use invariants::*;
pub use secure_secret::{SecretMaterial, SecureSecret};
pub use time_locks::*;
pub use value_objects::*;
