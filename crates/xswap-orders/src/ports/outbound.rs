//! # Outbound Ports
//!
//! Traits for external dependencies (signer, order store).

use crate::algorithms::eip712::TypedData;
use crate::domain::{Address, OrderResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Signs EIP-712 payloads on behalf of the maker - outbound port.
#[async_trait]
pub trait OrderSigner: Send + Sync {
    /// Signature over `data`, `0x` hex.
    async fn sign_typed_data(&self, data: &TypedData) -> OrderResult<String>;
}

/// Lifecycle of a stored order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Signed and waiting for resolvers.
    Pending,
    /// Withdrawn by the maker.
    Cancelled,
    /// Completely filled.
    Filled,
}

impl OrderStatus {
    /// True for states nothing can leave.
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Cancelled => f.write_str("cancelled"),
            Self::Filled => f.write_str("filled"),
        }
    }
}

/// A persisted order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredOrder {
    /// Record id.
    pub id: Uuid,
    /// EIP-712 digest, `0x` hex.
    pub order_hash: String,
    /// Maker, for lookups.
    pub maker: Address,
    /// Transport JSON, stored verbatim.
    pub payload: String,
    /// Maker signature.
    pub signature: String,
    /// Current status.
    pub status: OrderStatus,
    /// Unix seconds.
    pub created_at: u64,
}

/// Order store - outbound port.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Store a new record; the id must be unused.
    async fn insert(&self, record: StoredOrder) -> OrderResult<()>;

    /// Fetch by id.
    async fn get(&self, id: Uuid) -> OrderResult<Option<StoredOrder>>;

    /// Move an existing record from `expected` to `status` atomically.
    ///
    /// Fails with `InvalidParameter("status")` when the record is no longer
    /// in `expected`; the record is left untouched.
    async fn update_status_if(
        &self,
        id: Uuid,
        expected: OrderStatus,
        status: OrderStatus,
    ) -> OrderResult<()>;

    /// All records of `maker`, oldest first.
    async fn list_by_maker(&self, maker: &Address) -> OrderResult<Vec<StoredOrder>>;
}
