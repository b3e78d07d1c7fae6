//! # Inbound Ports
//!
//! API trait defining what the order subsystem offers callers.

use super::outbound::StoredOrder;
use crate::domain::{Address, Order, OrderResult, SecretMaterial};
use async_trait::async_trait;
use uuid::Uuid;

/// Swap order API - inbound port.
#[async_trait]
pub trait SwapOrderApi: Send + Sync {
    /// Serialize, sign and store an order. `material` must match its
    /// commitment.
    async fn submit(&self, order: &Order, material: &SecretMaterial) -> OrderResult<StoredOrder>;

    /// Rebuild a stored order from its payload.
    async fn load(&self, id: Uuid) -> OrderResult<Order>;

    /// Cancel a pending order.
    async fn cancel(&self, id: Uuid) -> OrderResult<()>;

    /// Stored orders of `maker`.
    async fn orders_by_maker(&self, maker: &Address) -> OrderResult<Vec<StoredOrder>>;
}
