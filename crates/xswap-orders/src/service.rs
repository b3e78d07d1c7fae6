//! Order Service - submission, retrieval and cancellation
//!
//! Wires the serializer, the signing payload and the outbound ports
//! together. Dependencies are injected; nothing here is global.

use crate::codec::{from_text, serialize, SerializeOverrides};
use crate::domain::{Address, Order, OrderError, OrderResult, SecretMaterial};
use crate::ports::inbound::SwapOrderApi;
use crate::ports::outbound::{OrderRepository, OrderSigner, OrderStatus, StoredOrder};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};
use uuid::Uuid;

/// Order service configuration.
#[derive(Clone, Debug)]
pub struct OrderServiceConfig {
    /// Limit-order protocol contract used as the EIP-712 verifying contract.
    pub verifying_contract: Address,
    /// Reject submissions whose serialization needed defaults.
    pub reject_defaulted: bool,
}

impl Default for OrderServiceConfig {
    fn default() -> Self {
        Self {
            verifying_contract: Address::ZERO,
            reject_defaulted: false,
        }
    }
}

/// Order service implementation.
pub struct OrderService<R, S>
where
    R: OrderRepository,
    S: OrderSigner,
{
    config: OrderServiceConfig,
    repository: Arc<R>,
    signer: Arc<S>,
}

impl<R, S> OrderService<R, S>
where
    R: OrderRepository,
    S: OrderSigner,
{
    /// Create a new service.
    pub fn new(config: OrderServiceConfig, repository: Arc<R>, signer: Arc<S>) -> Self {
        Self {
            config,
            repository,
            signer,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &OrderServiceConfig {
        &self.config
    }

    async fn fetch(&self, id: Uuid) -> OrderResult<StoredOrder> {
        self.repository
            .get(id)
            .await?
            .ok_or(OrderError::OrderNotFound(id))
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[async_trait]
impl<R, S> SwapOrderApi for OrderService<R, S>
where
    R: OrderRepository,
    S: OrderSigner,
{
    async fn submit(&self, order: &Order, material: &SecretMaterial) -> OrderResult<StoredOrder> {
        let serialized = serialize(order, Some(material), &SerializeOverrides::default())?;
        if !serialized.is_faithful() {
            if self.config.reject_defaulted {
                return Err(OrderError::invalid_parameter(
                    "order",
                    format!("serialization needed {} fallback(s)", serialized.diagnostics.len()),
                ));
            }
            warn!(
                "[xswap] Submitting order with {} serialization fallback(s)",
                serialized.diagnostics.len()
            );
        }

        let typed_data = order.typed_data(self.config.verifying_contract);
        let signature = self.signer.sign_typed_data(&typed_data).await?;

        let record = StoredOrder {
            id: Uuid::new_v4(),
            order_hash: format!(
                "0x{}",
                hex::encode(order.order_hash(self.config.verifying_contract))
            ),
            maker: order.maker(),
            payload: serialized.order.to_json()?,
            signature,
            status: OrderStatus::Pending,
            created_at: unix_now(),
        };

        self.repository.insert(record.clone()).await?;
        info!(
            "[xswap] Order {} submitted ({} -> {})",
            record.id,
            order.src_chain_id(),
            order.dst_chain_id()
        );
        Ok(record)
    }

    async fn load(&self, id: Uuid) -> OrderResult<Order> {
        let record = self.fetch(id).await?;
        from_text(&record.payload)
    }

    async fn cancel(&self, id: Uuid) -> OrderResult<()> {
        self.repository
            .update_status_if(id, OrderStatus::Pending, OrderStatus::Cancelled)
            .await?;
        info!("[xswap] Order {} cancelled", id);
        Ok(())
    }

    async fn orders_by_maker(&self, maker: &Address) -> OrderResult<Vec<StoredOrder>> {
        self.repository.list_by_maker(maker).await
    }
}
