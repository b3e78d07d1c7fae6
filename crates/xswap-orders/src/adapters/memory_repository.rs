//! In-Memory Order Repository
//!
//! Implements `OrderRepository` over a locked map. Suitable for tests and
//! single-process deployments; records do not survive a restart.

use crate::domain::{Address, OrderError, OrderResult};
use crate::ports::outbound::{OrderRepository, OrderStatus, StoredOrder};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// In-memory order store.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    /// id -> (insertion sequence, record).
    records: RwLock<HashMap<Uuid, (u64, StoredOrder)>>,
}

impl InMemoryOrderRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert(&self, record: StoredOrder) -> OrderResult<()> {
        let mut records = self.records.write();
        if records.contains_key(&record.id) {
            return Err(OrderError::Storage(format!("duplicate order id {}", record.id)));
        }
        debug!("[xswap] Storing order {} ({})", record.id, record.order_hash);
        let seq = records.len() as u64;
        records.insert(record.id, (seq, record));
        Ok(())
    }

    async fn get(&self, id: Uuid) -> OrderResult<Option<StoredOrder>> {
        Ok(self.records.read().get(&id).map(|(_, r)| r.clone()))
    }

    async fn update_status_if(
        &self,
        id: Uuid,
        expected: OrderStatus,
        status: OrderStatus,
    ) -> OrderResult<()> {
        let mut records = self.records.write();
        let (_, record) = records.get_mut(&id).ok_or(OrderError::OrderNotFound(id))?;
        if record.status != expected {
            return Err(OrderError::invalid_parameter(
                "status",
                format!("order {id} is {}, expected {expected}", record.status),
            ));
        }
        debug!("[xswap] Order {} {} -> {}", id, record.status, status);
        record.status = status;
        Ok(())
    }

    async fn list_by_maker(&self, maker: &Address) -> OrderResult<Vec<StoredOrder>> {
        let records = self.records.read();
        let mut found: Vec<&(u64, StoredOrder)> =
            records.values().filter(|(_, r)| r.maker == *maker).collect();
        found.sort_by_key(|(seq, r)| (r.created_at, *seq));
        Ok(found.into_iter().map(|(_, r)| r.clone()).collect())
    }
}
