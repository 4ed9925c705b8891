//! In-memory implementation of OrderStore
//!
//! Orders live for the lifetime of the process.

use crate::core::error::{OrderError, StorefrontError, StorefrontResult};
use crate::core::order::{Order, OrderDraft, OrderId};
use crate::core::service::OrderStore;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock};

struct Orders {
    records: Vec<Order>,
    next_id: u64,
}

/// In-memory order store
///
/// Uses RwLock for thread-safe access. Identifier assignment and append
/// happen under the same write lock. Lookups are linear scans.
#[derive(Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<Orders>>,
}

impl InMemoryOrderStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(Orders {
                records: Vec::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_poisoned(operation: &str, e: impl std::fmt::Display) -> StorefrontError {
    OrderError::StoreFailed {
        operation: operation.to_string(),
        message: format!("lock poisoned: {}", e),
    }
    .into()
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn append(&self, draft: OrderDraft) -> StorefrontResult<Order> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| lock_poisoned("append", e))?;

        let order = draft.into_order(OrderId(orders.next_id));
        orders.next_id += 1;
        orders.records.push(order.clone());

        Ok(order)
    }

    async fn get(&self, id: OrderId) -> StorefrontResult<Option<Order>> {
        let orders = self.orders.read().map_err(|e| lock_poisoned("get", e))?;

        Ok(orders.records.iter().find(|o| o.id == id).cloned())
    }

    async fn list(&self) -> StorefrontResult<Vec<Order>> {
        let orders = self.orders.read().map_err(|e| lock_poisoned("list", e))?;

        Ok(orders.records.clone())
    }

    async fn mark_sent(&self, id: OrderId) -> StorefrontResult<Order> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| lock_poisoned("update", e))?;

        let order = orders
            .records
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(OrderError::NotFound { id })?;
        order.mark_whatsapp_sent(Utc::now());

        Ok(order.clone())
    }

    async fn count(&self) -> StorefrontResult<usize> {
        let orders = self.orders.read().map_err(|e| lock_poisoned("count", e))?;

        Ok(orders.records.len())
    }
}
