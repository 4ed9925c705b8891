//! Service trait for order storage

use async_trait::async_trait;

use crate::core::error::StorefrontResult;
use crate::core::order::{Order, OrderDraft, OrderId};

/// Storage for orders
///
/// Handlers only see this trait, so a persistent backend can replace the
/// in-memory one without touching them. Implementations assign identifiers
/// from their own sequential counter, starting at 1, atomically with the
/// append.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Assign the next identifier to `draft` and append it
    async fn append(&self, draft: OrderDraft) -> StorefrontResult<Order>;

    /// Get an order by identifier
    async fn get(&self, id: OrderId) -> StorefrontResult<Option<Order>>;

    /// All orders in insertion order
    async fn list(&self) -> StorefrontResult<Vec<Order>>;

    /// Flag the order's WhatsApp message as sent
    ///
    /// Fails with [`OrderError::NotFound`] for an unknown id. Calling it again
    /// on an already-sent order succeeds and refreshes the timestamp.
    ///
    /// [`OrderError::NotFound`]: crate::core::error::OrderError::NotFound
    async fn mark_sent(&self, id: OrderId) -> StorefrontResult<Order>;

    /// Number of stored orders
    async fn count(&self) -> StorefrontResult<usize>;
}
