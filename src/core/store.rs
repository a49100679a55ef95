//! Store trait for order persistence

use super::error::StoreError;
use super::order::{DeleteOutcome, InsertAck, Order, OrderFields, OrderId, UpdateOutcome};
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Lazily decoded sequence of orders returned by [`OrderStore::find`]
///
/// Each item is decoded on demand, so one bad record yields an `Err` item
/// without affecting the ones already read. Dropping the stream releases the
/// underlying cursor.
pub type OrderCursor = BoxStream<'static, Result<Order, StoreError>>;

/// Filter accepted by [`OrderStore::find`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderFilter {
    /// Every order in the collection
    All,
    /// Orders whose `server` field equals the value exactly
    Server(String),
}

/// Document store holding orders in a single collection
///
/// Implementations are shared across requests behind an `Arc`, so they must
/// be `Send + Sync` and handle their own synchronization.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert a new order under a freshly generated id
    async fn insert(&self, fields: OrderFields) -> Result<InsertAck, StoreError>;

    /// Open a cursor over the orders matching `filter`, in store order
    async fn find(&self, filter: OrderFilter) -> Result<OrderCursor, StoreError>;

    /// Fetch one order, failing with [`StoreError::NoDocuments`] if absent
    async fn find_by_id(&self, id: &OrderId) -> Result<Order, StoreError>;

    /// Set (or clear, with `None`) the `server` field of one order
    async fn update_server(
        &self,
        id: &OrderId,
        server: Option<String>,
    ) -> Result<UpdateOutcome, StoreError>;

    /// Overwrite the business fields of one order, keeping its id
    async fn replace(&self, id: &OrderId, fields: OrderFields)
    -> Result<UpdateOutcome, StoreError>;

    /// Delete one order
    async fn delete(&self, id: &OrderId) -> Result<DeleteOutcome, StoreError>;
}
