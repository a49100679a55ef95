//! In-memory implementation of OrderStore for testing and development

use super::document::{decode_order, filter_document, order_document};
use crate::core::{
    DeleteOutcome, InsertAck, Order, OrderCursor, OrderFields, OrderFilter, OrderId, OrderStore,
    StoreError, UpdateOutcome,
};
use async_trait::async_trait;
use futures::StreamExt;
use futures::stream;
use mongodb::bson::{Bson, Document};
use std::sync::{Arc, RwLock};

/// In-memory order store
///
/// Keeps raw BSON documents in insertion order, which is also the iteration
/// order of `find`. Documents are decoded lazily on read, the same way the
/// MongoDB backend does it. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    documents: Arc<RwLock<Vec<Document>>>,
}

impl InMemoryOrderStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a document as-is, bypassing validation
    ///
    /// Lets tests seed records that will fail to decode.
    pub fn insert_raw(&self, document: Document) -> Result<(), StoreError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|e| StoreError::Driver(format!("Failed to acquire write lock: {}", e)))?;

        documents.push(document);
        Ok(())
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.read().map(|docs| docs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn matches(document: &Document, filter: &Document) -> bool {
        filter
            .iter()
            .all(|(key, value)| document.get(key) == Some(value))
    }

    fn position(documents: &[Document], id: &OrderId) -> Option<usize> {
        let target = Bson::ObjectId(id.object_id());
        documents.iter().position(|doc| doc.get("_id") == Some(&target))
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, fields: OrderFields) -> Result<InsertAck, StoreError> {
        let id = OrderId::generate();
        self.insert_raw(order_document(&id, &fields))?;

        Ok(InsertAck { inserted_id: id })
    }

    async fn find(&self, filter: OrderFilter) -> Result<OrderCursor, StoreError> {
        let documents = self
            .documents
            .read()
            .map_err(|e| StoreError::Driver(format!("Failed to acquire read lock: {}", e)))?;

        let filter = filter_document(&filter);
        let snapshot: Vec<Document> = documents
            .iter()
            .filter(|doc| Self::matches(doc, &filter))
            .cloned()
            .collect();

        Ok(stream::iter(snapshot).map(decode_order).boxed())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Order, StoreError> {
        let documents = self
            .documents
            .read()
            .map_err(|e| StoreError::Driver(format!("Failed to acquire read lock: {}", e)))?;

        let index = Self::position(&documents, id).ok_or(StoreError::NoDocuments)?;
        decode_order(documents[index].clone())
    }

    async fn update_server(
        &self,
        id: &OrderId,
        server: Option<String>,
    ) -> Result<UpdateOutcome, StoreError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|e| StoreError::Driver(format!("Failed to acquire write lock: {}", e)))?;

        let Some(index) = Self::position(&documents, id) else {
            return Ok(UpdateOutcome::default());
        };

        let value = server.map(Bson::String).unwrap_or(Bson::Null);
        let previous = documents[index].insert("server", value.clone());

        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count: u64::from(previous.as_ref() != Some(&value)),
        })
    }

    async fn replace(
        &self,
        id: &OrderId,
        fields: OrderFields,
    ) -> Result<UpdateOutcome, StoreError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|e| StoreError::Driver(format!("Failed to acquire write lock: {}", e)))?;

        let Some(index) = Self::position(&documents, id) else {
            return Ok(UpdateOutcome::default());
        };

        let replacement = order_document(id, &fields);
        let modified = documents[index] != replacement;
        documents[index] = replacement;

        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count: u64::from(modified),
        })
    }

    async fn delete(&self, id: &OrderId) -> Result<DeleteOutcome, StoreError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|e| StoreError::Driver(format!("Failed to acquire write lock: {}", e)))?;

        let deleted_count = match Self::position(&documents, id) {
            Some(index) => {
                documents.remove(index);
                1
            }
            None => 0,
        };

        Ok(DeleteOutcome { deleted_count })
    }
}
