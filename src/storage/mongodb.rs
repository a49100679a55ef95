//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Provides `MongoOrderStore`, an [`OrderStore`] backed by a single collection
//! (`orders` by default) in a `mongodb::Database`.
//!
//! # Storage model
//!
//! Each order is one document: the generated ObjectId under `_id` plus the
//! four business fields. Reads go through `Collection<Document>` and are
//! decoded record by record, so a malformed document fails on its own
//! instead of poisoning the whole cursor.

use super::document::{decode_order, fields_document, filter_document, id_filter, order_document};
use crate::config::MongoConfig;
use crate::core::{
    DeleteOutcome, InsertAck, Order, OrderCursor, OrderFields, OrderFilter, OrderId, OrderStore,
    StoreError, UpdateOutcome,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Client, Collection, Database, IndexModel};

/// Order store backed by a MongoDB collection.
///
/// # Example
///
/// ```rust,ignore
/// use mongodb::Client;
/// use orders::storage::MongoOrderStore;
///
/// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
/// let store = MongoOrderStore::new(client.database("restaurant"), "orders");
/// let ack = store.insert(fields).await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoOrderStore {
    database: Database,
    collection_name: String,
}

impl MongoOrderStore {
    /// Create a new `MongoOrderStore` over the named collection.
    pub fn new(database: Database, collection_name: impl Into<String>) -> Self {
        Self {
            database,
            collection_name: collection_name.into(),
        }
    }

    /// Connect using the service configuration and check the server answers.
    pub async fn connect(config: &MongoConfig) -> Result<Self> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .with_context(|| format!("Failed to create MongoDB client for {}", config.uri))?;

        let database = client.database(&config.database);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .context("MongoDB did not answer ping")?;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Connected to MongoDB"
        );

        Ok(Self::new(database, config.collection.clone()))
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Database {
        &self.database
    }

    fn collection(&self) -> Collection<Document> {
        self.database.collection(&self.collection_name)
    }

    /// Create an index on `server` for waiter lookups.
    ///
    /// This method is idempotent, so it is safe to call on every startup.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder().keys(doc! { "server": 1 }).build();

        self.collection()
            .create_index(index)
            .await
            .with_context(|| {
                format!("Failed to create index on {} collection", self.collection_name)
            })?;

        Ok(())
    }
}

#[async_trait]
impl OrderStore for MongoOrderStore {
    async fn insert(&self, fields: OrderFields) -> Result<InsertAck, StoreError> {
        let id = OrderId::generate();

        let result = self
            .collection()
            .insert_one(order_document(&id, &fields))
            .await?;

        let inserted_id = match result.inserted_id {
            Bson::ObjectId(oid) => OrderId::from(oid),
            _ => id,
        };

        Ok(InsertAck { inserted_id })
    }

    async fn find(&self, filter: OrderFilter) -> Result<OrderCursor, StoreError> {
        let cursor = self.collection().find(filter_document(&filter)).await?;

        Ok(cursor
            .map(|item| item.map_err(StoreError::from).and_then(decode_order))
            .boxed())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Order, StoreError> {
        let document = self
            .collection()
            .find_one(id_filter(id))
            .await?
            .ok_or(StoreError::NoDocuments)?;

        decode_order(document)
    }

    async fn update_server(
        &self,
        id: &OrderId,
        server: Option<String>,
    ) -> Result<UpdateOutcome, StoreError> {
        let result = self
            .collection()
            .update_one(id_filter(id), doc! { "$set": { "server": server } })
            .await?;

        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn replace(
        &self,
        id: &OrderId,
        fields: OrderFields,
    ) -> Result<UpdateOutcome, StoreError> {
        let result = self
            .collection()
            .replace_one(id_filter(id), fields_document(&fields))
            .await?;

        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete(&self, id: &OrderId) -> Result<DeleteOutcome, StoreError> {
        let result = self.collection().delete_one(id_filter(id)).await?;

        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }
}
