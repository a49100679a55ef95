//! Orders API server
//!
//! Configuration comes from `ORDERS_CONFIG` (YAML) plus the `MONGOURI` and
//! `ORDERS_BIND_ADDRESS` overrides. Log verbosity follows `RUST_LOG`.

use anyhow::Result;
use orders::config::{ServiceConfig, StorageKind};
use orders::server::ServerBuilder;
use orders::storage::{InMemoryOrderStore, MongoOrderStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::load()?;
    let builder = ServerBuilder::from_config(&config);

    let builder = match config.storage {
        StorageKind::Mongodb => {
            let store = MongoOrderStore::connect(&config.mongodb).await?;
            store.ensure_indexes().await?;
            builder.with_store(store)
        }
        StorageKind::InMemory => {
            tracing::warn!("Using in-memory storage, orders are lost on shutdown");
            builder.with_store(InMemoryOrderStore::new())
        }
    };

    builder.serve(&config.bind_address).await
}
