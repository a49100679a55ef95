//! # Orders API
//!
//! A REST service exposing create/read/update/delete operations over
//! restaurant orders stored in a MongoDB collection.
//!
//! ## Endpoints
//!
//! | Method | Path                       | Purpose                              |
//! |--------|----------------------------|--------------------------------------|
//! | POST   | `/order/create`            | create an order                      |
//! | GET    | `/orders`                  | list all orders (bare JSON array)    |
//! | GET    | `/order/{orderId}`         | fetch one order                      |
//! | GET    | `/waiter/{waiter}`         | list orders served by a waiter       |
//! | PUT    | `/waiter/update/{orderId}` | change the waiter of an order        |
//! | PUT    | `/order/update/{orderId}`  | replace dish, price, server, table   |
//! | DELETE | `/order/delete/{orderId}`  | delete an order                      |
//!
//! Every response except the list-all one is wrapped in an envelope:
//! `{"status": 200, "message": "success", "data": {"data": ...}}`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orders::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemoryOrderStore::new())
//!     .build()?;
//! ```

pub mod config;
pub mod core;
pub mod orders;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ConfigError, DeleteOutcome, InsertAck, Order, OrderCursor, OrderError, OrderFields,
        OrderFilter, OrderId, OrderPayload, OrderResponse, OrderStore, RequestDeadline,
        StoreError, UpdateOutcome, ValidatedJson, WaiterUpdate,
    };

    // === Handlers ===
    pub use crate::orders::AppState;

    // === Storage ===
    pub use crate::storage::{InMemoryOrderStore, MongoOrderStore};

    // === Config ===
    pub use crate::config::{MongoConfig, ServiceConfig, StorageKind};

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder};

    // === External dependencies ===
    pub use async_trait::async_trait;
}
