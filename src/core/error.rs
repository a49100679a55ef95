//! Typed error handling for the orders service
//!
//! # Error Categories
//!
//! - [`OrderError`]: everything a handler can fail with, mapped to an HTTP status
//! - [`StoreError`]: failures reported by an [`OrderStore`](super::store::OrderStore)
//! - [`ConfigError`]: failures while loading [`ServiceConfig`](crate::config::ServiceConfig)
//!
//! Messages are passed to the client verbatim, so `Display` for store errors
//! is exactly the underlying driver text.

use super::order::Order;
use super::response::OrderResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Message returned when a delete matched nothing
pub const ORDER_NOT_FOUND_MESSAGE: &str = "Order with specified ID not found.";

/// Errors surfaced by the order handlers
#[derive(Debug, Error)]
pub enum OrderError {
    /// Body failed to parse as JSON or failed field validation
    #[error("{0}")]
    Validation(String),

    /// A store call failed while creating an order
    #[error("{0}")]
    Insert(StoreError),

    /// Any other store call failed
    #[error("{0}")]
    Store(#[from] StoreError),

    /// A cursor failed part-way, after some records were already decoded
    #[error("{source}")]
    PartialRead {
        source: StoreError,
        partial: Vec<Order>,
    },

    /// Delete matched no document
    #[error("Order with specified ID not found.")]
    NotFound,
}

impl OrderError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderError::Insert(_) => StatusCode::BAD_REQUEST,
            OrderError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            OrderError::PartialRead { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            OrderError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Convert to the error envelope
    pub fn to_response(&self) -> OrderResponse<String> {
        let envelope = OrderResponse::error(self.status_code(), self.to_string());
        match self {
            OrderError::PartialRead { partial, .. } => envelope.with_partial(partial.clone()),
            _ => envelope,
        }
    }
}

impl From<validator::ValidationErrors> for OrderError {
    fn from(errors: validator::ValidationErrors) -> Self {
        OrderError::Validation(errors.to_string())
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        self.to_response().into_response()
    }
}

/// Errors reported by a store backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Raw error from the database driver
    #[error("{0}")]
    Driver(String),

    /// A single-document lookup matched nothing
    #[error("mongo: no documents in result")]
    NoDocuments,

    /// A stored document could not be decoded into an order
    #[error("{0}")]
    Decode(String),

    /// The per-request deadline expired before the call completed
    #[error("context deadline exceeded")]
    Timeout,
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Driver(err.to_string())
    }
}

impl From<mongodb::bson::de::Error> for StoreError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid value for '{field}': {message}")]
    Invalid { field: String, message: String },
}
