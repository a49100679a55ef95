//! Core module containing the order model, the store contract and errors

pub mod deadline;
pub mod error;
pub mod order;
pub mod response;
pub mod store;
pub mod validation;

pub use deadline::{DEFAULT_REQUEST_TIMEOUT, RequestDeadline};
pub use error::{ConfigError, ORDER_NOT_FOUND_MESSAGE, OrderError, StoreError};
pub use order::{
    DeleteOutcome, InsertAck, Order, OrderFields, OrderId, OrderPayload, UpdateOutcome,
    WaiterUpdate,
};
pub use response::{OrderResponse, ResponseData};
pub use store::{OrderCursor, OrderFilter, OrderStore};
pub use validation::ValidatedJson;
