//! HTTP handlers for order operations
//!
//! Each handler is one linear sequence: start the request deadline, read the
//! path and body, make one store call under that deadline, and shape the
//! result into an envelope. The update handlers add a refetch. The first
//! failure returns early.

use axum::{
    Json,
    extract::{FromRequestParts, Path, State},
    http::request::Parts,
};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use crate::core::{
    DEFAULT_REQUEST_TIMEOUT, InsertAck, Order, OrderError, OrderFields, OrderFilter, OrderId,
    OrderPayload, OrderResponse, OrderStore, RequestDeadline, StoreError, ValidatedJson,
    WaiterUpdate,
};

/// Message returned by a successful delete
pub const ORDER_DELETED_MESSAGE: &str = "Order successfully deleted.";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OrderStore>,
    /// Time budget for each request's store calls
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self {
            store,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Starts the request budget as soon as the handler is routed
///
/// Parts extractors run before the body is read, so time spent receiving the
/// body counts against the deadline.
impl FromRequestParts<AppState> for RequestDeadline {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(RequestDeadline::after(state.request_timeout))
    }
}

fn log_failure(operation: &'static str) -> impl Fn(&StoreError) {
    move |error| tracing::debug!(operation, error = %error, "Store call failed")
}

/// Create an order
///
/// POST /order/create
pub async fn create_order(
    deadline: RequestDeadline,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OrderPayload>,
) -> Result<OrderResponse<InsertAck>, OrderError> {
    let fields = OrderFields::try_from(payload)?;

    let ack = deadline
        .run(state.store.insert(fields))
        .await
        .inspect_err(log_failure("insert"))
        .map_err(OrderError::Insert)?;

    tracing::debug!(order_id = %ack.inserted_id, "Order created");

    Ok(OrderResponse::success(ack))
}

/// List every order
///
/// GET /orders
///
/// Unlike the other endpoints this returns the bare array, not an envelope.
pub async fn list_orders(
    deadline: RequestDeadline,
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>, OrderError> {

    let cursor = deadline
        .run(state.store.find(OrderFilter::All))
        .await
        .inspect_err(log_failure("find"))?;

    let orders = deadline.drain(cursor).await?;

    Ok(Json(orders))
}

/// Fetch one order
///
/// GET /order/{orderId}
///
/// A missing order is reported as a store failure (500), not 404.
pub async fn get_order(
    deadline: RequestDeadline,
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<OrderResponse<Order>, OrderError> {
    let id = OrderId::parse_lenient(&order_id);

    let order = deadline
        .run(state.store.find_by_id(&id))
        .await
        .inspect_err(log_failure("find_one"))?;

    Ok(OrderResponse::success(order))
}

/// List the orders served by one waiter
///
/// GET /waiter/{waiter}
pub async fn orders_by_waiter(
    deadline: RequestDeadline,
    State(state): State<AppState>,
    Path(waiter): Path<String>,
) -> Result<OrderResponse<Vec<Order>>, OrderError> {

    let cursor = deadline
        .run(state.store.find(OrderFilter::Server(waiter)))
        .await
        .inspect_err(log_failure("find"))?;

    let orders = deadline.drain(cursor).await?;

    Ok(OrderResponse::success(orders))
}

/// Change the waiter of one order
///
/// PUT /waiter/update/{orderId}
///
/// Responds with the order as stored after the update, or with the zero-value
/// order when the id matched nothing.
pub async fn update_waiter(
    deadline: RequestDeadline,
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    ValidatedJson(update): ValidatedJson<WaiterUpdate>,
) -> Result<OrderResponse<Order>, OrderError> {
    let id = OrderId::parse_lenient(&order_id);

    let outcome = deadline
        .run(state.store.update_server(&id, update.server))
        .await
        .inspect_err(log_failure("update_one"))?;

    let order = refetch(&state, &deadline, &id, outcome.matched_count).await?;

    Ok(OrderResponse::success(order))
}

/// Replace the business fields of one order
///
/// PUT /order/update/{orderId}
pub async fn update_order(
    deadline: RequestDeadline,
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<OrderPayload>,
) -> Result<OrderResponse<Order>, OrderError> {
    let id = OrderId::parse_lenient(&order_id);
    let fields = OrderFields::try_from(payload)?;

    let outcome = deadline
        .run(state.store.replace(&id, fields))
        .await
        .inspect_err(log_failure("replace_one"))?;

    let order = refetch(&state, &deadline, &id, outcome.matched_count).await?;

    Ok(OrderResponse::success(order))
}

/// Delete one order
///
/// DELETE /order/delete/{orderId}
pub async fn delete_order(
    deadline: RequestDeadline,
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<OrderResponse<&'static str>, OrderError> {
    let id = OrderId::parse_lenient(&order_id);

    let outcome = deadline
        .run(state.store.delete(&id))
        .await
        .inspect_err(log_failure("delete_one"))?;

    if outcome.deleted_count < 1 {
        return Err(OrderError::NotFound);
    }

    tracing::debug!(order_id = %id, "Order deleted");

    Ok(OrderResponse::success(ORDER_DELETED_MESSAGE))
}

/// Read back an order after a write, only if the write matched exactly one
async fn refetch(
    state: &AppState,
    deadline: &RequestDeadline,
    id: &OrderId,
    matched_count: u64,
) -> Result<Order, OrderError> {
    if matched_count != 1 {
        return Ok(Order::default());
    }

    let order = deadline
        .run(state.store.find_by_id(id))
        .await
        .inspect_err(log_failure("find_one"))?;

    Ok(order)
}
