//! Router builder for order routes

use crate::orders::handlers::{
    AppState, create_order, delete_order, get_order, list_orders, orders_by_waiter, update_order,
    update_waiter,
};
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Build the order routes
///
/// - POST   /order/create            - Create an order
/// - GET    /orders                  - List all orders (bare array)
/// - GET    /order/{orderId}         - Get one order
/// - GET    /waiter/{waiter}         - List orders served by a waiter
/// - PUT    /waiter/update/{orderId} - Change the waiter of an order
/// - PUT    /order/update/{orderId}  - Replace an order's fields
/// - DELETE /order/delete/{orderId}  - Delete an order
pub fn build_order_routes(state: AppState) -> Router {
    Router::new()
        .route("/order/create", post(create_order))
        .route("/orders", get(list_orders))
        .route("/order/{orderId}", get(get_order))
        .route("/waiter/{waiter}", get(orders_by_waiter))
        .route("/waiter/update/{orderId}", put(update_waiter))
        .route("/order/update/{orderId}", put(update_order))
        .route("/order/delete/{orderId}", delete(delete_order))
        .with_state(state)
}
