//! Order resource module
//!
//! This module provides the handlers behind the order endpoints and the
//! state they share.

pub mod handlers;

pub use handlers::{
    AppState, create_order, delete_order, get_order, list_orders, orders_by_waiter, update_order,
    update_waiter,
};
