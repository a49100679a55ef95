//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that wires a store into the order
//! routes, the health probes and any custom routes.

pub mod builder;
pub mod exposure;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use router::build_order_routes;
