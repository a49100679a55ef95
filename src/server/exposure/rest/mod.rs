//! REST API exposure
//!
//! The REST exposure consumes an `AppState` and produces an Axum `Router`
//! with the order routes, health probes and any custom routes, wrapped in an
//! HTTP tracing layer.

use crate::orders::handlers::AppState;
use crate::server::router::build_order_routes;
use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from the shared state
    ///
    /// # Arguments
    ///
    /// * `state` - Store handle and request timeout shared by the handlers
    /// * `custom_routes` - Additional custom routes to merge
    pub fn build_router(state: AppState, custom_routes: Vec<Router>) -> Result<Router> {
        let mut app = Self::health_routes().merge(build_order_routes(state));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "orders-api"
        }))
    }
}
