//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an Axum `Router` with the order
//! routes, health checks, request tracing and CORS.

use super::super::host::ServerHost;
use crate::server::router::build_order_routes;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Order routes are nested under `config.api_prefix` when it is set;
    /// health checks always stay at the root.
    pub fn build_router(host: &ServerHost) -> Router {
        let order_routes = build_order_routes(host.app_state());
        let prefix = host.config.api_prefix.as_str();

        let app = if prefix.is_empty() {
            Self::health_routes().merge(order_routes)
        } else {
            Self::health_routes().nest(prefix, order_routes)
        };

        // The storefront frontend is served from another origin
        app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
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
            "service": "storefront-orders"
        }))
    }
}
