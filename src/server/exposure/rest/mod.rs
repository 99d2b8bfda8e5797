//! REST API exposure
//!
//! The REST exposure consumes a `ServerHost` and produces an Axum `Router`:
//! health routes in the clear, every record route behind the auth gate, and
//! a request trace layer around everything.

use super::super::host::ServerHost;
use crate::core::auth::require_token;
use crate::core::Envelope;
use anyhow::{Result, anyhow};
use axum::http::{Method, StatusCode, Uri};
use axum::{Json, Router, middleware, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a fully configured Axum router with:
    /// - Health check routes (no token required)
    /// - Record create/list/get routes (token required)
    /// - An envelope-shaped 404 for unknown paths (token required)
    /// - An envelope-shaped 405 for unsupported methods (token required)
    pub fn build_router(host: Arc<ServerHost>) -> Result<Router> {
        if !host.is_ready() {
            return Err(anyhow!(
                "No record type registered. Call .register_module() first"
            ));
        }

        tracing::info!(resources = ?host.resource_names(), "building REST routes");

        let record_routes = host
            .entity_registry
            .build_routes()
            .method_not_allowed_fallback(Self::method_not_allowed)
            .fallback(Self::route_not_found)
            .layer(middleware::from_fn_with_state(
                host.auth.clone(),
                require_token,
            ));

        let app = Self::health_routes()
            .merge(record_routes)
            .layer(TraceLayer::new_for_http());

        Ok(app)
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
            "service": "bistro"
        }))
    }

    /// Fallback for paths no record type claims
    async fn route_not_found(uri: Uri) -> Envelope {
        Envelope::new(StatusCode::NOT_FOUND, format!("No route for {}", uri.path()))
    }

    /// Fallback for known paths hit with an unsupported method
    async fn method_not_allowed(method: Method, uri: Uri) -> Envelope {
        Envelope::new(
            StatusCode::METHOD_NOT_ALLOWED,
            format!("Method {} not allowed on {}", method, uri.path()),
        )
    }
}
