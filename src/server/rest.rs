//! REST API exposure
//!
//! Consumes an `EntityRegistry` and produces the Axum `Router` served by the
//! binary: entity routes, health checks, JSON fallbacks for unknown paths and
//! unsupported methods, request tracing and CORS.

use super::entity_registry::EntityRegistry;
use crate::core::{RequestError, ServiceError};
use axum::http::{Method, Uri};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a registry
    pub fn build_router(registry: &EntityRegistry) -> Router {
        Self::health_routes()
            .merge(registry.build_routes())
            .method_not_allowed_fallback(method_not_allowed)
            .fallback(path_not_found)
            .layer(
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
            "service": "grubdash"
        }))
    }
}

async fn path_not_found(uri: Uri) -> ServiceError {
    tracing::debug!(%uri, "no route for path");
    RequestError::PathNotFound {
        path: uri.to_string(),
    }
    .into()
}

async fn method_not_allowed(method: Method, uri: Uri) -> ServiceError {
    RequestError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.to_string(),
    }
    .into()
}
