//! Algoplay Server - HTTP API for the algorithm catalog
//!
//! Provides REST endpoints for:
//! - GET / - Service metadata
//! - GET /health - Liveness probe
//! - GET /api/info - Service metadata
//! - GET /api/algorithms - Full catalog
//! - GET /api/algorithms/{category} - One category
//! - GET /api/algorithms/{category}/{algorithm} - One record
//! - GET /api/statistics - Aggregate counts

use algoplay_core::Catalog;
use axum::{Router, routing::get};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod api;
pub mod config;
pub mod middleware;

use config::Config;

/// Algoplay server state
///
/// Everything here is read-only after startup, so handlers share it
/// through an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct PlaygroundServer {
    /// Algorithm catalog
    pub catalog: Arc<Catalog>,
    /// Server configuration
    pub config: Arc<Config>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl PlaygroundServer {
    /// Create a new server instance
    pub fn new(catalog: Arc<Catalog>, config: Arc<Config>) -> Self {
        Self {
            catalog,
            config,
            started_at: Instant::now(),
        }
    }
}

/// Build the application router with all routes and middleware layers
pub fn build_router(server: Arc<PlaygroundServer>) -> Router {
    let cors = middleware::cors_layer(&server.config.cors);

    Router::new()
        .route("/", get(api::health::app_info))
        .route("/health", get(api::health::health_check))
        .route("/api/info", get(api::health::app_info))
        .route("/api/algorithms", get(api::algorithms::get_all_algorithms))
        .route(
            "/api/algorithms/{category}",
            get(api::algorithms::get_category_algorithms),
        )
        .route(
            "/api/algorithms/{category}/{algorithm}",
            get(api::algorithms::get_algorithm_info),
        )
        .route("/api/statistics", get(api::stats::get_statistics))
        .fallback(api::error::route_not_found)
        .method_not_allowed_fallback(api::error::method_not_allowed)
        .with_state(server)
        // CORS support
        .layer(cors)
        // Security headers on every response, preflights included
        .layer(axum::middleware::from_fn(middleware::security_headers))
        // Request/response tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_clone_shares_catalog() {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let server = PlaygroundServer::new(catalog.clone(), Arc::new(Config::default()));
        let cloned = server.clone();

        assert!(Arc::ptr_eq(&server.catalog, &cloned.catalog));
        assert!(Arc::ptr_eq(&server.config, &cloned.config));
        assert!(Arc::ptr_eq(&server.catalog, &catalog));
    }

    #[test]
    fn test_router_creation() {
        let server = Arc::new(PlaygroundServer::new(
            Arc::new(Catalog::builtin().unwrap()),
            Arc::new(Config::default()),
        ));
        let _router = build_router(server);
    }
}
