//! Health check and service metadata endpoints

use crate::PlaygroundServer;
use axum::extract::{Json, State};
use serde::Serialize;
use std::sync::Arc;

/// Service display name
pub const APP_NAME: &str = "Algorithm Playground";

/// Stack of the visualizer that consumes this API
pub const FRONTEND: &str = "Vanilla HTML/CSS/JavaScript";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
    /// Timestamp of the health check (RFC 3339, UTC)
    pub timestamp: String,
    /// Version information
    pub version: String,
    /// Listen port
    pub port: u16,
    /// Uptime in seconds
    pub uptime_seconds: u64,
}

/// Service metadata response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    /// Service name
    pub name: String,
    /// Version information
    pub version: String,
    /// Short description
    pub description: String,
    /// Number of algorithms in the catalog
    pub algorithms_total: usize,
    /// Number of categories in the catalog
    pub categories: usize,
    /// Listen port
    pub port: u16,
    /// Serving stack
    pub backend: String,
    /// Front-end stack
    pub frontend: String,
    /// Deployment environment
    pub environment: String,
}

/// Get health status
pub async fn health_check(State(server): State<Arc<PlaygroundServer>>) -> Json<HealthResponse> {
    let uptime = server.started_at.elapsed();

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        port: server.config.port(),
        uptime_seconds: uptime.as_secs(),
    })
}

/// Get application metadata
pub async fn app_info(State(server): State<Arc<PlaygroundServer>>) -> Json<InfoResponse> {
    let catalog = &server.catalog;

    Json(InfoResponse {
        name: APP_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: format!(
            "Interactive visualization of {} DSA algorithms",
            catalog.total_algorithms()
        ),
        algorithms_total: catalog.total_algorithms(),
        categories: catalog.total_categories(),
        port: server.config.port(),
        backend: "axum".to_string(),
        frontend: FRONTEND.to_string(),
        environment: server.config.environment.to_string(),
    })
}
