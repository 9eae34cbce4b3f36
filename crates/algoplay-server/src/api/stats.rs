//! Catalog statistics endpoint

use crate::PlaygroundServer;
use algoplay_core::Statistics;
use axum::extract::{Json, State};
use std::sync::Arc;

/// Get algorithm statistics
pub async fn get_statistics(State(server): State<Arc<PlaygroundServer>>) -> Json<Statistics> {
    let stats = server.catalog.get_statistics();

    tracing::debug!(
        "Catalog stats - Algorithms: {}, Categories: {}",
        stats.total_algorithms,
        stats.total_categories
    );

    Json(stats)
}
