//! Algorithm catalog endpoints
//!
//! - GET /api/algorithms - Full catalog
//! - GET /api/algorithms/{category} - Records of one category
//! - GET /api/algorithms/{category}/{algorithm} - One record

use super::error::ApiError;
use crate::PlaygroundServer;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

/// Get all algorithm metadata
pub async fn get_all_algorithms(State(server): State<Arc<PlaygroundServer>>) -> Response {
    Json(server.catalog.get_all()).into_response()
}

/// Get algorithms for a specific category
pub async fn get_category_algorithms(
    State(server): State<Arc<PlaygroundServer>>,
    Path(category): Path<String>,
) -> Result<Response, ApiError> {
    let records = server.catalog.get_category(&category)?;
    tracing::debug!("Category {} has {} algorithms", category, records.len());
    Ok(Json(records).into_response())
}

/// Get info for a specific algorithm
pub async fn get_algorithm_info(
    State(server): State<Arc<PlaygroundServer>>,
    Path((category, algorithm)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let record = server.catalog.get_algorithm(&category, &algorithm)?;
    Ok(Json(record).into_response())
}
