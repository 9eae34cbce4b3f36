//! Error responses
//!
//! Every failure leaves the server as `{"error": "<message>"}` with a
//! matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}

/// Request-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Catalog lookup or construction error
    #[error(transparent)]
    Catalog(#[from] algoplay_core::Error),

    /// No route matches the path
    #[error("Resource not found")]
    RouteNotFound,

    /// The path exists but not for this method
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Catalog(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            tracing::error!("Internal server error: {}", self);
            "Internal server error".to_string()
        } else {
            // Bad client keys are expected; keep them out of the error log
            tracing::debug!("{} ({})", self, status);
            self.to_string()
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Fallback for unknown paths
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Fallback for known paths hit with an unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
