//! API error handling
//!
//! Maps the shared `AdapterError` taxonomy onto HTTP statuses:
//! InvalidArgument -> 400, NotFound -> 404, AlreadyExists/Conflict -> 409,
//! Store -> 500. Store failures during a request are reported to the caller
//! and never fatal to the process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use core_kernel::AdapterError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<AdapterError> for ApiError {
    fn from(err: AdapterError) -> Self {
        match &err {
            AdapterError::InvalidArgument { .. } => ApiError::BadRequest(err.to_string()),
            AdapterError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            AdapterError::AlreadyExists { .. } | AdapterError::Conflict { .. } => {
                ApiError::Conflict(err.to_string())
            }
            AdapterError::Store { .. } => {
                error!(error = %err, "store failure during request");
                ApiError::Internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_maps_to_statuses() {
        let cases = [
            (AdapterError::invalid_argument("bad id"), StatusCode::BAD_REQUEST),
            (AdapterError::not_found("voter", 1), StatusCode::NOT_FOUND),
            (AdapterError::already_exists("voter", 1), StatusCode::CONFLICT),
            (AdapterError::conflict("stale token"), StatusCode::CONFLICT),
            (AdapterError::store("redis down"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (adapter_error, expected) in cases {
            let response = ApiError::from(adapter_error).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
