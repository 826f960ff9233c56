//! Error types for the cache host
//!
//! Cache operations themselves are total and never fail; these errors belong
//! to configuration parsing and the HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Parse Trigger Error ==
/// Raised when an eviction trigger name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown eviction trigger '{0}' (expected 'occupancy' or 'clock')")]
pub struct ParseTriggerError(pub String);

// == API Error Enum ==
/// Errors returned by the HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Key not present in the current snapshot
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = vec![
            (ApiError::NotFound("key".to_string()), StatusCode::NOT_FOUND),
            (ApiError::InvalidRequest("bad".to_string()), StatusCode::BAD_REQUEST),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_parse_trigger_error_message() {
        let err = ParseTriggerError("fifo".to_string());
        assert!(err.to_string().contains("fifo"));
    }
}
