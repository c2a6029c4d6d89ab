//! Error types for the service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::fdc::FdcError;
use crate::storage::StorageError;

// == Cache Error Enum ==
/// Errors raised by the cache. Only construction can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Invalid cache configuration: {0}")]
    InvalidConfiguration(String),
}

// == API Error Enum ==
/// Errors surfaced to HTTP clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Requested food or cache entry does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Food Data Central could not be reached or refused the call
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Food Data Central answered with something we could not read
    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<FdcError> for ApiError {
    fn from(err: FdcError) -> Self {
        match err {
            FdcError::NotFound(_) => ApiError::NotFound(err.to_string()),
            FdcError::ServiceUnavailable(_) => ApiError::ServiceUnavailable(err.to_string()),
            FdcError::InvalidResponse(_) => ApiError::InvalidResponse(err.to_string()),
            FdcError::InvalidConfig(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fdc_errors_map_to_status() {
        let cases = [
            (FdcError::NotFound("1".into()), StatusCode::NOT_FOUND),
            (
                FdcError::ServiceUnavailable("down".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                FdcError::InvalidResponse("garbage".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                FdcError::InvalidConfig("no key".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn test_storage_error_is_internal() {
        let err = ApiError::from(StorageError::Backend("disk".into()));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_request_is_bad_request() {
        let response = ApiError::InvalidRequest("empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
