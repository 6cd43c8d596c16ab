//! API error type
//!
//! Error bodies never carry internal detail: a caller only sees a missing
//! key, an invalid request or a generic server failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, VerificationOutcome};

/// Error body returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VerificationOutcome>,
    pub message: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                status: None,
                message: message.into(),
            },
        }
    }

    /// Rejected verification request
    ///
    /// Same body as a wrong key: malformed input is not distinguished.
    pub fn invalid_key() -> Self {
        let outcome = VerificationOutcome::Invalid;

        Self {
            status: StatusCode::BAD_REQUEST,
            response: ApiErrorResponse {
                status: Some(outcome),
                message: outcome.message().to_string(),
            },
        }
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { .. } => Self::invalid_key(),
            DomainError::Generation { .. } => Self::internal("Failed to generate key"),
            DomainError::StoreRead { .. } => Self::internal("Failed to retrieve key"),
            DomainError::StoreWrite { .. } | DomainError::Configuration { .. } => {
                Self::internal("Internal server error")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.response.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_body() {
        let err = ApiError::invalid_key();
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            serde_json::json!({"status": "invalid", "message": "Invalid key"})
        );
    }

    #[test]
    fn test_message_only_body() {
        let err = ApiError::not_found("No key found");
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(json, serde_json::json!({"message": "No key found"}));
    }

    #[test]
    fn test_domain_error_conversion() {
        let api_err: ApiError = DomainError::validation("Key parameter is required").into();
        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.response.message, "Invalid key");

        let api_err: ApiError = DomainError::generation("backend down").into();
        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.response.message, "Failed to generate key");
    }

    #[test]
    fn test_domain_error_hides_detail() {
        let api_err: ApiError =
            DomainError::store_write("redis://10.0.0.4:6379 refused connection").into();

        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api_err.response.message.contains("redis"));
    }

    #[test]
    fn test_all_error_statuses() {
        assert_eq!(ApiError::invalid_key().status, StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::not_found("").status, StatusCode::NOT_FOUND);
        assert_eq!(ApiError::internal("").status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
