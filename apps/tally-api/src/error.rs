//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tally                                  │
//! │                                                                         │
//! │  JsonRejection ──────────────► MalformedInput ──► 400                   │
//! │  CoreError::Validation ──┐                                              │
//! │  CoreError::Computation ─┴───► InvalidReceipt ──► 400                   │
//! │  unknown id ─────────────────► NotFound ────────► 404                   │
//! │  StoreError / setup ─────────► Internal ────────► 500                   │
//! │                                                                         │
//! │  Body: {"error": "<fixed message>", "code": "<CODE>"}                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The detail carried by each variant is for logs. Clients get a fixed
//! message per variant so a rejected receipt never reveals which check
//! failed.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tally_core::CoreError;
use tally_store::StoreError;
use thiserror::Error;

use crate::dto::ErrorResponse;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Body could not be decoded into a receipt.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Receipt failed validation, or scoring failed after validation.
    #[error("Invalid receipt: {0}")]
    InvalidReceipt(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Status, machine-readable code and client-facing message.
    pub fn parts(&self) -> (StatusCode, &'static str, &'static str) {
        match self {
            ApiError::MalformedInput(_) => {
                (StatusCode::BAD_REQUEST, "MALFORMED_INPUT", "Invalid JSON format")
            }
            ApiError::InvalidReceipt(_) => {
                (StatusCode::BAD_REQUEST, "INVALID_RECEIPT", "Invalid receipt data")
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", "Receipt not found"),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL",
                "Internal server error",
            ),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::InvalidReceipt(e.to_string()),
            CoreError::Computation { .. } => ApiError::InvalidReceipt(err.to_string()),
            CoreError::Pattern(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "Receipt store failure");
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = ErrorResponse {
            error: message.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::ValidationError;

    #[test]
    fn test_validation_and_computation_look_the_same() {
        let validation: ApiError = CoreError::Validation(ValidationError::Empty {
            field: "items".to_string(),
        })
        .into();
        let computation: ApiError = CoreError::computation("total", "too large").into();

        assert_eq!(validation.parts(), computation.parts());
        assert_eq!(
            validation.parts(),
            (StatusCode::BAD_REQUEST, "INVALID_RECEIPT", "Invalid receipt data")
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MalformedInput("eof".into()).parts().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound("x".into()).parts().0, StatusCode::NOT_FOUND);

        let store: ApiError = StoreError::AlreadyExists("x".into()).into();
        assert_eq!(store.parts().0, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
