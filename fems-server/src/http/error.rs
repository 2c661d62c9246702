//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": "<message>"}` envelopes with the
//! matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Path id missing, not a number, or not positive (400)
    InvalidId,

    /// Request body is not a decodable workout (400)
    InvalidPayload(serde_json::Error),

    /// Decoded workout failed validation (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: i64 },

    /// Storage failure (500, logged)
    Store(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidId | Self::InvalidPayload(_) | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::InvalidId => "invalid workout id".to_owned(),
            Self::InvalidPayload(e) => {
                tracing::debug!("Rejected workout payload: {}", e);
                "invalid workout payload".to_owned()
            }
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource, .. } => format!("{} not found", resource),
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!("Store error: {}", e);
                "internal server error".to_owned()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { id } => Self::NotFound {
                resource: "workout",
                id,
            },
            StoreError::InvalidEntry { index } => Self::Validation(ValidationError::Entry {
                index,
                source: Box::new(ValidationError::ExactlyOneOf {
                    first: "reps",
                    second: "duration_seconds",
                }),
            }),
            _ => Self::Store(e),
        }
    }
}
