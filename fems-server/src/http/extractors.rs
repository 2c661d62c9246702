//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Extract and validate a workout id from path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutId(pub i64);

impl WorkoutId {
    /// Parse a path segment. Ids are database identities, so zero and
    /// negative values are rejected along with non-numbers.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => {
                tracing::debug!(raw, "invalid workout id");
                Err(ApiError::InvalidId)
            }
        }
    }
}

impl<S> FromRequestParts<S> for WorkoutId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId)?;

        Self::parse(&id)
    }
}
