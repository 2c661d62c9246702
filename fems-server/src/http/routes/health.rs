//! Health check endpoints (plaintext)

use axum::{routing::get, Router};

/// GET /health
async fn health() -> &'static str {
    "Application health is available\n"
}

/// GET /v1/health
async fn v1_health() -> &'static str {
    "V1 service health is active\n"
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/v1/health", get(v1_health))
}
