//! Workout endpoints
//!
//! Handlers only decode input, call the store and map results to status
//! codes; successful responses are wrapped as `{"workout": {...}}`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::WorkoutId;
use crate::http::server::AppState;
use crate::models::Workout;

/// Workout response envelope
#[derive(Debug, Serialize)]
pub struct WorkoutResponse {
    pub workout: Workout,
}

/// Decode and validate a workout body. The Content-Type header is not
/// consulted.
fn decode_workout(body: &[u8]) -> Result<Workout, ApiError> {
    let workout: Workout = serde_json::from_slice(body).map_err(ApiError::InvalidPayload)?;
    workout.validate()?;
    Ok(workout)
}

/// GET /v1/workouts/{id}
async fn get_workout(
    State(state): State<Arc<AppState>>,
    WorkoutId(id): WorkoutId,
) -> Result<Json<WorkoutResponse>, ApiError> {
    let workout = state
        .store
        .get_workout_by_id(id)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "workout",
            id,
        })?;

    Ok(Json(WorkoutResponse { workout }))
}

/// POST /v1/workouts/
async fn create_workout(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<WorkoutResponse>), ApiError> {
    let workout = decode_workout(&body)?;
    let workout = state.store.create_workout(workout).await?;

    tracing::info!(workout_id = workout.id, "workout created");
    Ok((StatusCode::CREATED, Json(WorkoutResponse { workout })))
}

/// PUT /v1/workouts/{id}
///
/// Existence is checked before the body is decoded, so a missing workout
/// is a 404 even when the payload is also bad.
async fn update_workout(
    State(state): State<Arc<AppState>>,
    WorkoutId(id): WorkoutId,
    body: Bytes,
) -> Result<Json<WorkoutResponse>, ApiError> {
    if state.store.get_workout_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound {
            resource: "workout",
            id,
        });
    }

    let mut workout = decode_workout(&body)?;
    workout.id = id;

    let workout = state.store.update_workout(workout).await?;

    tracing::info!(workout_id = id, "workout updated");
    Ok(Json(WorkoutResponse { workout }))
}

/// DELETE /v1/workouts/{id}
async fn delete_workout(
    State(state): State<Arc<AppState>>,
    WorkoutId(id): WorkoutId,
) -> Result<StatusCode, ApiError> {
    state.store.delete_workout(id).await?;

    tracing::info!(workout_id = id, "workout deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Workout routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/workouts", post(create_workout))
        .route("/v1/workouts/", post(create_workout))
        .route(
            "/v1/workouts/{id}",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}
