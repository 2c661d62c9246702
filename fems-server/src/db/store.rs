//! Storage contract for workout aggregates

use async_trait::async_trait;

use crate::models::Workout;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("not found: workout '{id}'")]
    NotFound { id: i64 },

    /// Entry does not carry exactly one of reps or duration_seconds
    #[error("invalid entry at index {index}: exactly one of reps or duration_seconds must be set")]
    InvalidEntry { index: usize },
}

/// Constraint enforcing exactly one measure per entry row
pub const VALID_ENTRY_CONSTRAINT: &str = "valid_workout_entry";

/// Index of the first entry without exactly one measure, if any.
pub fn first_invalid_entry(workout: &Workout) -> Option<usize> {
    workout.entries.iter().position(|e| e.measure().is_none())
}

/// Durable CRUD for workouts and their entries.
///
/// Implementations treat a workout and its entries as one unit: a write
/// either stores the whole aggregate or nothing.
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Insert the workout and all entries. Returns the workout with its
    /// own id and every entry id populated, entries in `order_index` order.
    async fn create_workout(&self, workout: Workout) -> Result<Workout, StoreError>;

    /// Fetch a workout with entries ordered by `order_index`.
    /// `Ok(None)` when no workout has this id.
    async fn get_workout_by_id(&self, id: i64) -> Result<Option<Workout>, StoreError>;

    /// Overwrite the scalar fields of `workout.id` and replace all of its
    /// entries. Replaced entries get fresh ids.
    async fn update_workout(&self, workout: Workout) -> Result<Workout, StoreError>;

    /// Delete a workout together with its entries.
    async fn delete_workout(&self, id: i64) -> Result<(), StoreError>;
}
