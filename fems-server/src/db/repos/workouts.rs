//! PostgreSQL workout store
//!
//! - create: parent INSERT ... RETURNING id, then one INSERT per entry
//! - update: UPDATE by id, DELETE all entries, reinsert
//! - delete: parent DELETE, entries go via ON DELETE CASCADE

use async_trait::async_trait;
use sqlx::{FromRow, PgConnection, PgPool};

use crate::db::store::{StoreError, WorkoutStore, VALID_ENTRY_CONSTRAINT};
use crate::models::{Workout, WorkoutEntry};

/// Workout record from database
#[derive(Debug, Clone, FromRow)]
struct WorkoutRow {
    id: i64,
    title: String,
    description: String,
    duration_minutes: i32,
    calories_burned: i32,
}

/// Entry record from database
#[derive(Debug, Clone, FromRow)]
struct EntryRow {
    id: i64,
    exercise_name: String,
    sets: i32,
    reps: Option<i32>,
    duration_seconds: Option<i32>,
    weight: Option<f64>,
    notes: String,
    order_index: i32,
}

impl WorkoutRow {
    fn into_workout(self, entries: Vec<EntryRow>) -> Workout {
        Workout {
            id: self.id,
            title: self.title,
            description: self.description,
            duration_minutes: self.duration_minutes,
            calories_burned: self.calories_burned,
            entries: entries.into_iter().map(EntryRow::into_entry).collect(),
        }
    }
}

impl EntryRow {
    fn into_entry(self) -> WorkoutEntry {
        WorkoutEntry {
            id: self.id,
            exercise_name: self.exercise_name,
            sets: self.sets,
            reps: self.reps,
            duration_seconds: self.duration_seconds,
            weight: self.weight,
            notes: self.notes,
            order_index: self.order_index,
        }
    }
}

/// Workout store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgWorkoutStore {
    pool: PgPool,
}

impl PgWorkoutStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Insert entries for `workout_id` in the order given, writing the
/// generated ids back into `entries`.
async fn insert_entries(
    conn: &mut PgConnection,
    workout_id: i64,
    entries: &mut [WorkoutEntry],
) -> Result<(), StoreError> {
    for (index, entry) in entries.iter_mut().enumerate() {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO workout_entries
                (workout_id, exercise_name, sets, reps, duration_seconds, weight, notes, order_index)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(workout_id)
        .bind(&entry.exercise_name)
        .bind(entry.sets)
        .bind(entry.reps)
        .bind(entry.duration_seconds)
        .bind(entry.weight)
        .bind(&entry.notes)
        .bind(entry.order_index)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| entry_insert_error(e, index))?;

        entry.id = id;
    }

    Ok(())
}

fn entry_insert_error(err: sqlx::Error, index: usize) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.constraint() == Some(VALID_ENTRY_CONSTRAINT) {
            return StoreError::InvalidEntry { index };
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl WorkoutStore for PgWorkoutStore {
    /// Uses a transaction so the workout and its entries are created
    /// together or not at all.
    #[tracing::instrument(skip_all, fields(title = %workout.title, entries = workout.entries.len()))]
    async fn create_workout(&self, mut workout: Workout) -> Result<Workout, StoreError> {
        let mut tx = self.pool.begin().await?;

        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO workouts (title, description, duration_minutes, calories_burned)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&workout.title)
        .bind(&workout.description)
        .bind(workout.duration_minutes)
        .bind(workout.calories_burned)
        .fetch_one(&mut *tx)
        .await?;

        workout.id = id;
        insert_entries(&mut tx, id, &mut workout.entries).await?;

        tx.commit().await?;
        tracing::debug!(workout_id = id, "workout created");

        workout.sort_entries();
        Ok(workout)
    }

    #[tracing::instrument(skip(self))]
    async fn get_workout_by_id(&self, id: i64) -> Result<Option<Workout>, StoreError> {
        let mut tx = self.pool.begin().await?;

        let row: Option<WorkoutRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, duration_minutes, calories_burned
            FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tracing::debug!("workout not found");
            return Ok(None);
        };

        // id breaks ties so equal order_index values keep insertion order
        let entries: Vec<EntryRow> = sqlx::query_as(
            r#"
            SELECT id, exercise_name, sets, reps, duration_seconds, weight, notes, order_index
            FROM workout_entries
            WHERE workout_id = $1
            ORDER BY order_index ASC, id ASC
            "#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(row.into_workout(entries)))
    }

    #[tracing::instrument(skip_all, fields(workout_id = workout.id, entries = workout.entries.len()))]
    async fn update_workout(&self, mut workout: Workout) -> Result<Workout, StoreError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE workouts
            SET title = $1, description = $2, duration_minutes = $3, calories_burned = $4,
                updated_at = NOW()
            WHERE id = $5
            "#,
        )
        .bind(&workout.title)
        .bind(&workout.description)
        .bind(workout.duration_minutes)
        .bind(workout.calories_burned)
        .bind(workout.id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id: workout.id });
        }

        sqlx::query("DELETE FROM workout_entries WHERE workout_id = $1")
            .bind(workout.id)
            .execute(&mut *tx)
            .await?;

        insert_entries(&mut tx, workout.id, &mut workout.entries).await?;

        tx.commit().await?;
        tracing::debug!("workout updated");

        workout.sort_entries();
        Ok(workout)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_workout(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }

        tracing::debug!("workout deleted");
        Ok(())
    }
}
