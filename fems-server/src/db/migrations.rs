//! Schema bootstrap for the workout tables
//!
//! Idempotent: every statement uses `IF NOT EXISTS`, so this runs on each
//! server start. Concurrent starters are serialized by an advisory lock.

use sqlx::{PgConnection, PgPool};

/// Advisory lock key held while the schema is created
const MIGRATION_LOCK_KEY: i64 = 0x6665_6d73;

/// Create `workouts` and `workout_entries` if they are missing.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running workout migrations...");

    let mut conn = pool.acquire().await?;
    sqlx::query("SELECT pg_advisory_lock($1)")
        .bind(MIGRATION_LOCK_KEY)
        .execute(&mut *conn)
        .await?;

    let result = create_tables(&mut conn).await;

    let unlock = sqlx::query("SELECT pg_advisory_unlock($1)")
        .bind(MIGRATION_LOCK_KEY)
        .execute(&mut *conn)
        .await;
    if let Err(e) = unlock {
        tracing::warn!("Failed to release migration lock: {}", e);
        // Closing the session releases its advisory locks
        drop(conn.detach());
    }

    result?;
    tracing::info!("Workout migrations complete");
    Ok(())
}

async fn create_tables(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS workouts (
            id BIGSERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            duration_minutes INTEGER NOT NULL CHECK (duration_minutes > 0),
            calories_burned INTEGER NOT NULL DEFAULT 0 CHECK (calories_burned >= 0),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    // One of reps/duration_seconds, never both, never neither.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS workout_entries (
            id BIGSERIAL PRIMARY KEY,
            workout_id BIGINT NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
            exercise_name VARCHAR(255) NOT NULL,
            sets INTEGER NOT NULL CHECK (sets > 0),
            reps INTEGER,
            duration_seconds INTEGER,
            weight DOUBLE PRECISION,
            notes TEXT NOT NULL DEFAULT '',
            order_index INTEGER NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_workout_entry CHECK (
                (reps IS NOT NULL OR duration_seconds IS NOT NULL)
                AND (reps IS NULL OR duration_seconds IS NULL)
            )
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_workout_entries_workout_order
        ON workout_entries (workout_id, order_index)
        "#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}
