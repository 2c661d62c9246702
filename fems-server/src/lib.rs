//! fems-server: HTTP service for workouts and their exercise entries
//!
//! A workout and its ordered entries are stored as one aggregate in
//! PostgreSQL and exposed as JSON under `/v1/workouts`.

pub mod db;
pub mod http;
pub mod models;

pub use db::{
    create_pool, DatabaseConfig, MemoryWorkoutStore, PgWorkoutStore, StoreError, WorkoutStore,
};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use models::{Workout, WorkoutEntry};
