//! Database layer - connection pool, schema and workout stores
//!
//! # Design Principles
//!
//! - The pool is created once and handed to the store explicitly
//! - Handlers depend on the `WorkoutStore` trait, never on a driver
//! - Every multi-row write runs in one transaction; dropping it rolls back
//! - Entries are replaced wholesale on update, never diffed

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use pool::{create_pool, DatabaseConfig};
pub use repos::{MemoryWorkoutStore, PgWorkoutStore};
pub use sqlx::PgPool;
pub use store::{StoreError, WorkoutStore};
