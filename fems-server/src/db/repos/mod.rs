//! Workout store implementations
//!
//! - `PgWorkoutStore`: PostgreSQL, one transaction per aggregate write
//! - `MemoryWorkoutStore`: in-process map with the same observable behaviour

pub mod memory;
pub mod workouts;

pub use memory::MemoryWorkoutStore;
pub use workouts::PgWorkoutStore;
