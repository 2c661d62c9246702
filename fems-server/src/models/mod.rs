//! Domain models with validation
//!
//! Payloads decoded from HTTP requests are checked with `validate()`
//! before they reach a store. Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod workout;

pub use validation::ValidationError;
pub use workout::{Measure, Workout, WorkoutEntry};
