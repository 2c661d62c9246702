//! Workout aggregate and its exercise entries
//!
//! A workout exclusively owns its entries; they are created, replaced and
//! deleted together with the parent row.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Maximum length for workout titles (matches `VARCHAR(255)`)
const MAX_TITLE_LEN: usize = 255;

/// Maximum length for exercise names (matches `VARCHAR(255)`)
const MAX_EXERCISE_NAME_LEN: usize = 255;

/// One exercise session with its ordered entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Assigned by the store on creation; ignored on input.
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration_minutes: i32,
    #[serde(default)]
    pub calories_burned: i32,
    #[serde(default)]
    pub entries: Vec<WorkoutEntry>,
}

/// One exercise performed within a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    #[serde(default)]
    pub id: i64,
    pub exercise_name: String,
    #[serde(default)]
    pub sets: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub order_index: i32,
}

/// How an entry is measured: by repetitions or by time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Reps(i32),
    Duration { seconds: i32 },
}

impl Workout {
    /// Check scalar fields and every entry.
    ///
    /// # Rules
    /// - Title non-empty (after trimming), max 255 characters
    /// - `duration_minutes` greater than zero
    /// - `calories_burned` not negative
    /// - Every entry valid (see [`WorkoutEntry::validate`])
    ///
    /// # Example
    /// ```
    /// use fems_server::models::Workout;
    ///
    /// let workout: Workout = serde_json::from_str(
    ///     r#"{"title": "Morning Routine", "duration_minutes": 60}"#,
    /// ).unwrap();
    /// assert!(workout.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        // Stored untrimmed, so the limit applies to the raw text
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        if self.duration_minutes <= 0 {
            return Err(ValidationError::OutOfRange {
                field: "duration_minutes",
                reason: "must be greater than zero",
            });
        }
        if self.calories_burned < 0 {
            return Err(ValidationError::OutOfRange {
                field: "calories_burned",
                reason: "cannot be negative",
            });
        }

        for (index, entry) in self.entries.iter().enumerate() {
            entry.validate().map_err(|source| ValidationError::Entry {
                index,
                source: Box::new(source),
            })?;
        }

        Ok(())
    }

    /// Sort entries into display order. Stable, so equal indices keep
    /// their relative order.
    pub fn sort_entries(&mut self) {
        self.entries.sort_by_key(|entry| entry.order_index);
    }
}

impl WorkoutEntry {
    /// The entry's measure, or `None` when reps and duration are both
    /// set or both missing.
    pub fn measure(&self) -> Option<Measure> {
        match (self.reps, self.duration_seconds) {
            (Some(reps), None) => Some(Measure::Reps(reps)),
            (None, Some(seconds)) => Some(Measure::Duration { seconds }),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.exercise_name.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "exercise_name",
            });
        }
        if self.exercise_name.chars().count() > MAX_EXERCISE_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "exercise_name",
                max: MAX_EXERCISE_NAME_LEN,
            });
        }

        if self.sets <= 0 {
            return Err(ValidationError::OutOfRange {
                field: "sets",
                reason: "must be greater than zero",
            });
        }

        match self.measure() {
            None => {
                return Err(ValidationError::ExactlyOneOf {
                    first: "reps",
                    second: "duration_seconds",
                })
            }
            Some(Measure::Reps(reps)) if reps <= 0 => {
                return Err(ValidationError::OutOfRange {
                    field: "reps",
                    reason: "must be greater than zero",
                })
            }
            Some(Measure::Duration { seconds }) if seconds <= 0 => {
                return Err(ValidationError::OutOfRange {
                    field: "duration_seconds",
                    reason: "must be greater than zero",
                })
            }
            Some(_) => {}
        }

        if let Some(weight) = self.weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ValidationError::OutOfRange {
                    field: "weight",
                    reason: "must be a non-negative number",
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bench_press() -> WorkoutEntry {
        WorkoutEntry {
            id: 0,
            exercise_name: "Bench Press".into(),
            sets: 3,
            reps: Some(10),
            duration_seconds: None,
            weight: Some(135.5),
            notes: "warm up properly".into(),
            order_index: 1,
        }
    }

    fn plank() -> WorkoutEntry {
        WorkoutEntry {
            id: 0,
            exercise_name: "Plank".into(),
            sets: 4,
            reps: None,
            duration_seconds: Some(60),
            weight: None,
            notes: "keep form".into(),
            order_index: 2,
        }
    }

    fn morning_routine() -> Workout {
        Workout {
            id: 0,
            title: "Morning Routine".into(),
            description: "A quick morning workout".into(),
            duration_minutes: 60,
            calories_burned: 200,
            entries: vec![bench_press(), plank()],
        }
    }

    #[test]
    fn valid_workout() {
        assert!(morning_routine().validate().is_ok());
    }

    #[test]
    fn rejects_blank_title() {
        let mut workout = morning_routine();
        workout.title = "   ".into();
        assert_eq!(
            workout.validate().unwrap_err(),
            ValidationError::Empty { field: "title" }
        );
    }

    #[test]
    fn title_max_length() {
        let mut workout = morning_routine();
        workout.title = "a".repeat(255);
        assert!(workout.validate().is_ok());

        workout.title = "a".repeat(256);
        assert!(matches!(
            workout.validate().unwrap_err(),
            ValidationError::TooLong { max: 255, .. }
        ));
    }

    #[test]
    fn length_limits_count_surrounding_whitespace() {
        let mut workout = morning_routine();
        workout.title = format!(" {}", "a".repeat(255));
        assert!(matches!(
            workout.validate().unwrap_err(),
            ValidationError::TooLong { field: "title", .. }
        ));

        let mut workout = morning_routine();
        workout.entries[0].exercise_name = format!("{} ", "b".repeat(255));
        assert!(matches!(
            workout.validate().unwrap_err(),
            ValidationError::Entry { index: 0, source }
                if matches!(*source, ValidationError::TooLong { field: "exercise_name", .. })
        ));
    }

    #[test]
    fn rejects_non_positive_duration() {
        let mut workout = morning_routine();
        workout.duration_minutes = 0;
        assert!(matches!(
            workout.validate().unwrap_err(),
            ValidationError::OutOfRange {
                field: "duration_minutes",
                ..
            }
        ));
    }

    #[test]
    fn rejects_negative_calories() {
        let mut workout = morning_routine();
        workout.calories_burned = -1;
        assert!(matches!(
            workout.validate().unwrap_err(),
            ValidationError::OutOfRange {
                field: "calories_burned",
                ..
            }
        ));
    }

    #[test]
    fn rejects_reps_and_duration_together() {
        let mut workout = morning_routine();
        workout.entries[1].reps = Some(12);

        let err = workout.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::Entry {
                index: 1,
                source: Box::new(ValidationError::ExactlyOneOf {
                    first: "reps",
                    second: "duration_seconds",
                }),
            }
        );
    }

    #[test]
    fn rejects_entry_without_measure() {
        let mut entry = bench_press();
        entry.reps = None;
        assert!(matches!(
            entry.validate().unwrap_err(),
            ValidationError::ExactlyOneOf { .. }
        ));
    }

    #[test]
    fn rejects_zero_sets() {
        let mut entry = plank();
        entry.sets = 0;
        assert!(matches!(
            entry.validate().unwrap_err(),
            ValidationError::OutOfRange { field: "sets", .. }
        ));
    }

    #[test]
    fn rejects_negative_weight() {
        let mut entry = bench_press();
        entry.weight = Some(-5.0);
        assert!(matches!(
            entry.validate().unwrap_err(),
            ValidationError::OutOfRange { field: "weight", .. }
        ));

        entry.weight = Some(f64::NAN);
        assert!(entry.validate().is_err());
    }

    #[test]
    fn measure_of_entries() {
        assert_eq!(bench_press().measure(), Some(Measure::Reps(10)));
        assert_eq!(plank().measure(), Some(Measure::Duration { seconds: 60 }));

        let mut both = bench_press();
        both.duration_seconds = Some(30);
        assert_eq!(both.measure(), None);
    }

    #[test]
    fn sort_entries_by_order_index() {
        let mut workout = morning_routine();
        workout.entries[0].order_index = 5;
        workout.sort_entries();
        assert_eq!(workout.entries[0].exercise_name, "Plank");
        assert_eq!(workout.entries[1].exercise_name, "Bench Press");
    }

    #[test]
    fn deserializes_minimal_payload() {
        let workout: Workout = serde_json::from_str(
            r#"{
                "title": "Morning Routine",
                "duration_minutes": 60,
                "calories_burned": 200,
                "entries": [
                    {"exercise_name": "Bench Press", "sets": 3, "reps": 10, "weight": 135.5, "order_index": 1}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(workout.id, 0);
        assert_eq!(workout.description, "");
        assert_eq!(workout.entries.len(), 1);
        assert_eq!(workout.entries[0].reps, Some(10));
        assert_eq!(workout.entries[0].duration_seconds, None);
        assert_eq!(workout.entries[0].weight, Some(135.5));
    }

    #[test]
    fn omits_absent_optionals_when_serialized() {
        let json = serde_json::to_value(plank()).unwrap();
        assert_eq!(json["duration_seconds"], 60);
        assert!(json.get("reps").is_none());
        assert!(json.get("weight").is_none());
    }
}
