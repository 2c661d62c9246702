//! In-memory workout store
//!
//! Mirrors the PostgreSQL store: sequential ids, entries kept in
//! `order_index` order, entries replaced wholesale on update, and an
//! entry without exactly one measure rejects the whole write. Nothing
//! survives a restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::db::store::{first_invalid_entry, StoreError, WorkoutStore};
use crate::models::{Workout, WorkoutEntry};

#[derive(Default)]
struct Inner {
    workouts: BTreeMap<i64, Workout>,
    last_workout_id: i64,
    last_entry_id: i64,
}

impl Inner {
    fn assign_entry_ids(&mut self, entries: &mut [WorkoutEntry]) {
        for entry in entries.iter_mut() {
            self.last_entry_id += 1;
            entry.id = self.last_entry_id;
        }
    }

    /// Store the aggregate with entries sorted by `order_index`. Ids are
    /// assigned before sorting, so they follow submission order.
    fn save(&mut self, workout: &mut Workout) {
        workout.sort_entries();
        self.workouts.insert(workout.id, workout.clone());
    }
}

/// Workout store held in process memory
#[derive(Default)]
pub struct MemoryWorkoutStore {
    inner: Mutex<Inner>,
}

impl MemoryWorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored workouts
    pub async fn len(&self) -> usize {
        self.inner.lock().await.workouts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl WorkoutStore for MemoryWorkoutStore {
    async fn create_workout(&self, mut workout: Workout) -> Result<Workout, StoreError> {
        if let Some(index) = first_invalid_entry(&workout) {
            return Err(StoreError::InvalidEntry { index });
        }

        let mut inner = self.inner.lock().await;

        inner.last_workout_id += 1;
        workout.id = inner.last_workout_id;
        inner.assign_entry_ids(&mut workout.entries);
        inner.save(&mut workout);

        tracing::debug!(workout_id = workout.id, "workout created in memory");
        Ok(workout)
    }

    async fn get_workout_by_id(&self, id: i64) -> Result<Option<Workout>, StoreError> {
        Ok(self.inner.lock().await.workouts.get(&id).cloned())
    }

    async fn update_workout(&self, mut workout: Workout) -> Result<Workout, StoreError> {
        let mut inner = self.inner.lock().await;

        if !inner.workouts.contains_key(&workout.id) {
            return Err(StoreError::NotFound { id: workout.id });
        }
        if let Some(index) = first_invalid_entry(&workout) {
            return Err(StoreError::InvalidEntry { index });
        }

        inner.assign_entry_ids(&mut workout.entries);
        inner.save(&mut workout);
        Ok(workout)
    }

    async fn delete_workout(&self, id: i64) -> Result<(), StoreError> {
        self.inner
            .lock()
            .await
            .workouts
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }
}
