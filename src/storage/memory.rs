// ABOUTME: In-memory training store using sharded concurrent maps keyed by user
// ABOUTME: Context updates run under the map's entry lock, giving per-user serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use cyclecoach_core::errors::{AppError, AppResult};
use cyclecoach_core::models::{SessionContext, SessionContextUpdate, WorkoutRecord};
use cyclecoach_intelligence::{exercise_history, most_recent_first};

use super::TrainingStore;

/// Process-local store; clones share the same maps
#[derive(Debug, Clone, Default)]
pub struct InMemoryTrainingStore {
    workouts: Arc<DashMap<Uuid, Vec<WorkoutRecord>>>,
    contexts: Arc<DashMap<Uuid, SessionContext>>,
}

impl InMemoryTrainingStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with at least one stored record
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.workouts.len()
    }
}

#[async_trait]
impl TrainingStore for InMemoryTrainingStore {
    async fn append_workout(&self, record: WorkoutRecord) -> AppResult<()> {
        let mut records = self.workouts.entry(record.user_id).or_default();
        if records.iter().any(|existing| existing.id == record.id) {
            return Err(AppError::already_exists(format!("Workout record {}", record.id))
                .with_user_id(record.user_id));
        }
        debug!(user_id = %record.user_id, exercise = %record.exercise_name, "Appending workout");
        records.push(record);
        Ok(())
    }

    async fn workouts_for_user(&self, user_id: Uuid) -> AppResult<Vec<WorkoutRecord>> {
        Ok(self
            .workouts
            .get(&user_id)
            .map(|records| most_recent_first(&records))
            .unwrap_or_default())
    }

    async fn workouts_for_exercise(
        &self,
        user_id: Uuid,
        exercise: &str,
    ) -> AppResult<Vec<WorkoutRecord>> {
        Ok(self
            .workouts
            .get(&user_id)
            .map(|records| exercise_history(&records, exercise))
            .unwrap_or_default())
    }

    async fn session_context(&self, user_id: Uuid) -> AppResult<SessionContext> {
        let ctx = self
            .contexts
            .entry(user_id)
            .or_insert_with(|| SessionContext::new(user_id, Utc::now()));
        Ok(ctx.clone())
    }

    async fn update_session_context(
        &self,
        user_id: Uuid,
        update: SessionContextUpdate,
    ) -> AppResult<SessionContext> {
        let mut entry = self
            .contexts
            .entry(user_id)
            .or_insert_with(|| SessionContext::new(user_id, Utc::now()));
        let updated = entry.clone().apply(update, Utc::now());
        *entry = updated.clone();
        debug!(
            user_id = %user_id,
            cycle = updated.cycle_number,
            session = updated.session_number,
            "Session context updated"
        );
        Ok(updated)
    }
}
