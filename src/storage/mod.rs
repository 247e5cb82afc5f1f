// ABOUTME: Persistence collaborator abstraction for workout records and session contexts
// ABOUTME: Async trait so hosts can back it with any store; an in-memory implementation is provided
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use uuid::Uuid;

use cyclecoach_core::errors::AppResult;
use cyclecoach_core::models::{SessionContext, SessionContextUpdate, WorkoutRecord};

/// `DashMap` backed store for tests and the CLI
pub mod memory;

pub use memory::InMemoryTrainingStore;

/// Storage operations the engine relies on.
///
/// Implementations must serialize context updates per user: at most one
/// read-modify-write of a given user's context is in flight at a time.
#[async_trait]
pub trait TrainingStore: Send + Sync {
    /// Append an immutable workout record
    async fn append_workout(&self, record: WorkoutRecord) -> AppResult<()>;

    /// All records of a user, most recent first
    async fn workouts_for_user(&self, user_id: Uuid) -> AppResult<Vec<WorkoutRecord>>;

    /// Records of one exercise (case-insensitive), most recent first
    async fn workouts_for_exercise(
        &self,
        user_id: Uuid,
        exercise: &str,
    ) -> AppResult<Vec<WorkoutRecord>>;

    /// Session context, created at cycle 1 session 1 on first access
    async fn session_context(&self, user_id: Uuid) -> AppResult<SessionContext>;

    /// Apply a partial update and return the stored result
    async fn update_session_context(
        &self,
        user_id: Uuid,
        update: SessionContextUpdate,
    ) -> AppResult<SessionContext>;
}
