// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and workout record, profile, and context builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `cyclecoach`

use std::sync::Once;

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use cyclecoach::models::{
    Difficulty, ExperienceLevel, SessionContext, UserProfile, WorkoutRecord, WorkoutRecordBuilder,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed reference instant so date-dependent assertions are stable
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
}

/// One record `days_ago` days before [`base_time`]
pub fn record(
    user_id: Uuid,
    exercise: &str,
    weight: f64,
    reps: u32,
    sets: u32,
    difficulty: Difficulty,
    days_ago: i64,
) -> WorkoutRecord {
    WorkoutRecordBuilder::new(user_id, exercise, weight, reps)
        .sets(sets)
        .difficulty(difficulty)
        .timestamp(base_time() - Duration::days(days_ago))
        .build()
        .unwrap()
}

/// Moderate 3x`reps` record
pub fn simple_record(user_id: Uuid, exercise: &str, weight: f64, reps: u32, days_ago: i64) -> WorkoutRecord {
    record(user_id, exercise, weight, reps, 3, Difficulty::Moderate, days_ago)
}

/// Profile with every field filled in
pub fn full_profile(user_id: Uuid) -> UserProfile {
    UserProfile {
        age: Some(34),
        body_weight: Some(78.5),
        height_cm: Some(180.0),
        goal: "Build strength for hiking".to_owned(),
        experience: ExperienceLevel::Intermediate,
        training_days_per_week: 4,
        equipment: vec!["barbell".to_owned(), "dumbbells".to_owned()],
        limitations: Some("Old left knee injury".to_owned()),
        ..UserProfile::new(user_id, "Jordan")
    }
}

/// Context at `session_number` carrying `performance`
pub fn context_at(
    user_id: Uuid,
    cycle_number: u32,
    session_number: u32,
    performance: Vec<WorkoutRecord>,
) -> SessionContext {
    SessionContext {
        cycle_number,
        session_number,
        performance,
        ..SessionContext::new(user_id, base_time())
    }
}
