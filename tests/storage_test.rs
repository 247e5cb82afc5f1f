// ABOUTME: Integration tests for the in-memory training store
// ABOUTME: Covers record ordering, exercise filtering, lazy context creation, and concurrent updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use cyclecoach::errors::ErrorCode;
use cyclecoach::models::{CycleState, Measurements, SessionContextUpdate};
use cyclecoach::session::advance;
use cyclecoach::storage::{InMemoryTrainingStore, TrainingStore};
use uuid::Uuid;

use common::simple_record;

#[tokio::test]
async fn test_workouts_returned_most_recent_first() {
    common::init_test_logging();
    let store = InMemoryTrainingStore::new();
    let user = Uuid::new_v4();
    for days_ago in [5, 1, 3] {
        store
            .append_workout(simple_record(user, "Bench Press", 60.0, 8, days_ago))
            .await
            .unwrap();
    }

    let records = store.workouts_for_user(user).await.unwrap();
    let timestamps: Vec<_> = records.iter().map(|record| record.timestamp).collect();
    let mut sorted = timestamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted);
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn test_users_are_isolated() {
    let store = InMemoryTrainingStore::new();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    store
        .append_workout(simple_record(alice, "Row", 50.0, 10, 1))
        .await
        .unwrap();

    assert!(store.workouts_for_user(bob).await.unwrap().is_empty());
    assert_eq!(store.workouts_for_user(alice).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_workouts_for_exercise_is_case_insensitive() {
    let store = InMemoryTrainingStore::new();
    let user = Uuid::new_v4();
    store
        .append_workout(simple_record(user, "Back Squat", 100.0, 5, 2))
        .await
        .unwrap();
    store
        .append_workout(simple_record(user, "Bench Press", 60.0, 8, 1))
        .await
        .unwrap();

    let squats = store.workouts_for_exercise(user, "back squat").await.unwrap();
    assert_eq!(squats.len(), 1);
    assert_eq!(squats[0].exercise_name, "Back Squat");
}

#[tokio::test]
async fn test_duplicate_record_is_rejected() {
    let store = InMemoryTrainingStore::new();
    let record = simple_record(Uuid::new_v4(), "Row", 50.0, 10, 1);
    store.append_workout(record.clone()).await.unwrap();
    let error = store.append_workout(record).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_context_created_on_first_access() {
    let store = InMemoryTrainingStore::new();
    let user = Uuid::new_v4();
    let ctx = store.session_context(user).await.unwrap();
    assert_eq!(ctx.user_id, user);
    assert_eq!(ctx.state(), CycleState::new(1, 1));
    assert_eq!(store.session_context(user).await.unwrap(), ctx);
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let store = InMemoryTrainingStore::new();
    let user = Uuid::new_v4();
    let before = store.session_context(user).await.unwrap();

    let measurements = Measurements {
        body_weight: Some(81.2),
        ..Measurements::default()
    };
    store
        .update_session_context(
            user,
            SessionContextUpdate {
                measurements: Some(measurements),
                ..SessionContextUpdate::default()
            },
        )
        .await
        .unwrap();
    let after = store
        .update_session_context(user, SessionContextUpdate::position(CycleState::new(1, 4)))
        .await
        .unwrap();

    assert_eq!(after.session_number, 4);
    assert_eq!(after.measurements, Some(measurements));
    assert!(after.last_activity >= before.last_activity);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_share_one_store() {
    let store = Arc::new(InMemoryTrainingStore::new());
    let user = Uuid::new_v4();

    let mut handles = Vec::new();
    for day in 0..16 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .append_workout(simple_record(user, "Deadlift", 120.0, 5, day))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.workouts_for_user(user).await.unwrap().len(), 16);
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn test_repeated_advances_through_the_store() {
    let store = InMemoryTrainingStore::new();
    let user = Uuid::new_v4();

    for _ in 0..10 {
        let current = store.session_context(user).await.unwrap();
        store
            .update_session_context(user, SessionContextUpdate::position(advance(current.state())))
            .await
            .unwrap();
    }
    // Seven steps finish cycle 1, three more land on session 3 of cycle 2
    assert_eq!(
        store.session_context(user).await.unwrap().state(),
        CycleState::new(2, 3)
    );
}
