// ABOUTME: Integration tests for the session cycle tracker
// ABOUTME: Validates normalization, advancement across cycle boundaries, and slot lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use cyclecoach::models::{CycleState, SessionContext, SessionContextUpdate};
use cyclecoach::session::{
    advance, cycle_progress, is_cycle_complete, next_session_number, normalize_session,
    session_exercises, session_title, SessionCycle, SESSION_SLOTS,
};
use uuid::Uuid;

#[test]
fn test_advance_within_cycle() {
    assert_eq!(advance(CycleState::new(1, 1)), CycleState::new(1, 2));
    assert_eq!(advance(CycleState::new(4, 7)), CycleState::new(4, 8));
}

#[test]
fn test_advance_wraps_to_next_cycle() {
    assert_eq!(advance(CycleState::new(1, 8)), CycleState::new(2, 1));
    assert_eq!(advance(CycleState::new(3, 12)), CycleState::new(4, 1));
}

#[test]
fn test_eight_advances_complete_one_cycle() {
    let start = CycleState::new(5, 1);
    let end = (0..8).fold(start, |state, _| advance(state));
    assert_eq!(end, CycleState::new(6, 1));
}

#[test]
fn test_normalization_for_out_of_range_sessions() {
    assert_eq!(normalize_session(9), 1);
    assert_eq!(normalize_session(16), 8);
    assert_eq!(normalize_session(0), 1);
    assert_eq!(normalize_session(-3), 1);
    for n in 1..=8 {
        assert_eq!(normalize_session(n), n as u32);
    }
}

#[test]
fn test_slot_lookup_uses_normalized_number() {
    assert_eq!(session_title(9), session_title(1));
    assert_eq!(session_title(-1), SESSION_SLOTS[0].title);
    assert_eq!(session_exercises(10), SESSION_SLOTS[1].exercises);
}

#[test]
fn test_progress_helpers() {
    assert_eq!(cycle_progress(1), "1/8");
    assert_eq!(cycle_progress(8), "8/8");
    assert_eq!(next_session_number(7), 8);
    assert_eq!(next_session_number(8), 1);
    assert!(is_cycle_complete(CycleState::new(2, 8)));
    assert!(!is_cycle_complete(CycleState::new(2, 7)));
}

#[test]
fn test_advance_update_is_partial() {
    common::init_test_logging();
    let ctx = common::context_at(Uuid::new_v4(), 1, 8, Vec::new());
    let update = ctx.advance_update();
    assert_eq!(update.cycle_number, Some(2));
    assert_eq!(update.session_number, Some(1));
    assert!(update.measurements.is_none());
    assert!(update.performance.is_none());
}

#[test]
fn test_completing_sessions_accumulates_performance() {
    let user_id = Uuid::new_v4();
    let first = common::simple_record(user_id, "Bench Press", 60.0, 8, 2);
    let second = common::simple_record(user_id, "Back Squat", 90.0, 5, 1);

    let ctx = SessionContext::new(user_id, common::base_time())
        .complete_session(vec![first.clone()], common::base_time())
        .complete_session(vec![second.clone()], common::base_time());

    assert_eq!(ctx.state(), CycleState::new(1, 3));
    assert_eq!(ctx.performance, vec![first, second]);
}

#[test]
fn test_cycle_number_never_drops_below_one() {
    let ctx = SessionContext::new(Uuid::new_v4(), common::base_time()).apply(
        SessionContextUpdate {
            cycle_number: Some(0),
            ..SessionContextUpdate::default()
        },
        common::base_time(),
    );
    assert_eq!(ctx.cycle_number, 1);
}
