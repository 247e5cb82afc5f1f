// ABOUTME: Session cycle state machine over (cycle, session) pairs with an eight-slot period
// ABOUTME: Pure functions: normalization never panics and advancing wraps into the next cycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cyclecoach_core::constants::cycle::SESSIONS_PER_CYCLE;
use cyclecoach_core::models::CycleState;

use super::catalog::{PlannedExercise, SessionSlot, SESSION_SLOTS};

/// Map any session number onto a slot in `1..=8`.
///
/// Numbers above 8 wrap (`9 -> 1`); zero and negatives fall back to slot 1.
#[must_use]
pub fn normalize_session(session_number: i64) -> u32 {
    if session_number < 1 {
        return 1;
    }
    let period = i64::from(SESSIONS_PER_CYCLE);
    // Result is within 1..=8
    u32::try_from((session_number - 1) % period + 1).unwrap_or(1)
}

/// Next position in the cycle; session 8 (or anything beyond) rolls over
#[must_use]
pub const fn advance(state: CycleState) -> CycleState {
    if state.session_number >= SESSIONS_PER_CYCLE {
        CycleState::new(state.cycle_number.saturating_add(1), 1)
    } else {
        CycleState::new(state.cycle_number, state.session_number + 1)
    }
}

/// Slot number that follows `session_number`
#[must_use]
pub fn next_session_number(session_number: i64) -> u32 {
    normalize_session(i64::from(normalize_session(session_number)) + 1)
}

/// Position label such as `"3/8"`
#[must_use]
pub fn cycle_progress(session_number: i64) -> String {
    format!("{}/{SESSIONS_PER_CYCLE}", normalize_session(session_number))
}

/// True on the last slot, when the next advance starts a new cycle
#[must_use]
pub const fn is_cycle_complete(state: CycleState) -> bool {
    state.session_number >= SESSIONS_PER_CYCLE
}

/// Content slot for a possibly out-of-range session number
#[must_use]
pub fn session_slot(session_number: i64) -> &'static SessionSlot {
    let index = normalize_session(session_number) as usize - 1;
    &SESSION_SLOTS[index]
}

/// Title of the slot for `session_number`
#[must_use]
pub fn session_title(session_number: i64) -> &'static str {
    session_slot(session_number).title
}

/// Planned exercises of the slot for `session_number`
#[must_use]
pub fn session_exercises(session_number: i64) -> &'static [PlannedExercise] {
    session_slot(session_number).exercises
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_wraps_and_clamps() {
        assert_eq!(normalize_session(1), 1);
        assert_eq!(normalize_session(8), 8);
        assert_eq!(normalize_session(9), 1);
        assert_eq!(normalize_session(17), 1);
        assert_eq!(normalize_session(0), 1);
        assert_eq!(normalize_session(-5), 1);
        assert_eq!(normalize_session(i64::MAX), normalize_session(i64::MAX));
    }

    #[test]
    fn test_next_session_wraps() {
        assert_eq!(next_session_number(3), 4);
        assert_eq!(next_session_number(8), 1);
        assert_eq!(next_session_number(0), 2);
    }

    #[test]
    fn test_cycle_progress_label() {
        assert_eq!(cycle_progress(3), "3/8");
        assert_eq!(cycle_progress(12), "4/8");
    }
}
