// ABOUTME: Session cycle tracker: eight fixed content slots repeated in an endless cycle
// ABOUTME: Exposes slot lookup, cycle advancement, and session completion on persisted contexts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Static slot content
pub mod catalog;

/// Session context transitions
pub mod context;

/// Pure cycle state machine
pub mod cycle;

pub use catalog::{PlannedExercise, SessionSlot, SESSION_SLOTS};
pub use context::SessionCycle;
pub use cycle::{
    advance, cycle_progress, is_cycle_complete, next_session_number, normalize_session,
    session_exercises, session_slot, session_title,
};
