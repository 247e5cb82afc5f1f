// ABOUTME: Session context transitions built on the pure cycle state machine
// ABOUTME: Completing a session appends its records, advances the position, and refreshes activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use tracing::debug;

use cyclecoach_core::models::{SessionContext, SessionContextUpdate, WorkoutRecord};

use super::cycle::{advance, normalize_session};

/// Cycle transitions on a persisted [`SessionContext`]
pub trait SessionCycle: Sized {
    /// Update moving the context to its next session
    fn advance_update(&self) -> SessionContextUpdate;

    /// Record a finished session: append `records` to the performance log and advance
    #[must_use]
    fn complete_session(self, records: Vec<WorkoutRecord>, now: DateTime<Utc>) -> Self;
}

impl SessionCycle for SessionContext {
    fn advance_update(&self) -> SessionContextUpdate {
        let mut state = self.state();
        state.session_number = normalize_session(i64::from(state.session_number));
        SessionContextUpdate::position(advance(state))
    }

    fn complete_session(self, records: Vec<WorkoutRecord>, now: DateTime<Utc>) -> Self {
        let mut update = self.advance_update();
        let mut performance = self.performance.clone();
        performance.extend(records);
        update.performance = Some(performance);

        debug!(
            user_id = %self.user_id,
            from_session = self.session_number,
            to_session = ?update.session_number,
            "Completing session"
        );
        self.apply(update, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclecoach_core::models::{CycleState, WorkoutRecordBuilder};
    use uuid::Uuid;

    #[test]
    fn test_complete_session_appends_and_advances() {
        let user_id = Uuid::new_v4();
        let start = Utc::now();
        let record = WorkoutRecordBuilder::new(user_id, "Bench Press", 60.0, 8)
            .build()
            .unwrap();

        let ctx = SessionContext::new(user_id, start);
        let later = start + chrono::Duration::hours(1);
        let ctx = ctx.complete_session(vec![record.clone()], later);

        assert_eq!(ctx.state(), CycleState::new(1, 2));
        assert_eq!(ctx.performance, vec![record]);
        assert_eq!(ctx.last_activity, later);
    }

    #[test]
    fn test_completing_last_slot_starts_new_cycle() {
        let ctx = SessionContext {
            session_number: 8,
            ..SessionContext::new(Uuid::new_v4(), Utc::now())
        };
        let ctx = ctx.complete_session(Vec::new(), Utc::now());
        assert_eq!(ctx.state(), CycleState::new(2, 1));
    }
}
