// ABOUTME: Session context model - the single persisted record per user driving the cycle
// ABOUTME: Partial-update semantics: absent fields keep prior values, last activity always refreshes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::WorkoutRecord;
use crate::constants::cycle::{INITIAL_CYCLE, INITIAL_SESSION, SESSIONS_PER_CYCLE};

/// Position within the infinite session cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CycleState {
    /// Cycle counter, starting at 1
    pub cycle_number: u32,
    /// Session slot within the cycle, 1 through 8
    pub session_number: u32,
}

impl CycleState {
    /// Create a state from raw numbers
    #[must_use]
    pub const fn new(cycle_number: u32, session_number: u32) -> Self {
        Self {
            cycle_number,
            session_number,
        }
    }
}

impl Default for CycleState {
    fn default() -> Self {
        Self::new(INITIAL_CYCLE, INITIAL_SESSION)
    }
}

/// Latest body measurements snapshot
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurements {
    /// Body weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_weight: Option<f64>,
    /// Body fat percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,
    /// Muscle mass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<f64>,
}

/// Persisted per-user session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Owner
    pub user_id: Uuid,
    /// Cycle counter, at least 1
    pub cycle_number: u32,
    /// Current session slot, 1 through 8
    pub session_number: u32,
    /// Refreshed on every mutation
    pub last_activity: DateTime<Utc>,
    /// Latest measurements
    #[serde(default)]
    pub measurements: Option<Measurements>,
    /// Cumulative performance log
    #[serde(default)]
    pub performance: Vec<WorkoutRecord>,
}

/// Partial update for a [`SessionContext`]; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContextUpdate {
    /// New cycle number
    #[serde(default)]
    pub cycle_number: Option<u32>,
    /// New session number
    #[serde(default)]
    pub session_number: Option<u32>,
    /// Replacement measurements snapshot
    #[serde(default)]
    pub measurements: Option<Measurements>,
    /// Replacement performance log
    #[serde(default)]
    pub performance: Option<Vec<WorkoutRecord>>,
}

impl SessionContextUpdate {
    /// Update that only moves the cycle position
    #[must_use]
    pub const fn position(state: CycleState) -> Self {
        Self {
            cycle_number: Some(state.cycle_number),
            session_number: Some(state.session_number),
            measurements: None,
            performance: None,
        }
    }
}

impl SessionContext {
    /// Fresh context at cycle 1, session 1
    #[must_use]
    pub fn new(user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            cycle_number: INITIAL_CYCLE,
            session_number: INITIAL_SESSION,
            last_activity: now,
            measurements: None,
            performance: Vec::new(),
        }
    }

    /// Current cycle position
    #[must_use]
    pub const fn state(&self) -> CycleState {
        CycleState::new(self.cycle_number, self.session_number)
    }

    /// Apply a partial update, always refreshing `last_activity`.
    ///
    /// The cycle number is floored at 1 and the session number wrapped into
    /// 1..=8 (0 becomes 1).
    #[must_use]
    pub fn apply(mut self, update: SessionContextUpdate, now: DateTime<Utc>) -> Self {
        if let Some(cycle_number) = update.cycle_number {
            self.cycle_number = cycle_number.max(INITIAL_CYCLE);
        }
        if let Some(session_number) = update.session_number {
            self.session_number = match session_number {
                0 => INITIAL_SESSION,
                n => (n - 1) % SESSIONS_PER_CYCLE + 1,
            };
        }
        if let Some(measurements) = update.measurements {
            self.measurements = Some(measurements);
        }
        if let Some(performance) = update.performance {
            self.performance = performance;
        }
        self.last_activity = now;
        self
    }
}
