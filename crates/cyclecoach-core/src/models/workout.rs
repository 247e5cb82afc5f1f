// ABOUTME: Workout record model - one completed set-group for one exercise
// ABOUTME: Includes the perceived difficulty enum and a validating builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Perceived difficulty the user reported for a set-group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// All reps completed with room to spare
    Easy,
    /// Challenging but controlled
    Moderate,
    /// At or near failure
    Hard,
}

impl Difficulty {
    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "moderate" | "medium" => Ok(Self::Moderate),
            "hard" => Ok(Self::Hard),
            other => Err(AppError::invalid_input(format!(
                "Unknown difficulty '{other}', expected easy, moderate or hard"
            ))),
        }
    }
}

/// One completed set-group for one exercise.
///
/// Records are immutable once built and are only ever appended to a user's
/// history; deletion belongs to the storage collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Unique record identifier
    pub id: Uuid,
    /// Exercise name as entered by the user
    pub exercise_name: String,
    /// Load lifted, unit-agnostic
    pub weight: f64,
    /// Repetitions per set (at least 1)
    pub reps: u32,
    /// Number of sets (at least 1)
    pub sets: u32,
    /// Perceived difficulty
    pub difficulty: Difficulty,
    /// When the set-group was completed
    pub timestamp: DateTime<Utc>,
    /// Owner of the record
    pub user_id: Uuid,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutRecord {
    /// Training volume of a single set: `weight × reps`
    #[must_use]
    pub fn set_volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }

    /// Total session volume: `weight × reps × sets`
    #[must_use]
    pub fn session_volume(&self) -> f64 {
        self.set_volume() * f64::from(self.sets)
    }

    /// Case-insensitive exercise name comparison
    #[must_use]
    pub fn is_exercise(&self, name: &str) -> bool {
        self.exercise_name.trim().eq_ignore_ascii_case(name.trim())
    }
}

/// Builder for [`WorkoutRecord`] that validates on `build()`
#[derive(Debug, Clone)]
pub struct WorkoutRecordBuilder {
    record: WorkoutRecord,
}

impl WorkoutRecordBuilder {
    /// Creates a builder with the required fields; defaults to one set of
    /// moderate difficulty completed now
    #[must_use]
    pub fn new(user_id: Uuid, exercise_name: impl Into<String>, weight: f64, reps: u32) -> Self {
        Self {
            record: WorkoutRecord {
                id: Uuid::new_v4(),
                exercise_name: exercise_name.into(),
                weight,
                reps,
                sets: 1,
                difficulty: Difficulty::Moderate,
                timestamp: Utc::now(),
                user_id,
                notes: None,
            },
        }
    }

    /// Sets the number of sets
    #[must_use]
    pub const fn sets(mut self, sets: u32) -> Self {
        self.record.sets = sets;
        self
    }

    /// Sets the perceived difficulty
    #[must_use]
    pub const fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.record.difficulty = difficulty;
        self
    }

    /// Sets the completion timestamp
    #[must_use]
    pub const fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.record.timestamp = timestamp;
        self
    }

    /// Sets free-form notes
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.record.notes = Some(notes.into());
        self
    }

    /// Overrides the generated record identifier
    #[must_use]
    pub const fn id(mut self, id: Uuid) -> Self {
        self.record.id = id;
        self
    }

    /// Validates and returns the record
    ///
    /// # Errors
    ///
    /// Returns an error if the exercise name is blank, reps or sets are zero,
    /// or the weight is negative or not finite
    pub fn build(self) -> AppResult<WorkoutRecord> {
        let record = self.record;
        if record.exercise_name.trim().is_empty() {
            return Err(AppError::missing_field("exercise_name"));
        }
        if record.reps == 0 {
            return Err(AppError::out_of_range("reps must be at least 1"));
        }
        if record.sets == 0 {
            return Err(AppError::out_of_range("sets must be at least 1"));
        }
        if !record.weight.is_finite() || record.weight < 0.0 {
            return Err(AppError::out_of_range(format!(
                "weight must be a non-negative number, got {}",
                record.weight
            )));
        }
        Ok(record)
    }
}
