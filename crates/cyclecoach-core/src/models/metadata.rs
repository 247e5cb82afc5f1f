// ABOUTME: Machine-readable metadata payload embedded between marker lines in generated prompts
// ABOUTME: camelCase wire format; unknown keys are ignored so older and newer payloads both parse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Difficulty;

/// Relative development of a muscle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceRating {
    /// Trained noticeably less than average
    Weak,
    /// Within the normal band
    #[default]
    Normal,
    /// Trained noticeably more than average
    Strong,
}

/// Rating per fixed muscle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MuscleGroupBalance {
    /// Chest
    pub chest: BalanceRating,
    /// Back
    pub back: BalanceRating,
    /// Shoulders
    pub shoulders: BalanceRating,
    /// Arms
    pub arms: BalanceRating,
    /// Legs
    pub legs: BalanceRating,
}

/// Most recent logged performance for a planned exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastPerformance {
    /// Weight used
    pub weight: f64,
    /// Reps per set
    pub reps: u32,
    /// Sets completed
    pub sets: u32,
    /// Reported difficulty
    pub difficulty: Difficulty,
    /// Calendar date of the record
    pub date: NaiveDate,
}

/// One planned exercise with its targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTarget {
    /// Exercise name
    pub name: String,
    /// Recommended working weight
    pub target_weight: f64,
    /// Target reps per set
    pub target_reps: u32,
    /// Target number of sets
    pub target_sets: u32,
    /// Last logged performance, `null` when never performed
    pub last_performance: Option<LastPerformance>,
}

/// Structured payload embedded in every generated prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptMetadata {
    /// Session slot the prompt was generated for
    pub session_number: u32,
    /// Title of that slot
    pub session_name: String,
    /// Generation date
    pub date: NaiveDate,
    /// Planned exercises with targets
    pub exercises: Vec<ExerciseTarget>,
    /// Muscle group ratings
    pub muscle_balance: MuscleGroupBalance,
    /// Coaching recommendations
    pub recommendations: Vec<String>,
    /// Session slot that follows
    pub next_session: u32,
    /// Position within the cycle, formatted `n/8`
    pub cycle_progress: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_camel_case() {
        let metadata = PromptMetadata {
            session_number: 3,
            session_name: "Lower Body Strength".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            exercises: vec![ExerciseTarget {
                name: "Back Squat".to_owned(),
                target_weight: 100.0,
                target_reps: 5,
                target_sets: 5,
                last_performance: None,
            }],
            muscle_balance: MuscleGroupBalance::default(),
            recommendations: vec![],
            next_session: 4,
            cycle_progress: "3/8".to_owned(),
        };
        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["sessionNumber"], 3);
        assert_eq!(value["date"], "2025-03-14");
        assert_eq!(value["exercises"][0]["targetWeight"], 100.0);
        assert!(value["exercises"][0]["lastPerformance"].is_null());
        assert_eq!(value["muscleBalance"]["legs"], "normal");
        assert_eq!(value["cycleProgress"], "3/8");
    }
}
