// ABOUTME: Derived progress analysis types - never persisted, recomputed on every query
// ABOUTME: Exercise progress, personal records, weight recommendations, and user-level insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::WorkoutRecord;

/// Classification of recent versus older training volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Recent volume more than 5% above the previous window
    Improving,
    /// Recent volume within the stability band
    Maintaining,
    /// Recent volume more than 5% below the previous window
    Declining,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Improving => "improving",
            Self::Maintaining => "maintaining",
            Self::Declining => "declining",
        })
    }
}

/// Best set observed for an exercise, by `weight × reps`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Weight of the record set
    pub weight: f64,
    /// Reps of the record set
    pub reps: u32,
    /// When the record was set; `None` for the zeroed record
    pub date: Option<DateTime<Utc>>,
}

impl PersonalRecord {
    /// `weight × reps` of the record
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// Progress summary for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProgress {
    /// Exercise name as queried
    pub exercise: String,
    /// Matching records, most recent first
    pub history: Vec<WorkoutRecord>,
    /// Best set observed
    pub personal_record: PersonalRecord,
    /// Timestamp of the most recent record
    pub last_workout: Option<DateTime<Utc>>,
    /// Volume trend
    pub trend: Trend,
}

/// Lighter and heavier options around a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightAlternatives {
    /// 90% of the recommendation, rounded
    pub conservative: f64,
    /// 110% of the recommendation, rounded
    pub aggressive: f64,
}

/// Suggested working weight for the next session of an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecommendation {
    /// Exercise name
    pub exercise: String,
    /// Suggested weight, rounded to the nearest integer
    pub recommended_weight: f64,
    /// Human-readable explanation
    pub reasoning: String,
    /// Confidence between 0 and 1
    pub confidence: f64,
    /// Lighter and heavier options
    pub alternatives: WeightAlternatives,
}

/// Overall progress rating for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallProgress {
    /// Many strengths and high frequency
    Excellent,
    /// Solid strengths and frequency
    Good,
    /// Some positive signals
    Moderate,
    /// No data or no positive signals
    NeedsAttention,
}

impl fmt::Display for OverallProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::NeedsAttention => "needs_attention",
        })
    }
}

/// Share of classified workouts per body region, in whole percent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MuscleBalance {
    /// Upper body percentage
    pub upper_body: f64,
    /// Lower body percentage
    pub lower_body: f64,
    /// Core percentage
    pub core: f64,
}

impl MuscleBalance {
    /// Sum of the three shares (100 ± rounding when anything matched)
    #[must_use]
    pub fn total(&self) -> f64 {
        self.upper_body + self.lower_body + self.core
    }
}

/// Training regularity summary
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Consistency {
    /// Average workouts per week, one decimal
    pub workouts_per_week: f64,
    /// Consecutive recent workouts with gaps of at most two days
    pub streak: u32,
    /// Most recent workout
    pub last_workout: Option<DateTime<Utc>>,
}

/// User-scoped aggregate insights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressInsights {
    /// Overall rating
    pub overall_progress: OverallProgress,
    /// Things going well
    pub strengths: Vec<String>,
    /// Things to work on
    pub areas_for_improvement: Vec<String>,
    /// Concrete suggestions
    pub recommendations: Vec<String>,
    /// Upper/lower/core split
    pub muscle_balance: MuscleBalance,
    /// Frequency and streak
    pub consistency: Consistency,
}

/// Inclusive time window for filtering history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Earliest included instant
    pub start: DateTime<Utc>,
    /// Latest included instant
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Create a range from two instants
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Range covering whole UTC calendar days, `to` included up to its last
    /// nanosecond. An open side extends to the earliest or latest instant.
    #[must_use]
    pub fn from_dates(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        let start = from.map_or(DateTime::<Utc>::MIN_UTC, |date| {
            date.and_time(NaiveTime::MIN).and_utc()
        });
        let end = to
            .and_then(|date| date.succ_opt())
            .map_or(DateTime::<Utc>::MAX_UTC, |next| {
                next.and_time(NaiveTime::MIN).and_utc() - Duration::nanoseconds(1)
            });
        Self { start, end }
    }

    /// Whether `instant` falls within the range, bounds included
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}
