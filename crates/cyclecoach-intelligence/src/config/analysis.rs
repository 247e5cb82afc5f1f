// ABOUTME: Tunable thresholds for trend, consistency, balance, and weight progression analysis
// ABOUTME: Defaults reproduce the established coaching heuristics; env vars may override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progress Analysis Configuration
//!
//! Every magic number used by the analysis engine lives here. The defaults are
//! the values users have been receiving recommendations from; changing them
//! changes observable output.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use cyclecoach_core::constants::defaults::{FIRST_TIME_CONFIDENCE, FIRST_TIME_WEIGHT};

/// Root configuration for the analysis engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Volume trend classification
    pub trend: TrendConfig,
    /// Frequency and streak rules
    pub consistency: ConsistencyConfig,
    /// Muscle balance rules
    pub balance: BalanceConfig,
    /// Weight progression rules
    pub progression: ProgressionConfig,
    /// Overall progress decision table
    pub overall: OverallProgressConfig,
}

/// Volume trend classification thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Records per comparison window (recent vs the window before it)
    pub window_size: usize,
    /// Recent average must exceed `older × factor` to count as improving
    pub improving_factor: f64,
    /// Recent average below `older × factor` counts as declining
    pub declining_factor: f64,
}

/// Frequency and streak thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyConfig {
    /// Maximum gap between consecutive workouts that keeps a streak alive
    pub streak_max_gap_days: i64,
    /// Weekly frequency at or above which consistency is a strength
    pub strong_weekly_frequency: f64,
    /// Streak length at or above which the streak is a strength
    pub strong_streak: u32,
    /// Minimum records for an exercise before its trend is reported
    pub min_records_for_exercise_trend: usize,
}

/// Muscle balance thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// Upper/lower difference (percentage points) flagged as an imbalance
    pub imbalance_threshold_percent: f64,
    /// Core share below which core work is flagged
    pub min_core_percent: f64,
    /// Group share below `mean × ratio` is rated weak
    pub weak_ratio: f64,
    /// Group share above `mean × ratio` is rated strong
    pub strong_ratio: f64,
}

/// Weight progression rules keyed on last difficulty and trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Recommendation when an exercise has no history
    pub first_time_weight: f64,
    /// Confidence of the first-time recommendation
    pub first_time_confidence: f64,
    /// Increase after an easy session
    pub easy_increase: f64,
    /// Confidence after an easy session
    pub easy_confidence: f64,
    /// Confidence after a hard session (weight unchanged)
    pub hard_confidence: f64,
    /// Increase after a moderate session while improving
    pub improving_increase: f64,
    /// Confidence while improving
    pub improving_confidence: f64,
    /// Decrease after a moderate session while declining
    pub declining_decrease: f64,
    /// Confidence while declining
    pub declining_confidence: f64,
    /// Confidence while maintaining (weight unchanged)
    pub maintaining_confidence: f64,
    /// Multiplier for the conservative alternative
    pub conservative_factor: f64,
    /// Multiplier for the aggressive alternative
    pub aggressive_factor: f64,
}

/// Overall progress decision table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallProgressConfig {
    /// Strengths required for excellent
    pub excellent_strengths: usize,
    /// Weekly frequency required for excellent
    pub excellent_frequency: f64,
    /// Strengths required for good
    pub good_strengths: usize,
    /// Weekly frequency required for good
    pub good_frequency: f64,
    /// Strengths sufficient for moderate
    pub moderate_strengths: usize,
    /// Weekly frequency sufficient for moderate
    pub moderate_frequency: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window_size: 3,
            improving_factor: 1.05,
            declining_factor: 0.95,
        }
    }
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            streak_max_gap_days: 2,
            strong_weekly_frequency: 3.0,
            strong_streak: 5,
            min_records_for_exercise_trend: 3,
        }
    }
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            imbalance_threshold_percent: 30.0,
            min_core_percent: 10.0,
            weak_ratio: 0.75,
            strong_ratio: 1.25,
        }
    }
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            first_time_weight: FIRST_TIME_WEIGHT,
            first_time_confidence: FIRST_TIME_CONFIDENCE,
            easy_increase: 0.05,
            easy_confidence: 0.8,
            hard_confidence: 0.9,
            improving_increase: 0.025,
            improving_confidence: 0.85,
            declining_decrease: 0.05,
            declining_confidence: 0.7,
            maintaining_confidence: 0.8,
            conservative_factor: 0.9,
            aggressive_factor: 1.1,
        }
    }
}

impl Default for OverallProgressConfig {
    fn default() -> Self {
        Self {
            excellent_strengths: 3,
            excellent_frequency: 3.0,
            good_strengths: 2,
            good_frequency: 2.0,
            moderate_strengths: 1,
            moderate_frequency: 1.5,
        }
    }
}

impl AnalysisConfig {
    /// Load defaults, apply `CYCLECOACH_ANALYSIS_*` overrides, and validate
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable cannot be parsed or the
    /// resulting configuration is inconsistent
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that thresholds are internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent threshold
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trend.window_size == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "trend window size must be at least 1",
            ));
        }
        if self.trend.declining_factor <= 0.0
            || self.trend.declining_factor >= self.trend.improving_factor
        {
            return Err(ConfigError::InvalidRange(
                "trend declining_factor must be > 0 and < improving_factor",
            ));
        }
        if self.consistency.streak_max_gap_days < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "streak gap must not be negative",
            ));
        }
        if !(0.0..=100.0).contains(&self.balance.imbalance_threshold_percent)
            || !(0.0..=100.0).contains(&self.balance.min_core_percent)
        {
            return Err(ConfigError::ValueOutOfRange(
                "balance percentages must be between 0 and 100",
            ));
        }
        if self.balance.weak_ratio >= self.balance.strong_ratio {
            return Err(ConfigError::InvalidRange(
                "balance weak_ratio must be < strong_ratio",
            ));
        }
        let p = &self.progression;
        let confidences = [
            p.first_time_confidence,
            p.easy_confidence,
            p.hard_confidence,
            p.improving_confidence,
            p.declining_confidence,
            p.maintaining_confidence,
        ];
        if confidences.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(ConfigError::ValueOutOfRange(
                "recommendation confidences must be between 0 and 1",
            ));
        }
        if p.first_time_weight < 0.0 || p.conservative_factor > p.aggressive_factor {
            return Err(ConfigError::InvalidRange(
                "first_time_weight must be >= 0 and conservative_factor <= aggressive_factor",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "CYCLECOACH_ANALYSIS_TREND_WINDOW",
            &mut self.trend.window_size,
        )?;
        Self::apply_env_var(
            "CYCLECOACH_ANALYSIS_IMPROVING_FACTOR",
            &mut self.trend.improving_factor,
        )?;
        Self::apply_env_var(
            "CYCLECOACH_ANALYSIS_DECLINING_FACTOR",
            &mut self.trend.declining_factor,
        )?;
        Self::apply_env_var(
            "CYCLECOACH_ANALYSIS_STREAK_GAP_DAYS",
            &mut self.consistency.streak_max_gap_days,
        )?;
        Self::apply_env_var(
            "CYCLECOACH_ANALYSIS_STRONG_FREQUENCY",
            &mut self.consistency.strong_weekly_frequency,
        )?;
        Self::apply_env_var(
            "CYCLECOACH_ANALYSIS_IMBALANCE_PERCENT",
            &mut self.balance.imbalance_threshold_percent,
        )?;
        Self::apply_env_var(
            "CYCLECOACH_ANALYSIS_FIRST_TIME_WEIGHT",
            &mut self.progression.first_time_weight,
        )?;
        Ok(self)
    }
}
