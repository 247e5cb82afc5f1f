// ABOUTME: Next-session weight recommendations driven by last difficulty and volume trend
// ABOUTME: Easy sessions progress, hard sessions hold, moderate sessions follow the trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight recommendation engine

use tracing::debug;

use cyclecoach_core::formatters::{format_number, round_to};
use cyclecoach_core::models::{
    Difficulty, Trend, WeightAlternatives, WeightRecommendation, WorkoutRecord,
};

use crate::config::{AnalysisConfig, ProgressionConfig};
use crate::defaults;
use crate::progress_analyzer::{exercise_history, ProgressAnalyzer};

/// Recommends working weights from an exercise's history
#[derive(Debug, Clone, Default)]
pub struct WeightRecommender {
    analyzer: ProgressAnalyzer,
}

impl WeightRecommender {
    /// Create a recommender with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: AnalysisConfig) -> Self {
        Self {
            analyzer: ProgressAnalyzer::with_config(config),
        }
    }

    fn progression(&self) -> &ProgressionConfig {
        &self.analyzer.config().progression
    }

    /// Recommend the weight for the next session of `exercise`.
    ///
    /// `history` may contain other exercises; only matching records are used.
    /// All weights are rounded to the nearest integer.
    #[must_use]
    pub fn recommend_weight(&self, exercise: &str, history: &[WorkoutRecord]) -> WeightRecommendation {
        let history = exercise_history(history, exercise);
        let Some(last) = history.first() else {
            debug!(exercise, "No history, using first-time recommendation");
            return defaults::first_time_recommendation(exercise, self.progression());
        };

        let rules = self.progression();
        let last_weight = format_number(last.weight);
        let (factor, confidence, reasoning) = match last.difficulty {
            Difficulty::Easy => (
                1.0 + rules.easy_increase,
                rules.easy_confidence,
                format!(
                    "Last session at {last_weight} felt easy, increase by {}%",
                    percent(rules.easy_increase)
                ),
            ),
            Difficulty::Hard => (
                1.0,
                rules.hard_confidence,
                format!(
                    "Last session at {last_weight} felt hard, keep the same weight and focus on form"
                ),
            ),
            Difficulty::Moderate => match self.analyzer.analyze_trend(&history) {
                Trend::Improving => (
                    1.0 + rules.improving_increase,
                    rules.improving_confidence,
                    format!(
                        "Volume is trending up, small {}% increase from {last_weight}",
                        percent(rules.improving_increase)
                    ),
                ),
                Trend::Declining => (
                    1.0 - rules.declining_decrease,
                    rules.declining_confidence,
                    format!(
                        "Volume has been declining, reduce {last_weight} by {}% to recover and rebuild",
                        percent(rules.declining_decrease)
                    ),
                ),
                Trend::Maintaining => (
                    1.0,
                    rules.maintaining_confidence,
                    format!(
                        "Performance is stable at {last_weight}, hold the weight and aim for an extra rep"
                    ),
                ),
            },
        };

        let recommended_weight = (last.weight * factor).round();
        WeightRecommendation {
            exercise: exercise.to_owned(),
            recommended_weight,
            reasoning,
            confidence,
            alternatives: WeightAlternatives {
                conservative: (recommended_weight * rules.conservative_factor).round(),
                aggressive: (recommended_weight * rules.aggressive_factor).round(),
            },
        }
    }
}

fn percent(fraction: f64) -> String {
    format_number(round_to(fraction * 100.0, 1))
}
