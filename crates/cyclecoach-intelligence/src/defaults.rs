// ABOUTME: Single safe-default policy for every "no data" condition in the analysis engine
// ABOUTME: Empty histories, empty time windows, and zero denominators all resolve here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Safe defaults
//!
//! Analysis never fails on missing data. Every method that hits an empty
//! history or an empty window returns one of these values instead.

use cyclecoach_core::models::{
    Consistency, ExerciseProgress, MuscleBalance, OverallProgress, PersonalRecord,
    ProgressInsights, Trend, WeightAlternatives, WeightRecommendation,
};

use crate::config::ProgressionConfig;

/// Reasoning attached to the first-time recommendation
pub const FIRST_TIME_REASONING: &str = "first time doing this exercise";

/// Area reported when no workouts fall in the analysed window
pub const NO_DATA_AREA: &str = "No workout data available for this period";

/// Recommendation reported when no workouts fall in the analysed window
pub const NO_DATA_RECOMMENDATION: &str =
    "Start logging your workouts to receive personalized insights";

/// Trend used whenever there is not enough data to compare windows
pub const DEFAULT_TREND: Trend = Trend::Maintaining;

/// Divide, treating an empty or zero denominator as 1
#[must_use]
pub fn floored_ratio(numerator: f64, denominator: f64) -> f64 {
    numerator / denominator.max(1.0)
}

/// Progress for an exercise with no recorded history
#[must_use]
pub fn empty_exercise_progress(exercise: &str) -> ExerciseProgress {
    ExerciseProgress {
        exercise: exercise.to_owned(),
        history: Vec::new(),
        personal_record: PersonalRecord::default(),
        last_workout: None,
        trend: DEFAULT_TREND,
    }
}

/// Recommendation for an exercise never performed before
#[must_use]
pub fn first_time_recommendation(exercise: &str, config: &ProgressionConfig) -> WeightRecommendation {
    let recommended_weight = config.first_time_weight.round();
    WeightRecommendation {
        exercise: exercise.to_owned(),
        recommended_weight,
        reasoning: FIRST_TIME_REASONING.to_owned(),
        confidence: config.first_time_confidence,
        alternatives: WeightAlternatives {
            conservative: (recommended_weight * config.conservative_factor).round(),
            aggressive: (recommended_weight * config.aggressive_factor).round(),
        },
    }
}

/// Insights when the analysed window contains no workouts
#[must_use]
pub fn no_data_insights() -> ProgressInsights {
    ProgressInsights {
        overall_progress: OverallProgress::NeedsAttention,
        strengths: Vec::new(),
        areas_for_improvement: vec![NO_DATA_AREA.to_owned()],
        recommendations: vec![NO_DATA_RECOMMENDATION.to_owned()],
        muscle_balance: MuscleBalance::default(),
        consistency: Consistency::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floored_ratio_never_divides_by_zero() {
        assert!((floored_ratio(5.0, 0.0) - 5.0).abs() < f64::EPSILON);
        assert!((floored_ratio(6.0, 3.0) - 2.0).abs() < f64::EPSILON);
        assert!(floored_ratio(0.0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_time_recommendation_uses_config() {
        let rec = first_time_recommendation("Deadlift", &ProgressionConfig::default());
        assert!((rec.recommended_weight - 20.0).abs() < f64::EPSILON);
        assert!((rec.confidence - 0.5).abs() < f64::EPSILON);
        assert!((rec.alternatives.conservative - 18.0).abs() < f64::EPSILON);
        assert!((rec.alternatives.aggressive - 22.0).abs() < f64::EPSILON);
        assert_eq!(rec.reasoning, FIRST_TIME_REASONING);
    }
}
