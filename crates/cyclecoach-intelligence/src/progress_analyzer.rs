// ABOUTME: Progress analysis engine over workout history - personal records, trends, consistency
// ABOUTME: Produces exercise progress, user-level insights, and muscle group balance ratings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progress analysis engine
//!
//! Every method is a pure function of its inputs. Nothing is cached between
//! calls, so concurrent calls for any number of users are safe.

use std::collections::{BTreeMap, HashMap};

use chrono::Duration;
use tracing::debug;

use cyclecoach_core::formatters::{format_number, round_to};
use cyclecoach_core::models::{
    BalanceRating, Consistency, ExerciseProgress, MuscleBalance, MuscleGroupBalance,
    OverallProgress, PersonalRecord, ProgressInsights, TimeRange, Trend, WorkoutRecord,
};

use crate::config::AnalysisConfig;
use crate::defaults::{self, floored_ratio, DEFAULT_TREND};
use crate::keywords::{self, BodyRegion, MuscleGroup};

/// Seconds in one week
const SECONDS_PER_WEEK: f64 = 7.0 * 24.0 * 3600.0;

/// Copy of `records` ordered most recent first; ties keep their input order
#[must_use]
pub fn most_recent_first(records: &[WorkoutRecord]) -> Vec<WorkoutRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// Records for one exercise (case-insensitive), most recent first
#[must_use]
pub fn exercise_history(records: &[WorkoutRecord], exercise: &str) -> Vec<WorkoutRecord> {
    let matching: Vec<WorkoutRecord> = records
        .iter()
        .filter(|record| record.is_exercise(exercise))
        .cloned()
        .collect();
    most_recent_first(&matching)
}

/// Progress analysis engine with configurable thresholds
#[derive(Debug, Clone, Default)]
pub struct ProgressAnalyzer {
    config: AnalysisConfig,
}

impl ProgressAnalyzer {
    /// Create an analyzer with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Personal record, last workout and trend for one exercise
    #[must_use]
    pub fn exercise_progress(&self, history: &[WorkoutRecord], exercise: &str) -> ExerciseProgress {
        let history = exercise_history(history, exercise);
        if history.is_empty() {
            debug!(exercise, "No history for exercise, returning zeroed progress");
            return defaults::empty_exercise_progress(exercise);
        }

        ExerciseProgress {
            exercise: exercise.to_owned(),
            personal_record: Self::personal_record(&history),
            last_workout: history.first().map(|record| record.timestamp),
            trend: self.analyze_trend(&history),
            history,
        }
    }

    /// Best set by `weight × reps`; the first record seen wins ties
    #[must_use]
    pub fn personal_record(history: &[WorkoutRecord]) -> PersonalRecord {
        let mut best: Option<&WorkoutRecord> = None;
        for record in history {
            match best {
                Some(current) if record.set_volume() <= current.set_volume() => {}
                _ => best = Some(record),
            }
        }
        best.map_or_else(PersonalRecord::default, |record| PersonalRecord {
            weight: record.weight,
            reps: record.reps,
            date: Some(record.timestamp),
        })
    }

    /// Classify the volume trend of a history ordered most recent first.
    ///
    /// Compares the average `weight × reps × sets` of the most recent window
    /// against the window immediately before it.
    #[must_use]
    pub fn analyze_trend(&self, history: &[WorkoutRecord]) -> Trend {
        let window = self.config.trend.window_size;
        if history.len() < window {
            return DEFAULT_TREND;
        }

        let recent = &history[..window];
        let older = &history[window..history.len().min(window * 2)];
        if older.is_empty() {
            return DEFAULT_TREND;
        }

        let recent_avg = average_session_volume(recent);
        let older_avg = average_session_volume(older);

        if recent_avg > older_avg * self.config.trend.improving_factor {
            Trend::Improving
        } else if recent_avg < older_avg * self.config.trend.declining_factor {
            Trend::Declining
        } else {
            Trend::Maintaining
        }
    }

    /// User-level insights over all workouts, optionally limited to an
    /// inclusive time range
    #[must_use]
    pub fn analyze_progress(
        &self,
        workouts: &[WorkoutRecord],
        range: Option<TimeRange>,
    ) -> ProgressInsights {
        let in_range: Vec<WorkoutRecord> = match range {
            Some(window) => workouts
                .iter()
                .filter(|record| window.contains(record.timestamp))
                .cloned()
                .collect(),
            None => workouts.to_vec(),
        };
        if in_range.is_empty() {
            debug!("No workouts in analysed window, returning no-data insights");
            return defaults::no_data_insights();
        }

        let sorted = most_recent_first(&in_range);
        let muscle_balance = Self::body_region_balance(&sorted);
        let consistency = Consistency {
            workouts_per_week: Self::workouts_per_week(&sorted),
            streak: self.calculate_streak(&sorted),
            last_workout: sorted.first().map(|record| record.timestamp),
        };

        let mut findings = Findings::default();
        self.assess_consistency(&consistency, &mut findings);
        self.assess_balance(&muscle_balance, &mut findings);
        self.assess_exercise_trends(&sorted, &mut findings);

        let overall_progress =
            self.overall_progress(findings.strengths.len(), consistency.workouts_per_week);

        ProgressInsights {
            overall_progress,
            strengths: findings.strengths,
            areas_for_improvement: findings.areas,
            recommendations: findings.recommendations,
            muscle_balance,
            consistency,
        }
    }

    /// Rate each fixed muscle group relative to the mean share of classified
    /// workouts. With nothing classified every group is normal.
    #[must_use]
    pub fn muscle_group_balance(&self, workouts: &[WorkoutRecord]) -> MuscleGroupBalance {
        let mut counts: HashMap<MuscleGroup, usize> = HashMap::new();
        for record in workouts {
            if let Some(group) = keywords::muscle_group(&record.exercise_name) {
                *counts.entry(group).or_insert(0) += 1;
            }
        }

        let total: usize = counts.values().sum();
        if total == 0 {
            return MuscleGroupBalance::default();
        }

        let mean = total as f64 / MuscleGroup::ALL.len() as f64;
        let balance = &self.config.balance;
        let rate = |group: MuscleGroup| {
            let count = counts.get(&group).copied().unwrap_or(0) as f64;
            if count < mean * balance.weak_ratio {
                BalanceRating::Weak
            } else if count > mean * balance.strong_ratio {
                BalanceRating::Strong
            } else {
                BalanceRating::Normal
            }
        };

        MuscleGroupBalance {
            chest: rate(MuscleGroup::Chest),
            back: rate(MuscleGroup::Back),
            shoulders: rate(MuscleGroup::Shoulders),
            arms: rate(MuscleGroup::Arms),
            legs: rate(MuscleGroup::Legs),
        }
    }

    /// Upper/lower/core shares in whole percent of the classified workouts
    #[must_use]
    pub fn body_region_balance(workouts: &[WorkoutRecord]) -> MuscleBalance {
        let (mut upper, mut lower, mut core) = (0_u32, 0_u32, 0_u32);
        for record in workouts {
            match keywords::body_region(&record.exercise_name) {
                Some(BodyRegion::UpperBody) => upper += 1,
                Some(BodyRegion::LowerBody) => lower += 1,
                Some(BodyRegion::Core) => core += 1,
                None => {}
            }
        }

        let total = f64::from(upper + lower + core);
        let percent = |count: u32| (floored_ratio(f64::from(count), total) * 100.0).round();
        MuscleBalance {
            upper_body: percent(upper),
            lower_body: percent(lower),
            core: percent(core),
        }
    }

    /// `count / max(1, weeks between first and last workout)`, one decimal
    #[must_use]
    pub fn workouts_per_week(workouts: &[WorkoutRecord]) -> f64 {
        let earliest = workouts.iter().map(|record| record.timestamp).min();
        let latest = workouts.iter().map(|record| record.timestamp).max();
        let weeks = match (earliest, latest) {
            (Some(first), Some(last)) => (last - first).num_seconds() as f64 / SECONDS_PER_WEEK,
            _ => 0.0,
        };
        round_to(floored_ratio(workouts.len() as f64, weeks), 1)
    }

    /// Length of the most recent run of workouts whose consecutive gaps are
    /// within the configured maximum. Expects most-recent-first order.
    #[must_use]
    pub fn calculate_streak(&self, sorted: &[WorkoutRecord]) -> u32 {
        if sorted.is_empty() {
            return 0;
        }
        let max_gap = Duration::days(self.config.consistency.streak_max_gap_days);
        let mut streak = 1;
        for pair in sorted.windows(2) {
            if pair[0].timestamp - pair[1].timestamp > max_gap {
                break;
            }
            streak += 1;
        }
        streak
    }

    fn overall_progress(&self, strengths: usize, workouts_per_week: f64) -> OverallProgress {
        let table = &self.config.overall;
        if strengths >= table.excellent_strengths && workouts_per_week >= table.excellent_frequency
        {
            OverallProgress::Excellent
        } else if strengths >= table.good_strengths && workouts_per_week >= table.good_frequency {
            OverallProgress::Good
        } else if strengths >= table.moderate_strengths
            || workouts_per_week >= table.moderate_frequency
        {
            OverallProgress::Moderate
        } else {
            OverallProgress::NeedsAttention
        }
    }

    fn assess_consistency(&self, consistency: &Consistency, findings: &mut Findings) {
        let rules = &self.config.consistency;
        if consistency.workouts_per_week >= rules.strong_weekly_frequency {
            findings.strengths.push(format!(
                "Consistent training frequency ({} workouts per week)",
                format_number(consistency.workouts_per_week)
            ));
        } else {
            findings.areas.push(format!(
                "Training frequency below {} workouts per week",
                format_number(rules.strong_weekly_frequency)
            ));
            findings.recommendations.push(format!(
                "Aim for at least {} workouts per week to keep progressing",
                format_number(rules.strong_weekly_frequency)
            ));
        }

        if consistency.streak >= rules.strong_streak {
            findings.strengths.push(format!(
                "Strong current streak of {} workouts",
                consistency.streak
            ));
        }
    }

    fn assess_balance(&self, balance: &MuscleBalance, findings: &mut Findings) {
        if balance.total() == 0.0 {
            return;
        }
        let rules = &self.config.balance;
        let difference = balance.upper_body - balance.lower_body;

        if difference.abs() > rules.imbalance_threshold_percent {
            findings.areas.push(format!(
                "Upper/lower body imbalance ({}% upper vs {}% lower)",
                format_number(balance.upper_body),
                format_number(balance.lower_body)
            ));
            let advice = if difference > 0.0 {
                "Add more lower body exercises (squats, lunges, deadlifts) to balance your training"
            } else {
                "Add more upper body exercises (presses, rows, pull-ups) to balance your training"
            };
            findings.recommendations.push(advice.to_owned());
        } else if balance.upper_body > 0.0 && balance.lower_body > 0.0 {
            findings
                .strengths
                .push("Balanced upper and lower body training".to_owned());
        }

        if balance.core < rules.min_core_percent {
            findings
                .areas
                .push("Core training is underrepresented".to_owned());
            findings.recommendations.push(
                "Include two or three core exercises per week, such as planks or dead bugs"
                    .to_owned(),
            );
        }
    }

    fn assess_exercise_trends(&self, sorted: &[WorkoutRecord], findings: &mut Findings) {
        // Keyed by lowercase name; the display name is taken from the most recent record
        let mut by_exercise: BTreeMap<String, (String, Vec<WorkoutRecord>)> = BTreeMap::new();
        for record in sorted {
            by_exercise
                .entry(record.exercise_name.trim().to_lowercase())
                .or_insert_with(|| (record.exercise_name.trim().to_owned(), Vec::new()))
                .1
                .push(record.clone());
        }

        for (name, history) in by_exercise.values() {
            if history.len() < self.config.consistency.min_records_for_exercise_trend {
                continue;
            }
            match self.analyze_trend(history) {
                Trend::Improving => findings.strengths.push(format!("Progressing on {name}")),
                Trend::Declining => {
                    findings
                        .areas
                        .push(format!("Declining performance on {name}"));
                    findings.recommendations.push(format!(
                        "Review recovery, sleep and technique for {name}; consider a lighter week"
                    ));
                }
                Trend::Maintaining => {}
            }
        }
    }
}

/// Average `weight × reps × sets` over a window; callers guarantee non-empty
fn average_session_volume(window: &[WorkoutRecord]) -> f64 {
    let total: f64 = window.iter().map(WorkoutRecord::session_volume).sum();
    floored_ratio(total, window.len() as f64)
}

#[derive(Debug, Default)]
struct Findings {
    strengths: Vec<String>,
    areas: Vec<String>,
    recommendations: Vec<String>,
}
