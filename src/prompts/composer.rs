// ABOUTME: Prompt composition service producing the copyable meta-prompt for one session
// ABOUTME: Combines cycle slot content, weight targets, progress insights, and embedded metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompt Composer
//!
//! Generation steps:
//!
//! 1. Normalize the context's session number and resolve the slot content
//! 2. Recommend a target weight per planned exercise from the performance log
//! 3. Derive insights and muscle group balance from the same log
//! 4. Serialize [`PromptMetadata`] as the embedded payload
//! 5. Splice the athlete fragment before the anchor, then render everything

use chrono::{NaiveDate, Utc};
use serde_json::{json, Value};
use tracing::{debug, info};

use cyclecoach_core::constants::metadata::DATE_FORMAT;
use cyclecoach_core::errors::AppResult;
use cyclecoach_core::formatters::format_number;
use cyclecoach_core::models::{
    ExerciseTarget, Language, LastPerformance, ProgressInsights, PromptMetadata,
    SessionContext, UserProfile,
};
use cyclecoach_intelligence::{exercise_history, ProgressAnalyzer, WeightRecommender};

use super::config::PromptConfig;
use super::metadata::metadata_payload;
use crate::session::{cycle_progress, next_session_number, normalize_session, session_slot};
use crate::templates::{RenderData, TemplateRenderer};

/// Text used for profile fields the user left empty
const NOT_SPECIFIED: &str = "not specified";

/// Builds meta-prompts from a profile and session context
#[derive(Debug, Clone)]
pub struct PromptComposer {
    analyzer: ProgressAnalyzer,
    recommender: WeightRecommender,
    renderer: TemplateRenderer,
    config: PromptConfig,
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new(
            ProgressAnalyzer::new(),
            WeightRecommender::new(),
            TemplateRenderer::new(),
            PromptConfig::default(),
        )
    }
}

impl PromptComposer {
    /// Compose from explicitly constructed collaborators
    #[must_use]
    pub const fn new(
        analyzer: ProgressAnalyzer,
        recommender: WeightRecommender,
        renderer: TemplateRenderer,
        config: PromptConfig,
    ) -> Self {
        Self {
            analyzer,
            recommender,
            renderer,
            config,
        }
    }

    /// Active template configuration
    #[must_use]
    pub const fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// Generate the full prompt dated today (UTC)
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata payload cannot be serialized
    pub fn generate_full_prompt(
        &self,
        profile: &UserProfile,
        ctx: &SessionContext,
        language: Language,
    ) -> AppResult<String> {
        self.generate_full_prompt_on(profile, ctx, language, Utc::now().date_naive())
    }

    /// Generate the full prompt for an explicit date
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata payload cannot be serialized
    pub fn generate_full_prompt_on(
        &self,
        profile: &UserProfile,
        ctx: &SessionContext,
        language: Language,
        date: NaiveDate,
    ) -> AppResult<String> {
        let insights = self.analyzer.analyze_progress(&ctx.performance, None);
        let metadata = self.build_metadata_with(ctx, date, &insights);
        let payload = metadata_payload(&metadata)?;

        let slot = session_slot(i64::from(metadata.session_number));
        let next_slot = session_slot(i64::from(metadata.next_session));

        let mut data = RenderData::new();
        data.insert("language_instruction".to_owned(), json!(language.instruction()));
        data.insert("date".to_owned(), json!(date.format(DATE_FORMAT).to_string()));
        data.insert("cycle_number".to_owned(), json!(ctx.cycle_number));
        data.insert("session_number".to_owned(), json!(metadata.session_number));
        data.insert("session_title".to_owned(), json!(slot.title));
        data.insert("session_focus".to_owned(), json!(slot.focus));
        data.insert("cycle_progress".to_owned(), json!(metadata.cycle_progress));
        data.insert(
            "exercise_list".to_owned(),
            json!(format_exercise_list(&metadata.exercises, &profile.weight_unit)),
        );
        data.insert("next_session".to_owned(), json!(metadata.next_session));
        data.insert("next_session_title".to_owned(), json!(next_slot.title));
        data.insert("metadata".to_owned(), json!(payload));
        insert_insights(&mut data, &insights);
        insert_profile(&mut data, profile);

        let template = self.splice_user_info();
        let prompt = self.renderer.render(&template, &data);

        info!(
            user_id = %ctx.user_id,
            session = metadata.session_number,
            exercises = metadata.exercises.len(),
            language = %language,
            "Generated session prompt"
        );
        Ok(prompt)
    }

    /// Metadata for the context's current session on `date`
    #[must_use]
    pub fn build_metadata(&self, ctx: &SessionContext, date: NaiveDate) -> PromptMetadata {
        let insights = self.analyzer.analyze_progress(&ctx.performance, None);
        self.build_metadata_with(ctx, date, &insights)
    }

    fn build_metadata_with(
        &self,
        ctx: &SessionContext,
        date: NaiveDate,
        insights: &ProgressInsights,
    ) -> PromptMetadata {
        let session_number = normalize_session(i64::from(ctx.session_number));
        let slot = session_slot(i64::from(session_number));

        let exercises = slot
            .exercises
            .iter()
            .map(|planned| {
                let recommendation = self
                    .recommender
                    .recommend_weight(planned.name, &ctx.performance);
                let last_performance = exercise_history(&ctx.performance, planned.name)
                    .first()
                    .map(|record| LastPerformance {
                        weight: record.weight,
                        reps: record.reps,
                        sets: record.sets,
                        difficulty: record.difficulty,
                        date: record.timestamp.date_naive(),
                    });
                ExerciseTarget {
                    name: planned.name.to_owned(),
                    target_weight: recommendation.recommended_weight,
                    target_reps: planned.reps,
                    target_sets: planned.sets,
                    last_performance,
                }
            })
            .collect();

        PromptMetadata {
            session_number,
            session_name: slot.title.to_owned(),
            date,
            exercises,
            muscle_balance: self.analyzer.muscle_group_balance(&ctx.performance),
            recommendations: insights.recommendations.clone(),
            next_session: next_session_number(i64::from(session_number)),
            cycle_progress: cycle_progress(i64::from(session_number)),
        }
    }

    /// Base template with the athlete fragment inserted before the anchor
    fn splice_user_info(&self) -> String {
        let template = &self.config.base_template;
        let anchor = &self.config.user_info_anchor;
        match template.find(anchor.as_str()) {
            Some(position) if !anchor.is_empty() => {
                let mut spliced =
                    String::with_capacity(template.len() + self.config.user_info_template.len());
                spliced.push_str(&template[..position]);
                spliced.push_str(&self.config.user_info_template);
                spliced.push_str(&template[position..]);
                spliced
            }
            _ => {
                debug!(anchor = %anchor, "User info anchor not found, template left unchanged");
                template.clone()
            }
        }
    }
}

/// Numbered exercise list, one line per planned exercise
#[must_use]
pub fn format_exercise_list(exercises: &[ExerciseTarget], unit: &str) -> String {
    exercises
        .iter()
        .enumerate()
        .map(|(index, exercise)| {
            let mut line = format!(
                "{}. {}: {} x {} @ {} {unit}",
                index + 1,
                exercise.name,
                exercise.target_sets,
                exercise.target_reps,
                format_number(exercise.target_weight),
            );
            match &exercise.last_performance {
                Some(last) => line.push_str(&format!(
                    " (last: {} {unit}, {} x {}, {})",
                    format_number(last.weight),
                    last.sets,
                    last.reps,
                    last.difficulty
                )),
                None => line.push_str(" (first time)"),
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn text_items(items: &[String]) -> Value {
    Value::Array(items.iter().map(|text| json!({ "text": text })).collect())
}

fn insert_insights(data: &mut RenderData, insights: &ProgressInsights) {
    let overall = serde_json::to_value(insights.overall_progress).unwrap_or(Value::Null);
    data.insert("overall_progress".to_owned(), overall);
    data.insert(
        "workouts_per_week".to_owned(),
        json!(insights.consistency.workouts_per_week),
    );
    data.insert("streak".to_owned(), json!(insights.consistency.streak));
    data.insert("upper_body".to_owned(), json!(insights.muscle_balance.upper_body));
    data.insert("lower_body".to_owned(), json!(insights.muscle_balance.lower_body));
    data.insert("core".to_owned(), json!(insights.muscle_balance.core));
    data.insert("strengths".to_owned(), text_items(&insights.strengths));
    data.insert(
        "areas_for_improvement".to_owned(),
        text_items(&insights.areas_for_improvement),
    );
    data.insert(
        "recommendations".to_owned(),
        text_items(&insights.recommendations),
    );
}

fn optional_text(value: Option<String>) -> Value {
    json!(value.unwrap_or_else(|| NOT_SPECIFIED.to_owned()))
}

fn insert_profile(data: &mut RenderData, profile: &UserProfile) {
    let unit = &profile.weight_unit;
    data.insert("name".to_owned(), json!(profile.name));
    data.insert(
        "age".to_owned(),
        optional_text(profile.age.map(|age| age.to_string())),
    );
    data.insert(
        "body_weight".to_owned(),
        optional_text(
            profile
                .body_weight
                .map(|weight| format!("{} {unit}", format_number(weight))),
        ),
    );
    data.insert(
        "height".to_owned(),
        optional_text(
            profile
                .height_cm
                .map(|height| format!("{} cm", format_number(height))),
        ),
    );
    data.insert("experience".to_owned(), json!(profile.experience.to_string()));
    data.insert(
        "goal".to_owned(),
        optional_text(Some(profile.goal.clone()).filter(|goal| !goal.trim().is_empty())),
    );
    data.insert(
        "training_days_per_week".to_owned(),
        json!(profile.training_days_per_week),
    );
    data.insert(
        "equipment".to_owned(),
        optional_text(Some(profile.equipment.join(", ")).filter(|list| !list.is_empty())),
    );
    data.insert(
        "limitations".to_owned(),
        optional_text(profile.limitations.clone()),
    );
    data.insert("weight_unit".to_owned(), json!(unit));
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclecoach_core::models::Difficulty;

    #[test]
    fn test_exercise_list_is_numbered() {
        let exercises = vec![
            ExerciseTarget {
                name: "Bench Press".to_owned(),
                target_weight: 63.0,
                target_reps: 8,
                target_sets: 4,
                last_performance: Some(LastPerformance {
                    weight: 60.0,
                    reps: 8,
                    sets: 4,
                    difficulty: Difficulty::Easy,
                    date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
                }),
            },
            ExerciseTarget {
                name: "Lateral Raise".to_owned(),
                target_weight: 20.0,
                target_reps: 12,
                target_sets: 3,
                last_performance: None,
            },
        ];
        assert_eq!(
            format_exercise_list(&exercises, "kg"),
            "1. Bench Press: 4 x 8 @ 63 kg (last: 60 kg, 4 x 8, easy)\n\
             2. Lateral Raise: 3 x 12 @ 20 kg (first time)"
        );
    }

    #[test]
    fn test_missing_anchor_leaves_template_unchanged() {
        let config = PromptConfig {
            base_template: "no anchor here".to_owned(),
            ..PromptConfig::default()
        };
        let composer = PromptComposer::new(
            ProgressAnalyzer::new(),
            WeightRecommender::new(),
            TemplateRenderer::new(),
            config,
        );
        assert_eq!(composer.splice_user_info(), "no anchor here");
    }
}
