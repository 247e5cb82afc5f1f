// ABOUTME: Integration tests for the prompt composition service
// ABOUTME: Checks session content, weight targets, profile splicing, language line, and metadata round-trip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use cyclecoach::intelligence::{ProgressAnalyzer, WeightRecommender};
use cyclecoach::models::{Difficulty, Language, UserProfile};
use cyclecoach::prompts::{extract_metadata, PromptComposer, PromptConfig, USER_INFO_ANCHOR};
use cyclecoach::session::session_title;
use cyclecoach::templates::TemplateRenderer;
use uuid::Uuid;

use common::{context_at, full_profile, record};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

#[test]
fn test_prompt_round_trips_metadata() {
    common::init_test_logging();
    let user = Uuid::new_v4();
    let ctx = context_at(user, 2, 3, Vec::new());
    let composer = PromptComposer::default();

    let prompt = composer
        .generate_full_prompt_on(&full_profile(user), &ctx, Language::English, date())
        .unwrap();
    let metadata = extract_metadata(&prompt).unwrap();

    assert_eq!(metadata.session_number, 3);
    assert_eq!(metadata.session_name, session_title(3));
    assert_eq!(metadata.date, date());
    assert_eq!(metadata.next_session, 4);
    assert_eq!(metadata.cycle_progress, "3/8");
    assert_eq!(metadata, composer.build_metadata(&ctx, date()));
}

#[test]
fn test_today_variant_also_round_trips() {
    let user = Uuid::new_v4();
    let ctx = context_at(user, 1, 1, Vec::new());
    let prompt = PromptComposer::default()
        .generate_full_prompt(&UserProfile::new(user, "Alex"), &ctx, Language::German)
        .unwrap();
    assert_eq!(extract_metadata(&prompt).unwrap().session_number, 1);
    assert!(prompt.contains("Antworte auf Deutsch."));
}

#[test]
fn test_out_of_range_session_is_normalized() {
    let user = Uuid::new_v4();
    let ctx = context_at(user, 1, 9, Vec::new());
    let prompt = PromptComposer::default()
        .generate_full_prompt_on(&full_profile(user), &ctx, Language::English, date())
        .unwrap();
    let metadata = extract_metadata(&prompt).unwrap();
    assert_eq!(metadata.session_number, 1);
    assert_eq!(metadata.next_session, 2);
}

#[test]
fn test_last_session_points_to_first() {
    let user = Uuid::new_v4();
    let ctx = context_at(user, 4, 8, Vec::new());
    let metadata = PromptComposer::default().build_metadata(&ctx, date());
    assert_eq!(metadata.next_session, 1);
    assert_eq!(metadata.cycle_progress, "8/8");
}

#[test]
fn test_targets_use_performance_history() {
    let user = Uuid::new_v4();
    let history = vec![
        record(user, "Bench Press", 60.0, 8, 4, Difficulty::Easy, 2),
        record(user, "Overhead Press", 40.0, 8, 3, Difficulty::Hard, 2),
    ];
    let ctx = context_at(user, 1, 1, history);
    let metadata = PromptComposer::default().build_metadata(&ctx, date());

    let bench = metadata
        .exercises
        .iter()
        .find(|exercise| exercise.name == "Bench Press")
        .unwrap();
    assert_eq!(bench.target_weight, 63.0);
    assert_eq!(bench.target_sets, 4);
    assert_eq!(bench.target_reps, 8);
    let last = bench.last_performance.as_ref().unwrap();
    assert_eq!(last.weight, 60.0);
    assert_eq!(last.difficulty, Difficulty::Easy);

    let press = metadata
        .exercises
        .iter()
        .find(|exercise| exercise.name == "Overhead Press")
        .unwrap();
    assert_eq!(press.target_weight, 40.0);

    let raise = metadata
        .exercises
        .iter()
        .find(|exercise| exercise.name == "Lateral Raise")
        .unwrap();
    assert_eq!(raise.target_weight, 20.0);
    assert!(raise.last_performance.is_none());
}

#[test]
fn test_prompt_contains_numbered_exercises_and_profile() {
    let user = Uuid::new_v4();
    let ctx = context_at(user, 1, 1, Vec::new());
    let prompt = PromptComposer::default()
        .generate_full_prompt_on(&full_profile(user), &ctx, Language::Spanish, date())
        .unwrap();

    assert!(prompt.contains("1. Bench Press: 4 x 8 @ 20 kg (first time)"));
    assert!(prompt.contains("2. Overhead Press"));
    assert!(prompt.contains("Responde en español."));
    assert!(prompt.contains("- Name: Jordan"));
    assert!(prompt.contains("- Body weight: 78.5 kg"));
    assert!(prompt.contains("- Equipment: barbell, dumbbells"));

    let profile_at = prompt.find("## ATHLETE PROFILE").unwrap();
    let anchor_at = prompt.find(USER_INFO_ANCHOR).unwrap();
    assert!(profile_at < anchor_at);
}

#[test]
fn test_prompt_has_no_unresolved_placeholders() {
    let user = Uuid::new_v4();
    let ctx = context_at(user, 1, 5, Vec::new());
    let prompt = PromptComposer::default()
        .generate_full_prompt_on(&UserProfile::new(user, "Alex"), &ctx, Language::English, date())
        .unwrap();
    assert!(TemplateRenderer::placeholders(&prompt).is_empty());
    assert!(prompt.contains("- Age: not specified"));
}

#[test]
fn test_missing_anchor_skips_profile_splice() {
    let user = Uuid::new_v4();
    let template = "Session {{session_number}}\n\
                    <!-- CYCLECOACH_METADATA_START -->\n{{metadata}}\n<!-- CYCLECOACH_METADATA_END -->\n";
    let composer = PromptComposer::new(
        ProgressAnalyzer::new(),
        WeightRecommender::new(),
        TemplateRenderer::new(),
        PromptConfig::with_base_template(template).unwrap(),
    );
    let ctx = context_at(user, 1, 2, Vec::new());
    let prompt = composer
        .generate_full_prompt_on(&full_profile(user), &ctx, Language::English, date())
        .unwrap();

    assert!(prompt.starts_with("Session 2\n"));
    assert!(!prompt.contains("ATHLETE PROFILE"));
    assert_eq!(extract_metadata(&prompt).unwrap().session_number, 2);
}

#[test]
fn test_marker_text_in_profile_does_not_break_extraction() {
    let user = Uuid::new_v4();
    let mut profile = full_profile(user);
    profile.goal = "Paste <!-- CYCLECOACH_METADATA_START --> into my notes".to_owned();
    let ctx = context_at(user, 1, 4, Vec::new());

    let prompt = PromptComposer::default()
        .generate_full_prompt_on(&profile, &ctx, Language::English, date())
        .unwrap();

    assert!(prompt.contains("- Goal: Paste <!-- CYCLECOACH_METADATA_START -->"));
    assert_eq!(extract_metadata(&prompt).unwrap().session_number, 4);
}

#[test]
fn test_marker_text_in_exercise_names_does_not_break_extraction() {
    let user = Uuid::new_v4();
    let name = "Curl <!-- CYCLECOACH_METADATA_END -->";
    let history: Vec<_> = (1..=6)
        .map(|day| {
            let weight = if day <= 3 { 20.0 } else { 40.0 };
            record(user, name, weight, 10, 3, Difficulty::Moderate, day)
        })
        .collect();
    let ctx = context_at(user, 1, 6, history);
    let composer = PromptComposer::default();

    let prompt = composer
        .generate_full_prompt_on(&full_profile(user), &ctx, Language::English, date())
        .unwrap();
    let metadata = extract_metadata(&prompt).unwrap();

    assert!(metadata.recommendations.iter().any(|rec| rec.contains(name)));
    assert_eq!(metadata, composer.build_metadata(&ctx, date()));
}
