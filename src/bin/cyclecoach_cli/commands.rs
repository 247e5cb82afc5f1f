// ABOUTME: Command implementations for the CycleCoach CLI
// ABOUTME: Reads JSON inputs, calls the engine, and prints text or pretty JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use cyclecoach::config::CoachConfig;
use cyclecoach::models::{Language, SessionContext, TimeRange, UserProfile, WorkoutRecord};
use cyclecoach::prompts::extract_metadata;
use cyclecoach::session::{is_cycle_complete, SessionCycle};
use cyclecoach::storage::{InMemoryTrainingStore, TrainingStore};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Load a workout log into a fresh store and return the requested slice
async fn load_workouts(path: &Path, user: Option<Uuid>) -> Result<Vec<WorkoutRecord>> {
    let records: Vec<WorkoutRecord> = read_json(path)?;
    let store = InMemoryTrainingStore::new();
    let mut users: Vec<Uuid> = Vec::new();
    for record in records {
        if !users.contains(&record.user_id) {
            users.push(record.user_id);
        }
        store.append_workout(record).await?;
    }

    let mut selected = Vec::new();
    for user_id in users
        .into_iter()
        .filter(|id| user.is_none() || user == Some(*id))
    {
        selected.extend(store.workouts_for_user(user_id).await?);
    }
    info!(records = selected.len(), users = store.user_count(), "Loaded workout log");
    Ok(selected)
}

pub fn prompt(
    config: &CoachConfig,
    profile_path: &Path,
    context_path: &Path,
    language: Option<&str>,
    date: Option<NaiveDate>,
) -> Result<()> {
    let profile: UserProfile = read_json(profile_path)?;
    let ctx: SessionContext = read_json(context_path)?;
    let language = language.map_or(config.default_language, Language::from_code_or_default);
    let date = date.unwrap_or_else(|| Utc::now().date_naive());

    let text = config
        .composer()
        .generate_full_prompt_on(&profile, &ctx, language, date)?;
    println!("{text}");
    Ok(())
}

pub fn extract(input: Option<&Path>) -> Result<()> {
    let text = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    match extract_metadata(&text) {
        Some(metadata) => print_json(&metadata),
        None => anyhow::bail!("No valid CycleCoach metadata block found"),
    }
}

pub fn advance(context_path: &Path, write: bool) -> Result<()> {
    let ctx: SessionContext = read_json(context_path)?;
    let finishing_cycle = is_cycle_complete(ctx.state());
    let advanced = ctx.clone().apply(ctx.advance_update(), Utc::now());
    info!(
        from = ctx.session_number,
        to = advanced.session_number,
        new_cycle = finishing_cycle,
        "Advanced session"
    );

    if write {
        fs::write(context_path, serde_json::to_string_pretty(&advanced)?)
            .with_context(|| format!("Failed to write {}", context_path.display()))?;
        println!(
            "Cycle {}, session {}",
            advanced.cycle_number, advanced.session_number
        );
        Ok(())
    } else {
        print_json(&advanced)
    }
}

pub async fn insights(
    config: &CoachConfig,
    workouts_path: &Path,
    user: Option<Uuid>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    let workouts = load_workouts(workouts_path, user).await?;
    let range = (from.is_some() || to.is_some()).then(|| TimeRange::from_dates(from, to));

    print_json(&config.analyzer().analyze_progress(&workouts, range))
}

pub async fn recommend(
    config: &CoachConfig,
    workouts_path: &Path,
    exercise: &str,
    user: Option<Uuid>,
) -> Result<()> {
    let workouts = load_workouts(workouts_path, user).await?;
    print_json(&config.recommender().recommend_weight(exercise, &workouts))
}
