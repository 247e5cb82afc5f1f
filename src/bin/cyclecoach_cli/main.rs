// ABOUTME: CycleCoach CLI - drives the training engine over JSON files
// ABOUTME: Generates prompts, extracts metadata, advances sessions, and reports analysis results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Generate today's prompt for a profile and session context
//! cyclecoach-cli prompt --profile profile.json --context context.json --language es
//!
//! # Recover the metadata block from a pasted prompt
//! cyclecoach-cli extract --input pasted.md
//!
//! # Move a stored context to its next session
//! cyclecoach-cli advance --context context.json --write
//!
//! # Progress insights and a weight recommendation from a workout log
//! cyclecoach-cli insights --workouts workouts.json --from 2025-01-01
//! cyclecoach-cli recommend --workouts workouts.json --exercise "Bench Press"
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::debug;
use uuid::Uuid;

use cyclecoach::config::CoachConfig;

#[derive(Parser)]
#[command(
    name = "cyclecoach-cli",
    about = "CycleCoach training engine CLI",
    long_about = "Generate AI coaching meta-prompts and inspect training progress from JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate the full meta-prompt for the context's current session
    Prompt {
        /// User profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Session context JSON file (performance log included)
        #[arg(long)]
        context: PathBuf,

        /// Language code, defaults to `CYCLECOACH_LANGUAGE` or English
        #[arg(long)]
        language: Option<String>,

        /// Generation date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Print the metadata embedded in a previously generated prompt
    Extract {
        /// Text file to scan; reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Advance a session context to its next session
    Advance {
        /// Session context JSON file
        #[arg(long)]
        context: PathBuf,

        /// Overwrite the context file instead of printing the result
        #[arg(long)]
        write: bool,
    },

    /// Progress insights for a workout log
    Insights {
        /// Workout records JSON file (array)
        #[arg(long)]
        workouts: PathBuf,

        /// Only analyse records of this user
        #[arg(long)]
        user: Option<Uuid>,

        /// Inclusive start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Inclusive end date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Weight recommendation for one exercise
    Recommend {
        /// Workout records JSON file (array)
        #[arg(long)]
        workouts: PathBuf,

        /// Exercise name, matched case-insensitively
        #[arg(long)]
        exercise: String,

        /// Only use records of this user
        #[arg(long)]
        user: Option<Uuid>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CoachConfig::from_env()?;
    if cli.verbose {
        "debug".clone_into(&mut config.logging.level);
    }
    config.logging.init()?;
    debug!("CycleCoach CLI started");

    match cli.command {
        Command::Prompt {
            profile,
            context,
            language,
            date,
        } => commands::prompt(&config, &profile, &context, language.as_deref(), date),
        Command::Extract { input } => commands::extract(input.as_deref()),
        Command::Advance { context, write } => commands::advance(&context, write),
        Command::Insights {
            workouts,
            user,
            from,
            to,
        } => commands::insights(&config, &workouts, user, from, to).await,
        Command::Recommend {
            workouts,
            exercise,
            user,
        } => commands::recommend(&config, &workouts, &exercise, user).await,
    }
}
