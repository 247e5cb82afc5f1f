// ABOUTME: Progress analysis engine crate for the CycleCoach platform
// ABOUTME: Extracted from the main crate so analysis compiles and tests independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # CycleCoach Intelligence
//!
//! Analyses a user's workout history:
//!
//! - **`ProgressAnalyzer`**: personal records, volume trends, streaks, weekly
//!   frequency, body region and muscle group balance, user-level insights
//! - **`WeightRecommender`**: next-session weight from last difficulty and trend
//! - **keywords**: exercise-name classification tables
//! - **defaults**: the single safe-default policy for "no data" conditions

/// Analysis thresholds and their validation
pub mod config;

/// Safe default values for empty histories and windows
pub mod defaults;

/// Exercise-name keyword tables
pub mod keywords;

/// Progress analysis engine
pub mod progress_analyzer;

/// Weight recommendation engine
pub mod weight_recommender;

pub use config::{AnalysisConfig, ConfigError};
pub use keywords::{BodyRegion, MuscleGroup};
pub use progress_analyzer::{exercise_history, most_recent_first, ProgressAnalyzer};
pub use weight_recommender::WeightRecommender;
