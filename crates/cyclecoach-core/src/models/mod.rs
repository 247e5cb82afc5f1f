// ABOUTME: Core data models and types for the CycleCoach engine
// ABOUTME: Re-exports workout, session, profile, progress and metadata structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data exchanged between the engine and its collaborators.
//!
//! ## Design Principles
//!
//! - **Storage Agnostic**: models know nothing about how they are persisted
//! - **Derived types are never cached**: progress and insight values are
//!   recomputed from history on every query
//! - **Serializable**: every model round-trips through JSON

mod metadata;
mod profile;
mod progress;
mod session;
mod workout;

// Workout domain
pub use workout::{Difficulty, WorkoutRecord, WorkoutRecordBuilder};

// Session domain
pub use session::{CycleState, Measurements, SessionContext, SessionContextUpdate};

// Profile domain
pub use profile::{ExperienceLevel, Language, UserProfile};

// Derived analysis
pub use progress::{
    Consistency, ExerciseProgress, MuscleBalance, OverallProgress, PersonalRecord,
    ProgressInsights, TimeRange, Trend, WeightAlternatives, WeightRecommendation,
};

// Embedded prompt metadata
pub use metadata::{
    BalanceRating, ExerciseTarget, LastPerformance, MuscleGroupBalance, PromptMetadata,
};
