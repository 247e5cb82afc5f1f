// ABOUTME: Main library entry point for the CycleCoach adaptive training engine
// ABOUTME: Templating, session cycle, prompt composition, persistence collaborator, config, logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # CycleCoach
//!
//! Generates and re-generates a natural-language "meta-prompt" that a user
//! copies into an external AI assistant to be coached through a workout.
//!
//! ## Components
//!
//! - **Templates**: `{{key}}` placeholders and `{{#key}}...{{/key}}` blocks
//! - **Session**: eight fixed session slots repeated in an endless cycle
//! - **Analysis** (`cyclecoach-intelligence`): personal records, trends,
//!   weight recommendations, consistency and balance insights
//! - **Prompts**: composes the prompt and embeds machine-readable metadata
//!   that [`prompts::extract_metadata`] recovers from pasted text
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use cyclecoach::prompts::{extract_metadata, PromptComposer};
//! use cyclecoach::models::{Language, SessionContext, UserProfile};
//! use uuid::Uuid;
//!
//! let user_id = Uuid::new_v4();
//! let profile = UserProfile::new(user_id, "Alex");
//! let ctx = SessionContext::new(user_id, Utc::now());
//!
//! let composer = PromptComposer::default();
//! let prompt = composer.generate_full_prompt(&profile, &ctx, Language::English)?;
//! let metadata = extract_metadata(&prompt);
//! assert_eq!(metadata.map(|m| m.session_number), Some(1));
//! # Ok::<(), cyclecoach::errors::AppError>(())
//! ```

/// Environment configuration aggregate
pub mod config;

/// Logging setup
pub mod logging;

/// Prompt composition and metadata codec
pub mod prompts;

/// Session cycle tracker
pub mod session;

/// Persistence collaborator
pub mod storage;

/// Template parsing and rendering
pub mod templates;

pub use cyclecoach_core::{constants, errors, formatters, models};
pub use cyclecoach_intelligence as intelligence;
