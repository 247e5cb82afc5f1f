// ABOUTME: Core types and constants for the CycleCoach adaptive training engine
// ABOUTME: Foundation crate with error handling, data models, formatters, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # CycleCoach Core
//!
//! Foundation crate providing shared types and constants for the CycleCoach
//! training engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Session cycle, metadata marker and default value constants
//! - **models**: Workout records, session context, user profile and derived analysis types
//! - **formatters**: Number formatting shared by prompt text and metadata

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Number formatting helpers for prompt text
pub mod formatters;

/// Core data models (workout records, session context, insights, metadata)
pub mod models;
