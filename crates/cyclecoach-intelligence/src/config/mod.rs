// ABOUTME: Configuration module for the cyclecoach-intelligence crate
// ABOUTME: Re-exports analysis configuration types and their error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Analysis thresholds (trend, consistency, balance, progression)
pub mod analysis;
/// Configuration validation errors
pub mod error;

pub use analysis::{
    AnalysisConfig, BalanceConfig, ConsistencyConfig, OverallProgressConfig, ProgressionConfig,
    TrendConfig,
};
pub use error::ConfigError;
