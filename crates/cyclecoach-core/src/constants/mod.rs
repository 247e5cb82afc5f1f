// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Session cycle sizes, metadata markers, and default values for the CycleCoach engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list.

/// Session cycle constants
pub mod cycle {
    /// Number of fixed session slots in one training cycle
    pub const SESSIONS_PER_CYCLE: u32 = 8;
    /// Cycle number assigned to a freshly created session context
    pub const INITIAL_CYCLE: u32 = 1;
    /// Session number assigned to a freshly created session context
    pub const INITIAL_SESSION: u32 = 1;
}

/// Embedded metadata wire format
pub mod metadata {
    /// Literal line opening the embedded metadata payload
    pub const START_MARKER: &str = "<!-- CYCLECOACH_METADATA_START -->";
    /// Literal line closing the embedded metadata payload
    pub const END_MARKER: &str = "<!-- CYCLECOACH_METADATA_END -->";
    /// Date format used by the `date` field (ISO 8601 calendar date)
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Default values used when no data is available
pub mod defaults {
    /// Weight unit label used when a profile does not specify one
    pub const WEIGHT_UNIT: &str = "kg";
    /// Recommended weight for an exercise with no history
    pub const FIRST_TIME_WEIGHT: f64 = 20.0;
    /// Confidence attached to the first-time recommendation
    pub const FIRST_TIME_CONFIDENCE: f64 = 0.5;
    /// Language code used when none is supplied or the code is unknown
    pub const LANGUAGE_CODE: &str = "en";
}

/// Service names for structured logging
pub mod service_names {
    /// Name reported by the CLI and logging setup
    pub const CYCLECOACH: &str = "cyclecoach";
}
