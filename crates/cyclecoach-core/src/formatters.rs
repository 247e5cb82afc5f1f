// ABOUTME: Number formatting helpers shared by prompt rendering and metadata payloads
// ABOUTME: Keeps weights readable (no trailing .0) and rounds derived statistics consistently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Number formatting for prompt text

/// Largest magnitude that is still printed as an integer
const MAX_INTEGRAL_DISPLAY: f64 = 1e15;

/// Format a number the way a person would write it: `60` rather than `60.0`,
/// `62.5` stays `62.5`. Non-finite values format as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    if value.fract() == 0.0 && value.abs() < MAX_INTEGRAL_DISPLAY {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Round to a fixed number of decimal places
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
