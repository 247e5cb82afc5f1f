// ABOUTME: Exercise-name keyword tables for body region and muscle group classification
// ABOUTME: Tables are ordered data; the first category with a matching keyword wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Keyword classification tables
//!
//! Classification is a case-insensitive substring match. Tables are checked in
//! order, so more specific categories come first ("leg raise" is core work,
//! "leg curl" is leg work).

use serde::{Deserialize, Serialize};

/// Coarse body region used for the upper/lower/core split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyRegion {
    /// Chest, back, shoulders, arms
    UpperBody,
    /// Hips and legs
    LowerBody,
    /// Trunk stabilisation and flexion
    Core,
}

/// Fixed muscle groups reported in prompt metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, traps, spinal erectors
    Back,
    /// Deltoids
    Shoulders,
    /// Biceps, triceps, forearms
    Arms,
    /// Quads, hamstrings, glutes, calves
    Legs,
}

impl MuscleGroup {
    /// All groups in reporting order
    pub const ALL: [Self; 5] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Arms,
        Self::Legs,
    ];
}

/// Ordered keyword table
pub type KeywordTable<C> = &'static [(C, &'static [&'static str])];

/// Body region keywords, checked core first, then lower body, then upper body
pub const BODY_REGION_KEYWORDS: KeywordTable<BodyRegion> = &[
    (
        BodyRegion::Core,
        &[
            "plank",
            "crunch",
            "sit-up",
            "sit up",
            "situp",
            "russian twist",
            "ab wheel",
            "ab rollout",
            "abdominal",
            "hollow",
            "dead bug",
            "leg raise",
            "knee raise",
            "pallof",
            "oblique",
            "mountain climber",
            "core",
        ],
    ),
    (
        BodyRegion::LowerBody,
        &[
            "squat",
            "deadlift",
            "lunge",
            "leg",
            "calf",
            "calves",
            "hip thrust",
            "glute",
            "hamstring",
            "quad",
            "step-up",
            "step up",
            "bridge",
            "good morning",
        ],
    ),
    (
        BodyRegion::UpperBody,
        &[
            "bench",
            "press",
            "row",
            "pull",
            "chin",
            "curl",
            "fly",
            "flye",
            "dip",
            "push-up",
            "pushup",
            "tricep",
            "bicep",
            "shoulder",
            "lateral raise",
            "shrug",
            "chest",
            "lat ",
        ],
    ),
];

/// Muscle group keywords, checked shoulders, legs, arms, chest, back
pub const MUSCLE_GROUP_KEYWORDS: KeywordTable<MuscleGroup> = &[
    (
        MuscleGroup::Shoulders,
        &[
            "overhead press",
            "shoulder",
            "military",
            "lateral raise",
            "front raise",
            "arnold",
            "rear delt",
            "upright row",
        ],
    ),
    (
        MuscleGroup::Legs,
        &[
            "squat",
            "lunge",
            "leg",
            "calf",
            "calves",
            "hip thrust",
            "glute",
            "hamstring",
            "quad",
            "step-up",
            "step up",
        ],
    ),
    (
        MuscleGroup::Arms,
        &[
            "curl",
            "tricep",
            "bicep",
            "skull",
            "hammer",
            "kickback",
            "pushdown",
        ],
    ),
    (
        MuscleGroup::Chest,
        &[
            "bench", "chest", "fly", "flye", "push-up", "pushup", "dip", "pec",
        ],
    ),
    (
        MuscleGroup::Back,
        &[
            "row", "pull-up", "pullup", "chin", "pulldown", "deadlift", "lat ", "face pull",
            "shrug",
        ],
    ),
];

/// Return the first category whose keyword list matches `exercise_name`
#[must_use]
pub fn classify<C: Copy>(table: KeywordTable<C>, exercise_name: &str) -> Option<C> {
    // Pad so trailing-space keywords ("lat ") also match at the end of a name
    let haystack = format!("{} ", exercise_name.to_lowercase());
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| haystack.contains(keyword)))
        .map(|(category, _)| *category)
}

/// Classify an exercise into a body region
#[must_use]
pub fn body_region(exercise_name: &str) -> Option<BodyRegion> {
    classify(BODY_REGION_KEYWORDS, exercise_name)
}

/// Classify an exercise into a muscle group
#[must_use]
pub fn muscle_group(exercise_name: &str) -> Option<MuscleGroup> {
    classify(MUSCLE_GROUP_KEYWORDS, exercise_name)
}
