// ABOUTME: User profile and output language models consumed by prompt composition
// ABOUTME: Language codes map to a single instruction line for the external AI assistant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::defaults::WEIGHT_UNIT;
use crate::errors::AppError;

/// Self-reported training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// Less than a year of structured training
    #[default]
    Beginner,
    /// One to three years
    Intermediate,
    /// More than three years
    Advanced,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        })
    }
}

fn default_weight_unit() -> String {
    WEIGHT_UNIT.to_owned()
}

const fn default_training_days() -> u32 {
    3
}

/// Profile details woven into the generated prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Owner
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Body weight, in `weight_unit`
    #[serde(default)]
    pub body_weight: Option<f64>,
    /// Height in centimetres
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Training goal in the user's own words
    #[serde(default)]
    pub goal: String,
    /// Experience level
    #[serde(default)]
    pub experience: ExperienceLevel,
    /// Planned sessions per week
    #[serde(default = "default_training_days")]
    pub training_days_per_week: u32,
    /// Available equipment
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Injuries or limitations
    #[serde(default)]
    pub limitations: Option<String>,
    /// Weight unit label
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,
}

impl UserProfile {
    /// Minimal profile with defaults for every optional field
    #[must_use]
    pub fn new(user_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            age: None,
            body_weight: None,
            height_cm: None,
            goal: String::new(),
            experience: ExperienceLevel::default(),
            training_days_per_week: default_training_days(),
            equipment: Vec::new(),
            limitations: None,
            weight_unit: default_weight_unit(),
        }
    }
}

/// Output language requested from the external AI assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    English,
    /// Spanish
    Spanish,
    /// French
    French,
    /// German
    German,
    /// Portuguese
    Portuguese,
    /// Italian
    Italian,
}

impl Language {
    /// ISO 639-1 code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Portuguese => "pt",
            Self::Italian => "it",
        }
    }

    /// Instruction line telling the assistant which language to answer in
    #[must_use]
    pub const fn instruction(&self) -> &'static str {
        match self {
            Self::English => "Respond in English.",
            Self::Spanish => "Responde en español.",
            Self::French => "Réponds en français.",
            Self::German => "Antworte auf Deutsch.",
            Self::Portuguese => "Responda em português.",
            Self::Italian => "Rispondi in italiano.",
        }
    }

    /// Parse a language code, falling back to English for unknown codes
    #[must_use]
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_else(|_| {
            tracing::debug!(code, "Unknown language code, falling back to English");
            Self::default()
        })
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        // Accept regional variants such as "es-MX" or "pt_BR"
        let primary = normalized
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        match primary {
            "en" | "english" => Ok(Self::English),
            "es" | "spanish" => Ok(Self::Spanish),
            "fr" | "french" => Ok(Self::French),
            "de" | "german" => Ok(Self::German),
            "pt" | "portuguese" => Ok(Self::Portuguese),
            "it" | "italian" => Ok(Self::Italian),
            _ => Err(AppError::invalid_input(format!("Unsupported language '{s}'"))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!("ES".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!("pt-BR".parse::<Language>().unwrap(), Language::Portuguese);
        assert_eq!(Language::from_code_or_default("xx"), Language::English);
        assert_eq!(Language::German.to_string(), "de");
    }

    #[test]
    fn test_profile_deserializes_with_defaults() {
        let json = format!(r#"{{"user_id":"{}","name":"Ana"}}"#, Uuid::new_v4());
        let profile: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile.weight_unit, "kg");
        assert_eq!(profile.training_days_per_week, 3);
        assert_eq!(profile.experience, ExperienceLevel::Beginner);
    }
}
