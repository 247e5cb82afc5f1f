// ABOUTME: Prompt composition settings: base template, user info fragment, and splice anchor
// ABOUTME: Custom templates are validated to keep the metadata block extractable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cyclecoach_core::constants::metadata::{END_MARKER, START_MARKER};
use cyclecoach_core::errors::{AppError, AppResult};

/// Built-in meta-prompt template
pub const BASE_PROMPT_TEMPLATE: &str = include_str!("templates/base_prompt.md");

/// Built-in athlete profile fragment
pub const USER_INFO_TEMPLATE: &str = include_str!("templates/user_info.md");

/// Literal line the user info fragment is inserted before
pub const USER_INFO_ANCHOR: &str = "## CURRENT SESSION";

/// Placeholder replaced by the JSON metadata payload
pub const METADATA_PLACEHOLDER: &str = "{{metadata}}";

/// Templates used by the prompt composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    /// Meta-prompt template
    pub base_template: String,
    /// Fragment describing the athlete
    pub user_info_template: String,
    /// Substring the fragment is spliced in front of
    pub user_info_anchor: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            base_template: BASE_PROMPT_TEMPLATE.to_owned(),
            user_info_template: USER_INFO_TEMPLATE.to_owned(),
            user_info_anchor: USER_INFO_ANCHOR.to_owned(),
        }
    }
}

impl PromptConfig {
    /// Config with a custom base template and the built-in fragment
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails [`PromptConfig::validate`]
    pub fn with_base_template(base_template: impl Into<String>) -> AppResult<Self> {
        let config = Self {
            base_template: base_template.into(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// The base template must carry the metadata placeholder between the start
    /// and end markers, in that order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first missing piece
    pub fn validate(&self) -> AppResult<()> {
        let template = &self.base_template;
        let start = template
            .find(START_MARKER)
            .ok_or_else(|| AppError::config("Prompt template is missing the metadata start marker"))?;
        let placeholder = template[start..]
            .find(METADATA_PLACEHOLDER)
            .map(|offset| start + offset)
            .ok_or_else(|| {
                AppError::config("Prompt template has no {{metadata}} placeholder after the start marker")
            })?;
        if !template[placeholder..].contains(END_MARKER) {
            return Err(AppError::config(
                "Prompt template is missing the metadata end marker after {{metadata}}",
            ));
        }
        if self.user_info_anchor.is_empty() {
            return Err(AppError::config("User info anchor must not be empty"));
        }
        Ok(())
    }
}
