// ABOUTME: Environment-driven configuration aggregate for the CycleCoach engine
// ABOUTME: Bundles analysis thresholds, default output language, prompt templates, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration comes from environment variables only:
//!
//! - `CYCLECOACH_ANALYSIS_*`: analysis thresholds, see [`AnalysisConfig::from_env`]
//! - `CYCLECOACH_LANGUAGE`: default prompt language code (`en`, `es`, ...)
//! - `RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT`: logging, see [`LoggingConfig::from_env`]

use std::env;

use tracing::{debug, info};

use cyclecoach_core::constants::defaults::LANGUAGE_CODE;
use cyclecoach_core::errors::AppResult;
use cyclecoach_core::models::Language;
pub use cyclecoach_intelligence::{AnalysisConfig, ConfigError};

use crate::logging::LoggingConfig;
use crate::prompts::{PromptComposer, PromptConfig};
use crate::templates::TemplateRenderer;
use cyclecoach_intelligence::{ProgressAnalyzer, WeightRecommender};

/// Environment variable holding the default prompt language
pub const LANGUAGE_ENV_VAR: &str = "CYCLECOACH_LANGUAGE";

/// Complete engine configuration
#[derive(Debug, Clone, Default)]
pub struct CoachConfig {
    /// Analysis thresholds
    pub analysis: AnalysisConfig,
    /// Language used when a caller does not pick one
    pub default_language: Language,
    /// Prompt templates
    pub prompt: PromptConfig,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl CoachConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an analysis override does not parse or the resulting
    /// thresholds fail validation
    pub fn from_env() -> AppResult<Self> {
        let analysis = AnalysisConfig::from_env()?;
        let language_code = env::var(LANGUAGE_ENV_VAR).unwrap_or_else(|_| {
            debug!("{LANGUAGE_ENV_VAR} not set, using '{LANGUAGE_CODE}'");
            LANGUAGE_CODE.to_owned()
        });
        let config = Self {
            analysis,
            default_language: Language::from_code_or_default(&language_code),
            prompt: PromptConfig::default(),
            logging: LoggingConfig::from_env(),
        };
        config.prompt.validate()?;

        info!(
            language = %config.default_language,
            trend_window = config.analysis.trend.window_size,
            log_format = %config.logging.format,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Analyzer using these thresholds
    #[must_use]
    pub fn analyzer(&self) -> ProgressAnalyzer {
        ProgressAnalyzer::with_config(self.analysis.clone())
    }

    /// Recommender using these thresholds
    #[must_use]
    pub fn recommender(&self) -> WeightRecommender {
        WeightRecommender::with_config(self.analysis.clone())
    }

    /// Prompt composer wired with collaborators built from this configuration
    #[must_use]
    pub fn composer(&self) -> PromptComposer {
        PromptComposer::new(
            self.analyzer(),
            self.recommender(),
            TemplateRenderer::new(),
            self.prompt.clone(),
        )
    }
}
