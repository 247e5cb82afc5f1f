// ABOUTME: Prompt composition service and the embedded metadata codec
// ABOUTME: Turns profile plus session context into copyable prompt text and back into metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meta-prompt generation
pub mod composer;

/// Templates and splice anchor
pub mod config;

/// Marker-delimited metadata block
pub mod metadata;

pub use composer::{format_exercise_list, PromptComposer};
pub use config::{PromptConfig, BASE_PROMPT_TEMPLATE, USER_INFO_ANCHOR, USER_INFO_TEMPLATE};
pub use metadata::{embed_metadata, extract_metadata, metadata_payload};
