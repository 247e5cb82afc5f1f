// ABOUTME: Embeds and extracts the JSON metadata block carried between marker lines in prompt text
// ABOUTME: Extraction is all-or-nothing: missing markers or malformed JSON yield no metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::debug;

use cyclecoach_core::constants::metadata::{END_MARKER, START_MARKER};
use cyclecoach_core::errors::AppResult;
use cyclecoach_core::models::PromptMetadata;

/// Pretty-printed JSON payload placed between the markers.
///
/// `<` and `>` only occur inside JSON strings, so they are written as
/// `\u003c` / `\u003e` and a marker can never appear inside the payload.
///
/// # Errors
///
/// Returns an error if the metadata cannot be serialized
pub fn metadata_payload(metadata: &PromptMetadata) -> AppResult<String> {
    let json = serde_json::to_string_pretty(metadata)?;
    Ok(json.replace('<', "\\u003c").replace('>', "\\u003e"))
}

/// Append a marker-delimited metadata block to `text`
///
/// # Errors
///
/// Returns an error if the metadata cannot be serialized
pub fn embed_metadata(text: &str, metadata: &PromptMetadata) -> AppResult<String> {
    let payload = metadata_payload(metadata)?;
    let separator = if text.is_empty() || text.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    Ok(format!(
        "{text}{separator}\n{START_MARKER}\n{payload}\n{END_MARKER}\n"
    ))
}

/// Recover the metadata embedded in previously generated text.
///
/// The block is the last start marker in `text` and the first end marker after
/// it, so marker strings quoted earlier in the prose are skipped. Returns `None`
/// when either marker is missing, the end marker only appears before the start
/// marker, or the payload does not parse. Unknown keys in the payload are
/// ignored.
#[must_use]
pub fn extract_metadata(text: &str) -> Option<PromptMetadata> {
    let Some(start) = text.rfind(START_MARKER) else {
        debug!("No metadata start marker found");
        return None;
    };
    let body_start = start + START_MARKER.len();
    let Some(length) = text[body_start..].find(END_MARKER) else {
        debug!("No metadata end marker after start marker");
        return None;
    };

    let payload = text[body_start..body_start + length].trim();
    match serde_json::from_str(payload) {
        Ok(metadata) => Some(metadata),
        Err(e) => {
            debug!(error = %e, "Embedded metadata is malformed");
            None
        }
    }
}
