// ABOUTME: Minimal prompt templating language with placeholders and repeated blocks
// ABOUTME: Parsing and rendering are split so templates can be validated ahead of use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Templates
//!
//! Two constructs are supported:
//!
//! - `{{key}}` substitutes a value from the data scope
//! - `{{#key}} ... {{/key}}` repeats a fragment for each item of a sequence

/// Template text to node tree
pub mod parser;

/// Node tree plus JSON data to text
pub mod renderer;

pub use parser::{Node, Template};
pub use renderer::{value_to_text, RenderData, TemplateRenderer};

impl TemplateRenderer {
    /// Parse `template` without rendering it
    #[must_use]
    pub fn parse(template: &str) -> Template {
        Template::parse(template)
    }

    /// Distinct top-level placeholder names in `template`
    #[must_use]
    pub fn placeholders(template: &str) -> Vec<String> {
        Template::parse(template).placeholders()
    }
}
