// ABOUTME: Template renderer resolving placeholders and expanding blocks against JSON data
// ABOUTME: Unsupplied placeholders stay verbatim so several render passes can be chained
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::{Map, Value};
use tracing::trace;

use cyclecoach_core::formatters::format_number;

use super::parser::{Node, Template};

/// Separator placed between the rendered items of a block
const DEFAULT_BLOCK_SEPARATOR: &str = "\n";

/// Data scope for rendering: a JSON object
pub type RenderData = Map<String, Value>;

/// Plain-text template renderer.
///
/// - `{{key}}` becomes the text of `data[key]`; `null` renders empty and a
///   key that was never supplied is left as written.
/// - `{{#key}}…{{/key}}` renders its fragment once per object in the
///   `data[key]` sequence, resolving names against that item only. A name
///   the item lacks stays as written. Absent or non-sequence values render
///   nothing.
///
/// There are no conditionals and no escaping: output is plain text.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    block_separator: String,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self {
            block_separator: DEFAULT_BLOCK_SEPARATOR.to_owned(),
        }
    }
}

impl TemplateRenderer {
    /// Renderer joining block items with newlines
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer joining block items with a custom separator
    #[must_use]
    pub fn with_block_separator(separator: impl Into<String>) -> Self {
        Self {
            block_separator: separator.into(),
        }
    }

    /// Parse and render in one step
    #[must_use]
    pub fn render(&self, template: &str, data: &RenderData) -> String {
        self.render_template(&Template::parse(template), data)
    }

    /// Render a pre-parsed template
    #[must_use]
    pub fn render_template(&self, template: &Template, data: &RenderData) -> String {
        let mut out = String::new();
        self.render_nodes(template.nodes(), data, &mut out);
        out
    }

    /// Render against any JSON value; non-object data leaves the template untouched
    #[must_use]
    pub fn render_value(&self, template: &str, data: &Value) -> String {
        match data {
            Value::Object(map) => self.render(template, map),
            _ => template.to_owned(),
        }
    }

    /// Top-level names the template references that `data` does not supply
    #[must_use]
    pub fn unresolved(&self, template: &str, data: &RenderData) -> Vec<String> {
        Template::parse(template)
            .placeholders()
            .into_iter()
            .filter(|name| !data.contains_key(name))
            .collect()
    }

    fn render_nodes(&self, nodes: &[Node], scope: &RenderData, out: &mut String) {
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Placeholder { name, raw } => match scope.get(name) {
                    Some(value) => out.push_str(&value_to_text(value)),
                    None => out.push_str(raw),
                },
                Node::Block { name, children } => {
                    self.render_block(name, children, scope, out);
                }
            }
        }
    }

    /// Each item is the only scope of its fragment; outer names do not leak in
    fn render_block(&self, name: &str, children: &[Node], scope: &RenderData, out: &mut String) {
        let Some(Value::Array(items)) = scope.get(name) else {
            trace!(block = name, "Block data absent or not a sequence, rendering empty");
            return;
        };

        let rendered: Vec<String> = items
            .iter()
            .filter_map(Value::as_object)
            .map(|item| {
                let mut fragment = String::new();
                self.render_nodes(children, item, &mut fragment);
                fragment
            })
            .collect();
        out.push_str(&rendered.join(&self.block_separator));
    }
}

/// Text form of a value as it appears in rendered output
#[must_use]
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number
            .as_i64()
            .map(|n| n.to_string())
            .or_else(|| number.as_u64().map(|n| n.to_string()))
            .unwrap_or_else(|| format_number(number.as_f64().unwrap_or_default())),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> RenderData {
        match value {
            Value::Object(map) => map,
            _ => RenderData::new(),
        }
    }

    #[test]
    fn test_value_to_text() {
        assert_eq!(value_to_text(&json!(null)), "");
        assert_eq!(value_to_text(&json!(42)), "42");
        assert_eq!(value_to_text(&json!(60.0)), "60");
        assert_eq!(value_to_text(&json!(62.5)), "62.5");
        assert_eq!(value_to_text(&json!(["a", 1, true])), "a, 1, true");
        assert_eq!(value_to_text(&json!({"k": 1})), r#"{"k":1}"#);
    }

    #[test]
    fn test_null_renders_empty() {
        let renderer = TemplateRenderer::new();
        let out = renderer.render("[{{notes}}]", &data(json!({"notes": null})));
        assert_eq!(out, "[]");
    }

    #[test]
    fn test_blocks_do_not_fall_back_to_outer_scope() {
        let renderer = TemplateRenderer::new();
        let out = renderer.render(
            "{{#days}}{{day}}:{{#lifts}}{{name}}@{{unit}}{{/lifts}}{{/days}}",
            &data(json!({
                "unit": "kg",
                "lifts": [{"name": "Outer"}],
                "days": [
                    {"day": "Mon", "lifts": [{"name": "Squat"}, {"name": "Row"}]},
                    {"day": "Tue"}
                ]
            })),
        );
        assert_eq!(out, "Mon:Squat@{{unit}}\nRow@{{unit}}\nTue:");
    }

    #[test]
    fn test_custom_separator_and_non_object_items_skipped() {
        let renderer = TemplateRenderer::with_block_separator(" | ");
        let out = renderer.render(
            "{{#xs}}{{v}}{{/xs}}",
            &data(json!({"xs": [{"v": 1}, 7, {"v": 2}]})),
        );
        assert_eq!(out, "1 | 2");
    }

    #[test]
    fn test_unresolved_lists_missing_names() {
        let renderer = TemplateRenderer::new();
        let missing = renderer.unresolved("{{a}} {{b}} {{#c}}{{/c}}", &data(json!({"a": 1})));
        assert_eq!(missing, vec!["b", "c"]);
    }

    #[test]
    fn test_render_value_non_object() {
        let renderer = TemplateRenderer::new();
        assert_eq!(renderer.render_value("{{x}}", &json!([1, 2])), "{{x}}");
    }
}
