// ABOUTME: Parser turning template text into a tree of text, placeholder, and block nodes
// ABOUTME: Unterminated block openers and stray closers are preserved as literal text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::OnceLock;

use regex::Regex;

/// `{{name}}`, `{{#name}}` or `{{/name}}`, whitespace inside the braces allowed
const TAG_PATTERN: &str = r"\{\{\s*([#/]?)\s*([A-Za-z0-9_.\-]+)\s*\}\}";

static TAG_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn tag_regex() -> Option<&'static Regex> {
    TAG_REGEX.get_or_init(|| Regex::new(TAG_PATTERN).ok()).as_ref()
}

/// One parsed template element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text
    Text(String),
    /// `{{name}}`; `raw` is the original tag, emitted when the name is unresolved
    Placeholder {
        /// Key looked up in the data scope
        name: String,
        /// Tag exactly as written
        raw: String,
    },
    /// `{{#name}} ... {{/name}}` repeated once per item of a sequence
    Block {
        /// Key of the sequence in the data scope
        name: String,
        /// Fragment rendered per item
        children: Vec<Node>,
    },
}

/// Parsed template, reusable across render calls
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    nodes: Vec<Node>,
}

/// Block opened but not yet closed while parsing
struct OpenBlock {
    name: String,
    raw: String,
    children: Vec<Node>,
}

impl Template {
    /// Parse template text; never fails
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let Some(regex) = tag_regex() else {
            return Self {
                nodes: vec![Node::Text(source.to_owned())],
            };
        };

        let mut root: Vec<Node> = Vec::new();
        let mut stack: Vec<OpenBlock> = Vec::new();
        let mut cursor = 0;

        for captures in regex.captures_iter(source) {
            let Some(tag) = captures.get(0) else {
                continue;
            };
            let sigil = captures.get(1).map_or("", |m| m.as_str());
            let name = captures.get(2).map_or("", |m| m.as_str()).to_owned();
            let raw = tag.as_str().to_owned();

            let text = &source[cursor..tag.start()];
            cursor = tag.end();
            if !text.is_empty() {
                current(&mut root, &mut stack).push(Node::Text(text.to_owned()));
            }

            match sigil {
                "#" => stack.push(OpenBlock {
                    name,
                    raw,
                    children: Vec::new(),
                }),
                "/" => {
                    if stack.last().is_some_and(|open| open.name == name) {
                        if let Some(open) = stack.pop() {
                            current(&mut root, &mut stack).push(Node::Block {
                                name: open.name,
                                children: open.children,
                            });
                        }
                    } else {
                        current(&mut root, &mut stack).push(Node::Text(raw));
                    }
                }
                _ => current(&mut root, &mut stack).push(Node::Placeholder { name, raw }),
            }
        }

        let tail = &source[cursor..];
        if !tail.is_empty() {
            current(&mut root, &mut stack).push(Node::Text(tail.to_owned()));
        }

        // Unterminated blocks fall back to literal opener followed by their content
        while let Some(open) = stack.pop() {
            let parent = current(&mut root, &mut stack);
            parent.push(Node::Text(open.raw));
            parent.extend(open.children);
        }

        Self {
            nodes: coalesce_text(root),
        }
    }

    /// Parsed nodes
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Distinct top-level placeholder and block names, in first-occurrence order
    #[must_use]
    pub fn placeholders(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for node in &self.nodes {
            let name = match node {
                Node::Placeholder { name, .. } | Node::Block { name, .. } => name,
                Node::Text(_) => continue,
            };
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }
}

fn current<'a>(root: &'a mut Vec<Node>, stack: &'a mut [OpenBlock]) -> &'a mut Vec<Node> {
    match stack.last_mut() {
        Some(open) => &mut open.children,
        None => root,
    }
}

/// Merge adjacent text nodes produced by literal fallbacks
fn coalesce_text(nodes: Vec<Node>) -> Vec<Node> {
    let mut merged: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        let node = match node {
            Node::Block { name, children } => Node::Block {
                name,
                children: coalesce_text(children),
            },
            other => other,
        };
        if let (Some(Node::Text(previous)), Node::Text(text)) = (merged.last_mut(), &node) {
            previous.push_str(text);
            continue;
        }
        merged.push(node);
    }
    merged
}
