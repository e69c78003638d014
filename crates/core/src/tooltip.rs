//! Classifies raw tooltip text into display nodes, one per line.
//!
//! Rules are tried in order and the first match wins: bullet glyph, numbered
//! item, trailing colon header, `[text](url)` link, plain text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const BULLET: char = '•';

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.").expect("numbered list pattern is valid"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("link pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TooltipNode {
    /// The full line is kept, marker included.
    ListItem { text: String, ordered: bool },
    Header { text: String },
    /// `url` is passed through untouched.
    Link { text: String, url: String },
    PlainLine { text: String },
}

/// A node plus whether a line break follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipLine {
    pub node: TooltipNode,
    pub line_break: bool,
}

/// Format `raw` into display lines. Whitespace-only lines produce nothing.
#[must_use]
pub fn format(raw: &str) -> Vec<TooltipLine> {
    if raw.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = raw.split('\n').collect();
    let last = lines.len() - 1;

    lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            Some(classify(line, index < last))
        })
        .collect()
}

fn classify(line: &str, has_next: bool) -> TooltipLine {
    if line.starts_with(BULLET) {
        return TooltipLine {
            node: TooltipNode::ListItem {
                text: line.to_string(),
                ordered: false,
            },
            line_break: false,
        };
    }

    if NUMBERED.is_match(line) {
        return TooltipLine {
            node: TooltipNode::ListItem {
                text: line.to_string(),
                ordered: true,
            },
            line_break: false,
        };
    }

    if line.ends_with(':') {
        return TooltipLine {
            node: TooltipNode::Header {
                text: line.to_string(),
            },
            line_break: false,
        };
    }

    if line.contains('[') && line.contains(']') {
        if let Some(caps) = LINK.captures(line) {
            return TooltipLine {
                node: TooltipNode::Link {
                    text: caps[1].to_string(),
                    url: caps[2].to_string(),
                },
                line_break: true,
            };
        }
    }

    TooltipLine {
        node: TooltipNode::PlainLine {
            text: line.to_string(),
        },
        line_break: has_next,
    }
}
