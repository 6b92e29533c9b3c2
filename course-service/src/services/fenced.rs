//! Locate a fenced JSON block inside free-form model output.
//!
//! Grammar: "```json", a line break, a lazily matched body (may span lines),
//! a line break, then "```". The first such block wins.

use once_cell::sync::Lazy;
use regex::Regex;

static JSON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json\r?\n(.*?)\r?\n```").expect("Invalid regex pattern"));

/// Result of looking for a fenced block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FencedBlock<'a> {
    /// Whether a fence pair was found.
    pub found: bool,
    /// Fence body when found, otherwise the whole input.
    pub payload: &'a str,
}

pub fn extract_json_block(text: &str) -> FencedBlock<'_> {
    match JSON_FENCE.captures(text).and_then(|caps| caps.get(1)) {
        Some(body) => FencedBlock {
            found: true,
            payload: body.as_str(),
        },
        None => FencedBlock {
            found: false,
            payload: text,
        },
    }
}
