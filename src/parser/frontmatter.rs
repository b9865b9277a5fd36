//! YAML front-matter extraction.
//!
//! A document looks like:
//!
//! ```text
//! ---
//! layout: api-command
//! command: count
//! ---
//!
//! # Command syntax #
//! ...
//! ```
//!
//! Anything before the opening `---` is ignored. Only the first two delimiter
//! lines count; a `---` further down belongs to the body.

use crate::error::{DocError, Result};
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::LazyLock;

static RE_DELIMITER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^---\s*$").unwrap());

/// Header and body slices of a document.
#[derive(Debug, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    pub header: &'a str,
    pub body: &'a str,
}

/// Split `content` at its front-matter delimiters.
pub fn split(content: &str) -> Result<FrontMatter<'_>> {
    let mut header_start = None;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let end = offset + line.len();
        if RE_DELIMITER.is_match(line.trim_end_matches(['\n', '\r'])) {
            match header_start {
                None => header_start = Some(end),
                Some(start) => {
                    return Ok(FrontMatter {
                        header: &content[start..offset],
                        body: &content[end..],
                    })
                }
            }
        }
        offset = end;
    }

    Err(DocError::MalformedDocument(match header_start {
        None => "no front matter".to_string(),
        Some(_) => "front matter is never closed".to_string(),
    }))
}

/// Decode header text into a YAML mapping.
pub fn decode(header: &str) -> Result<Mapping> {
    match serde_yaml::from_str::<Value>(header) {
        Ok(Value::Mapping(map)) => Ok(map),
        Ok(other) => Err(DocError::MalformedHeader(format!(
            "expected a mapping, found {}",
            kind(&other)
        ))),
        Err(e) => Err(DocError::MalformedHeader(e.to_string())),
    }
}

/// Render a scalar YAML value as text. Null, sequences and mappings yield `None`.
pub fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
