//! Companion lookup: category metadata from the other dialect's file.
//!
//! `api/python/accessing-rql/run.md` has a companion at
//! `api/javascript/accessing-rql/run.md` whose `io` field says what kind of
//! value the command is called on. Many commands (e.g. `repl`) have no
//! companion, so every expected failure here means "no data", not an error.

use super::frontmatter;
use crate::config::Dialects;
use crate::error::{DocError, Result};
use crate::model::CompanionInfo;
use serde_yaml::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Why a companion yielded no data.
#[derive(Debug, Error)]
enum Absent {
    #[error("not found")]
    NotFound,
    #[error("undecodable: {0}")]
    Undecodable(String),
    #[error("no `io` category")]
    MissingIo,
}

/// Path of `primary`'s companion, or `None` when the path carries no dialect token.
pub fn companion_path(primary: &Path, dialects: &Dialects) -> Option<PathBuf> {
    let path = primary.to_str()?;
    if !path.contains(&dialects.primary) {
        return None;
    }
    Some(PathBuf::from(
        path.replace(&dialects.primary, &dialects.companion),
    ))
}

/// Read category metadata from `primary`'s companion.
///
/// `Ok(None)` covers a missing file, an undecodable file and a missing `io`
/// key. Other I/O failures are returned.
pub fn lookup(primary: &Path, dialects: &Dialects) -> Result<Option<CompanionInfo>> {
    let Some(path) = companion_path(primary, dialects) else {
        return Ok(None);
    };

    match read(&path)? {
        Ok(info) => Ok(Some(info)),
        Err(reason) => {
            debug!(companion = %path.display(), %reason, "no companion data");
            Ok(None)
        }
    }
}

fn read(path: &Path) -> Result<std::result::Result<CompanionInfo, Absent>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Err(Absent::NotFound)),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return Ok(Err(Absent::Undecodable(e.to_string())))
        }
        Err(source) => {
            return Err(DocError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    Ok(parse(&content))
}

/// Extract the category tag from companion file content.
fn parse(content: &str) -> std::result::Result<CompanionInfo, Absent> {
    let header = frontmatter::split(content)
        .and_then(|fm| frontmatter::decode(fm.header))
        .map_err(|e| Absent::Undecodable(e.to_string()))?;

    // io: [[sequence, number], [r, number]]
    let tag = match header.get("io") {
        Some(Value::Sequence(pairs)) => match pairs.first() {
            Some(Value::Sequence(pair)) => pair.first(),
            _ => None,
        },
        _ => None,
    }
    .ok_or(Absent::MissingIo)?;

    match tag {
        Value::Null => Ok(CompanionInfo { category: None }),
        other => frontmatter::scalar(other)
            .map(|tag| CompanionInfo {
                category: Some(tag),
            })
            .ok_or(Absent::MissingIo),
    }
}
