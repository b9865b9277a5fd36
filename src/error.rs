//! Error taxonomy for the documentation pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    /// Front matter is missing a delimiter.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// Front matter exists but does not decode to a mapping.
    #[error("malformed front matter: {0}")]
    MalformedHeader(String),

    #[error("front matter has no `command` key")]
    MissingCommandName,

    #[error("unknown io category `{0}`")]
    UnknownCategory(String),

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DocError>;
