//! Data model for parsed documentation — renderer-agnostic.

use std::fmt;

/// A fully-qualified symbol in the client library: a namespace prefix
/// (`rethinkdb.ast.RqlQuery.`, possibly empty) plus a symbol name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub namespace: String,
    pub symbol: String,
}

impl Target {
    pub fn new(namespace: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.namespace, self.symbol)
    }
}

/// Category metadata read from a companion file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionInfo {
    /// First element of the first `io` pair; `None` when the tag is null.
    pub category: Option<String>,
}

/// Complete parsed document from a single source file.
#[derive(Debug)]
pub struct Document {
    /// `command` from the front matter
    pub command: String,
    /// Resolved targets, in emission order (may be empty)
    pub targets: Vec<Target>,
    /// Transformed body, shared by every target
    pub text: String,
}
