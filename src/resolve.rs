//! Symbol resolution: command name + companion category → library targets.

use crate::config::{AliasTable, CategoryTable};
use crate::error::{DocError, Result};
use crate::model::{CompanionInfo, Target};
use crate::parser::frontmatter;
use serde_yaml::Mapping;

/// Read the `command` value from a primary header.
pub fn command_name(header: &Mapping) -> Result<String> {
    header
        .get("command")
        .and_then(frontmatter::scalar)
        .ok_or(DocError::MissingCommandName)
}

/// The target a document describes when no alias applies.
pub fn default_target(
    command: &str,
    companion: Option<&CompanionInfo>,
    categories: &CategoryTable,
) -> Result<Target> {
    let tag = companion.and_then(|c| c.category.as_deref());
    let namespace = categories
        .namespace(tag)
        .ok_or_else(|| DocError::UnknownCategory(tag.unwrap_or_default().to_string()))?;
    Ok(Target::new(namespace, command))
}

/// Expand a default target through the alias table.
///
/// Alias entries replace the default outright; a computed entry may return
/// nothing, which suppresses the document.
pub fn expand(default: Target, aliases: &AliasTable) -> Vec<Target> {
    match aliases.get(&default.symbol) {
        Some(alias) => alias.resolve(&default.namespace),
        None => vec![default],
    }
}
