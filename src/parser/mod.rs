//! Parser module: one documentation file in, one resolved Document out.

pub mod body;
pub mod companion;
pub mod frontmatter;

use crate::config::Tables;
use crate::error::Result;
use crate::model::{CompanionInfo, Document};
use crate::resolve;

/// Parse a primary documentation file given its companion metadata.
pub fn parse(
    content: &str,
    companion: Option<&CompanionInfo>,
    tables: &Tables,
) -> Result<Document> {
    let fm = frontmatter::split(content)?;
    let header = frontmatter::decode(fm.header)?;
    let command = resolve::command_name(&header)?;

    let default = resolve::default_target(&command, companion, &tables.categories)?;
    let targets = resolve::expand(default, &tables.aliases);

    Ok(Document {
        command,
        targets,
        text: body::transform(fm.body),
    })
}
