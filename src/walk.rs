//! Corpus walker: deterministic enumeration of documentation files.
//!
//! Depth-first; at each level entries are sorted by name, files are yielded
//! before any subdirectory is entered. Hidden entries and names matching the
//! ignore list are skipped.

use anyhow::{Context, Result};
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};

/// Entry names (not paths) excluded from the walk.
#[derive(Debug, Default)]
pub struct IgnoreList {
    patterns: Vec<Pattern>,
}

impl IgnoreList {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Pattern::new(p.as_ref())
                    .with_context(|| format!("invalid ignore pattern: {}", p.as_ref()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        name.starts_with('.') || self.patterns.iter().any(|p| p.matches(name))
    }
}

/// List every documentation file under `root`, in processing order.
pub fn walk(root: &Path, ignore: &IgnoreList) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk_dir(root, ignore, &mut files)?;
    Ok(files)
}

fn walk_dir(dir: &Path, ignore: &IgnoreList, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;
    entries.sort();

    let mut subdirs = Vec::new();
    for path in entries {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        if ignore.is_ignored(&name) {
            continue;
        }
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            subdirs.push(path);
        }
    }

    for subdir in subdirs {
        walk_dir(&subdir, ignore, files)?;
    }
    Ok(())
}
