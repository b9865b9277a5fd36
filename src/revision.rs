//! Revision of the documentation corpus, recorded in the output header.

use std::path::Path;
use std::process::{Command, Stdio};
use tracing::warn;

/// Ask git for the last commit touching `repo`, formatted as `"<hash>"`.
///
/// Outside a repository, or without git on `PATH`, the revision is empty.
pub fn current(repo: &Path) -> String {
    let result = Command::new("git")
        .args(["log", "-n", "1", "--pretty=format:\"%H\""])
        .current_dir(repo)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output();

    match result {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        Ok(output) => {
            warn!(
                repo = %repo.display(),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "git log failed; revision left empty"
            );
            String::new()
        }
        Err(e) => {
            warn!(error = %e, "failed to run git; revision left empty");
            String::new()
        }
    }
}

/// Parse a `--revision` value. It lands in a `#` comment of the generated
/// module, so line breaks and other control characters are rejected.
pub fn parse_arg(s: &str) -> Result<String, String> {
    match s.chars().find(|c| c.is_control()) {
        Some(c) => Err(format!("revision must be a single printable line (found {:?})", c)),
        None => Ok(s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn revision_argument_accepts_quoted_hash() {
        assert_eq!(parse_arg("\"abc123\"").unwrap(), "\"abc123\"");
        assert_eq!(parse_arg("").unwrap(), "");
    }

    #[test]
    fn revision_argument_rejects_line_breaks() {
        assert!(parse_arg("abc\nimport os").is_err());
        assert!(parse_arg("abc\r").is_err());
        assert!(parse_arg("a\u{85}b").is_err());
    }

    #[test]
    fn non_repository_yields_something_printable() {
        // A temp dir may still sit inside a checkout; either way no panic and
        // no newline.
        let dir = TempDir::new().unwrap();
        let rev = current(dir.path());
        assert!(!rev.contains('\n'));
    }
}
