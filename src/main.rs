//! docbind — bind hand-written command documentation to driver symbols.
//!
//! Walks the Python API documentation tree, resolves which driver symbols
//! each page documents, and writes a module that assigns every page's text
//! to those symbols' `__doc__`:
//!
//! - `docbind`: regenerate `_scripts/docs.py` from `api/python`
//! - `docbind -r docs/api/python -o -`: write to stdout
//! - `docbind -f json -o bindings.json`: binding manifest for tooling

mod config;
mod emit;
mod error;
mod model;
mod parser;
mod render;
mod resolve;
mod revision;
mod walk;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "docbind",
    about = "Generate driver docstrings from the API documentation tree"
)]
struct Cli {
    /// Root of the primary-dialect documentation tree
    #[arg(short = 'r', long, default_value = config::DEFAULT_ROOT)]
    root: PathBuf,

    /// Output file. Use `-` for stdout.
    #[arg(short = 'o', long, default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Output format: python (default), json
    #[arg(short = 'f', long, default_value = "python")]
    format: String,

    /// Revision recorded in the header. Defaults to the last git commit of the root.
    #[arg(long, value_parser = revision::parse_arg)]
    revision: Option<String>,

    /// Additional entry names to skip (glob patterns, repeatable)
    #[arg(long)]
    ignore: Vec<String>,

    /// Log every file and companion lookup
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose)?)
        .with_writer(io::stderr)
        .init();

    let renderer = render::create_renderer(&cli.format)?;
    let tables = config::Tables::rethinkdb();
    let dialects = config::Dialects::default();

    let mut patterns: Vec<String> = config::IGNORED_FILES.iter().map(|s| s.to_string()).collect();
    patterns.extend(cli.ignore.iter().cloned());
    let ignore = walk::IgnoreList::new(patterns.as_slice())?;

    let files = walk::walk(&cli.root, &ignore)?;
    let revision = cli
        .revision
        .clone()
        .unwrap_or_else(|| revision::current(&cli.root));

    let run = Run {
        files: &files,
        renderer: renderer.as_ref(),
        tables: &tables,
        dialects: &dialects,
        revision: &revision,
    };

    let emitted = if cli.output.as_os_str() == "-" {
        run.generate(io::stdout().lock())?.1
    } else {
        write_atomically(&cli.output, |out| run.generate(out))?
    };

    info!(files = files.len(), bindings = emitted, "documentation table generated");
    Ok(())
}

/// `RUST_LOG` when set, `docbind=info` otherwise. `--verbose` forces debug.
fn log_filter(verbose: bool) -> Result<EnvFilter> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docbind=info"));
    if verbose {
        return Ok(filter.add_directive("docbind=debug".parse()?));
    }
    Ok(filter)
}

/// Everything needed to turn the file list into one output table.
struct Run<'a> {
    files: &'a [PathBuf],
    renderer: &'a dyn render::Renderer,
    tables: &'a config::Tables,
    dialects: &'a config::Dialects,
    revision: &'a str,
}

impl Run<'_> {
    /// Process every file in order, streaming bindings into `out`.
    fn generate<W: Write>(&self, out: W) -> Result<(W, usize)> {
        let mut emitter =
            emit::Emitter::begin(out, self.renderer, &self.tables.accessors, self.revision)
                .context("failed to write output header")?;

        for path in self.files {
            let doc = self
                .process(path)
                .with_context(|| format!("failed to process {}", path.display()))?;
            let count = emitter
                .emit(&doc)
                .context("failed to write bindings")?;
            debug!(file = %path.display(), command = %doc.command, bindings = count, "processed");
        }

        let emitted = emitter.emitted();
        let out = emitter.finish().context("failed to finish output")?;
        Ok((out, emitted))
    }

    fn process(&self, path: &Path) -> Result<model::Document> {
        let content = fs::read_to_string(path).map_err(|source| error::DocError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let companion = parser::companion::lookup(path, self.dialects)?;
        Ok(parser::parse(&content, companion.as_ref(), self.tables)?)
    }
}

/// Write through a temporary file next to `path`, replacing `path` only if
/// `write` succeeds.
fn write_atomically<F>(path: &Path, write: F) -> Result<usize>
where
    F: FnOnce(BufWriter<tempfile::NamedTempFile>) -> Result<(BufWriter<tempfile::NamedTempFile>, usize)>,
{
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;

    let tmp = temp_file_for(path, dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    let (out, emitted) = write(BufWriter::new(tmp))?;
    let tmp = out
        .into_inner()
        .map_err(|e| e.into_error())
        .context("failed to flush output")?;
    tmp.persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(emitted)
}

/// Temporary file in `dir` that will carry `target`'s permissions once
/// persisted: the existing file's mode, or `fs::write`'s default for a new one.
fn temp_file_for(target: &Path, dir: &Path) -> io::Result<tempfile::NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // 0666 less the umask
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;
    if let Ok(meta) = fs::metadata(target) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    Ok(tmp)
}
