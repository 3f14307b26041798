use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

use crate::errors::UsageError;
use crate::io::{self, FileWalker};
use crate::transform::pipeline::rewrite_stub_text;

pub struct ProcessConfig {
    pub path: PathBuf,
    pub extension: String,
}

/// Rewrite every stub file under the configured root, independently and
/// sequentially. Returns the number of files processed.
pub fn run(config: &ProcessConfig) -> Result<usize> {
    if !config.path.exists() {
        return Err(UsageError::MissingDirectory(config.path.clone()).into());
    }
    if !config.path.is_dir() {
        return Err(UsageError::NotADirectory(config.path.clone()).into());
    }

    let files = FileWalker::new(config.path.clone())
        .with_extension(config.extension.as_str())
        .walk()?;

    for file in &files {
        process_file(file)?;
    }

    Ok(files.len())
}

/// Read one stub file, run the rewrite pipeline, and write it back.
pub fn process_file(path: &Path) -> Result<()> {
    let content = io::read_file(path)?;
    let rewritten = rewrite_stub_text(&content);
    debug!(
        "{}: {} line(s) in, {} line(s) out",
        path.display(),
        content.lines().count(),
        rewritten.lines().count()
    );
    io::write_file(path, &rewritten)
}
