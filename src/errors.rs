use std::path::PathBuf;

/// Usage-level failures that abort the whole run before any file is touched.
/// Per-line pattern mismatches are not errors; those lines pass through
/// unchanged.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("Directory '{}' does not exist", .0.display())]
    MissingDirectory(PathBuf),
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
}
