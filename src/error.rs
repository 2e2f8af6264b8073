// Error types
// Failures surfaced by path relativization

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while computing submission-relative paths.
#[derive(Debug, Error)]
pub enum PathError {
    /// No relative path exists between the two paths because exactly one of
    /// them is absolute. Matches the fatal relativization error on platforms
    /// whose path APIs reject mixed absolute/relative arguments.
    #[error("cannot relativize {target:?} against {base:?}: one path is absolute and the other is not")]
    Unrelatable { base: PathBuf, target: PathBuf },
}
