//! Error types for the `treasure-notation` crate.

use std::path::PathBuf;

/// Errors raised while reading or writing notation files.
///
/// Parsing itself never fails; malformed lines are skipped.
#[derive(Debug, thiserror::Error)]
pub enum NotationError {
    /// The file could not be opened, read, or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl NotationError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
