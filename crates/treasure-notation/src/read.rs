//! Reading notation files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::NotationError;

/// Whether `line` is a comment: its first non-whitespace character is `#`.
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Read `path` line by line, dropping comment lines.
///
/// Blank lines are kept; the parser ignores them.
///
/// # Errors
///
/// Returns [`NotationError::Io`] if the file cannot be opened or a line
/// cannot be read (including invalid UTF-8).
pub fn read_lines(path: &Path) -> Result<Vec<String>, NotationError> {
    let file = File::open(path).map_err(|e| NotationError::io(path, e))?;

    let mut lines = Vec::new();
    let mut comments: usize = 0;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| NotationError::io(path, e))?;
        if is_comment(&line) {
            comments = comments.saturating_add(1);
        } else {
            lines.push(line);
        }
    }

    debug!(
        path = %path.display(),
        lines = lines.len(),
        comments,
        "Notation file read"
    );
    Ok(lines)
}
