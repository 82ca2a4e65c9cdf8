//! The line-oriented notation used for treasure hunt input and output files.
//!
//! Input files describe the map (`C`), mountains (`M`), treasure caches
//! (`T`) and explorers (`A`), one record per line, fields separated by
//! ` - `. Lines starting with `#` are comments. Output files use the same
//! notation to report the final state of a run.
//!
//! # Modules
//!
//! - [`error`] -- [`NotationError`], file access failures.
//! - [`read`] -- Read a file into its non-comment lines.
//! - [`parse`] -- Fold lines into a [`Grid`], skipping anything unrecognized.
//! - [`write`] -- Render and write the final state of a run.
//!
//! [`Grid`]: treasure_types::Grid

pub mod error;
pub mod parse;
pub mod read;
pub mod write;

pub use error::NotationError;
pub use parse::parse;
pub use read::read_lines;
pub use write::{DEFAULT_EXPLORER_HEADER, DEFAULT_TREASURE_HEADER, Headers, render, write};
