//! Error types for the treasure hunt binary.
//!
//! [`HuntError`] wraps every failure the pipeline can hit, so `main` can
//! tell a rejected map apart from a file that could not be read or
//! written.

use treasure_notation::NotationError;
use treasure_world::ValidationError;

use crate::config::ConfigError;

/// Top-level error for the treasure hunt binary.
#[derive(Debug, thiserror::Error)]
pub enum HuntError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The input could not be read or the output could not be written.
    #[error("notation error: {source}")]
    Notation {
        /// The underlying notation error.
        #[from]
        source: NotationError,
    },

    /// The parsed map cannot be simulated.
    #[error("{source}")]
    Validation {
        /// Every validation message, in order.
        #[from]
        source: ValidationError,
    },
}
