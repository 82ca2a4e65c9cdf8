//! Error types for the `treasure-world` crate.

/// A grid that failed pre-flight validation.
///
/// Carries every message produced by [`validate`](crate::validate), in
/// order. Simulation must not run when this error is raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Something went wrong")]
pub struct ValidationError {
    /// The ordered validation messages. Never empty.
    pub errors: Vec<String>,
}

impl ValidationError {
    /// Number of collected messages.
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether no message was collected. Always `false` for errors
    /// produced by [`ensure_valid`](crate::ensure_valid).
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
