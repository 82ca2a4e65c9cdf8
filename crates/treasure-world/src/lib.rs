//! Map geometry and pre-flight validation for the treasure hunt simulation.
//!
//! This crate answers two questions about a parsed [`Grid`]: which cells
//! are on the map, and whether the grid can be simulated at all.
//!
//! # Modules
//!
//! - [`bounds`] -- [`MapBounds`], the inclusive bounds rule shared by the
//!   validator and the movement resolver.
//! - [`error`] -- [`ValidationError`], the collected list of problems.
//! - [`validate`] -- The validator: an ordered list of human-readable
//!   errors, empty when the grid is simulatable.
//!
//! [`Grid`]: treasure_types::Grid

pub mod bounds;
pub mod error;
pub mod validate;

// Re-export primary types at crate root.
pub use bounds::MapBounds;
pub use error::ValidationError;
pub use validate::{ensure_valid, validate};
