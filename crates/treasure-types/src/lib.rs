//! Shared type definitions for the treasure hunt simulation.
//!
//! This crate is the single source of truth for the types that flow
//! between the parser, the validator, the simulation engine, and the
//! serializer.
//!
//! # Modules
//!
//! - [`enums`] -- Orientation and instruction enumerations, with the fixed
//!   rotation tables and their one-letter notation.
//! - [`structs`] -- Grid model, explorer snapshots, and the simulation result.

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Instruction, Orientation};
pub use structs::{Explorer, ExplorerState, Grid, Position, SimulationResult, TreasureCache};
