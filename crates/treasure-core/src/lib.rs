//! Turn scheduling, movement resolution, and orchestration for the
//! treasure hunt simulation.
//!
//! A run is one deterministic fold: turns in order, and inside each turn
//! explorers in declaration order, each instruction resolved against the
//! ledger left by the previous one.
//!
//! # Modules
//!
//! - [`schedule`] -- [`TurnSchedule`]: the per-turn instruction slots
//!   derived from every explorer's move program.
//! - [`resolve`] -- The movement resolver: one explorer, one instruction,
//!   one new snapshot and ledger.
//! - [`engine`] -- [`simulate`], the entry point that seeds the ledgers and
//!   folds the resolver over the schedule.
//!
//! [`TurnSchedule`]: schedule::TurnSchedule
//! [`simulate`]: engine::simulate

pub mod engine;
pub mod resolve;
pub mod schedule;

pub use engine::{simulate, simulate_validated};
pub use resolve::{Outcome, Resolution, resolve};
pub use schedule::{Turn, TurnSchedule};
