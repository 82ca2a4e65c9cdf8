//! The simulation engine.
//!
//! [`simulate`] is a pure function of its [`Grid`]: it seeds the ledgers,
//! resets every explorer to zero treasures, then folds the resolver over
//! the schedule turn by turn and, inside a turn, explorer by explorer in
//! declaration order. Each explorer sees the ledger already updated by the
//! explorers before it in the same turn, so a cell vacated earlier in the
//! turn is free, and a cell not yet vacated is busy.
//!
//! No turn is retried and no instruction fails.

use tracing::{debug, info, trace};
use treasure_ledger::Ledger;
use treasure_types::{ExplorerState, Grid, SimulationResult};
use treasure_world::{MapBounds, ValidationError, ensure_valid};

use crate::resolve::{Outcome, resolve};
use crate::schedule::TurnSchedule;

/// Per-turn outcome counts, logged at debug level.
#[derive(Debug, Default)]
struct TurnTally {
    /// Explorers that entered a new cell.
    moved: u32,
    /// Advances refused by a busy or off-map cell.
    blocked: u32,
    /// Rotations applied.
    rotated: u32,
    /// Explorers with an exhausted program.
    idle: u32,
    /// Treasures taken.
    collected: u32,
}

impl TurnTally {
    const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Idle => self.idle = self.idle.saturating_add(1),
            Outcome::Rotated { .. } => self.rotated = self.rotated.saturating_add(1),
            Outcome::Blocked { .. } => self.blocked = self.blocked.saturating_add(1),
            Outcome::Moved { collected, .. } => {
                self.moved = self.moved.saturating_add(1);
                if collected {
                    self.collected = self.collected.saturating_add(1);
                }
            }
        }
    }
}

/// Run the whole party's move programs to completion.
///
/// The grid is expected to have passed validation; see
/// [`simulate_validated`] for the checked variant.
pub fn simulate(grid: &Grid) -> SimulationResult {
    let bounds = MapBounds::of(grid);
    let schedule = TurnSchedule::from_explorers(&grid.explorers);
    let mut explorers: Vec<ExplorerState> =
        grid.explorers.iter().map(ExplorerState::from).collect();
    let mut ledger = Ledger::from_grid(grid);

    info!(
        explorers = explorers.len(),
        turns = schedule.len(),
        treasures = ledger.treasures().total_remaining(),
        "Simulation starting"
    );

    for (turn, instructions) in schedule.iter().enumerate() {
        let mut tally = TurnTally::default();

        for (slot, &instruction) in explorers.iter_mut().zip(instructions) {
            let resolution = resolve(ledger, slot, instruction, bounds);
            trace!(
                turn,
                explorer = %slot.name,
                instruction = ?instruction,
                outcome = ?resolution.outcome,
                "Instruction resolved"
            );
            tally.record(resolution.outcome);
            *slot = resolution.explorer;
            ledger = resolution.ledger;
        }

        debug!(
            turn,
            moved = tally.moved,
            blocked = tally.blocked,
            rotated = tally.rotated,
            idle = tally.idle,
            collected = tally.collected,
            "Turn complete"
        );
    }

    let (occupancy, treasures) = ledger.into_parts();
    let collected: u64 = explorers
        .iter()
        .fold(0_u64, |acc, explorer| acc.saturating_add(u64::from(explorer.treasures)));

    info!(
        collected,
        remaining = treasures.total_remaining(),
        "Simulation finished"
    );

    SimulationResult {
        explorers,
        occupied: occupancy.into_cells(),
        treasures: treasures.to_caches(),
    }
}

/// Validate `grid`, then simulate it.
///
/// # Errors
///
/// Returns [`ValidationError`] with every validation message when the
/// grid cannot be simulated. Nothing is simulated in that case.
pub fn simulate_validated(grid: &Grid) -> Result<SimulationResult, ValidationError> {
    ensure_valid(grid)?;
    Ok(simulate(grid))
}
