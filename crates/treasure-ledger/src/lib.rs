//! Occupancy and treasure ledgers for the treasure hunt simulation.
//!
//! The ledgers are the only mutable state of a simulation run. They are
//! seeded once from the [`Grid`] and threaded through every instruction.
//!
//! # Architecture
//!
//! - [`occupancy`] -- [`OccupancyLedger`]: the set of busy cells. Mountains
//!   stay busy forever; explorers' cells move with them.
//! - [`treasure`] -- [`TreasureLedger`]: remaining treasures per cell, in
//!   first-declaration order. Absent cells hold zero.
//!
//! # Value semantics
//!
//! Every mutating operation consumes the ledger and returns the next one.
//! A caller holding a ledger value never observes a later change to it,
//! which keeps each simulation step replayable and comparable by equality.
//!
//! ```
//! use treasure_ledger::Ledger;
//! use treasure_types::{Grid, Position, TreasureCache};
//!
//! let mut grid = Grid::new(3, 4);
//! grid.mountains.push(Position::new(1, 0));
//! grid.treasures.push(TreasureCache::new(0, 3, 2));
//!
//! let ledger = Ledger::from_grid(&grid);
//! let (ledger, collected) = ledger
//!     .relocated(Position::new(0, 2), Position::new(0, 3))
//!     .collected(Position::new(0, 3));
//!
//! assert!(collected);
//! assert!(ledger.is_occupied(Position::new(0, 3)));
//! assert_eq!(ledger.remaining(Position::new(0, 3)), 1);
//! ```
//!
//! [`Grid`]: treasure_types::Grid

pub mod occupancy;
pub mod treasure;

// Re-export primary types at crate root.
pub use occupancy::OccupancyLedger;
pub use treasure::TreasureLedger;

use tracing::debug;
use treasure_types::{Grid, Position};

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

/// The pair of ledgers owned by one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    /// Busy cells.
    occupancy: OccupancyLedger,
    /// Remaining treasures per cell.
    treasures: TreasureLedger,
}

impl Ledger {
    /// Seed both ledgers from a grid: mountains and explorer starting cells
    /// are busy, caches hold their declared counts.
    pub fn from_grid(grid: &Grid) -> Self {
        let occupancy = grid
            .mountains
            .iter()
            .copied()
            .chain(grid.explorers.iter().map(|explorer| explorer.position))
            .collect::<OccupancyLedger>();
        let treasures = TreasureLedger::seeded(&grid.treasures);

        debug!(
            occupied_cells = occupancy.len(),
            treasure_cells = treasures.len(),
            "Ledger seeded"
        );

        Self {
            occupancy,
            treasures,
        }
    }

    /// Whether `position` is busy (mountain or explorer).
    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupancy.is_occupied(position)
    }

    /// Treasures left at `position`; zero for cells without a cache.
    pub fn remaining(&self, position: Position) -> u32 {
        self.treasures.remaining(position)
    }

    /// Release `from` and occupy `to`.
    #[must_use]
    pub fn relocated(self, from: Position, to: Position) -> Self {
        Self {
            occupancy: self.occupancy.relocated(from, to),
            treasures: self.treasures,
        }
    }

    /// Take one treasure from `position` if any is left.
    ///
    /// Returns the next ledger and whether a treasure was taken.
    #[must_use]
    pub fn collected(self, position: Position) -> (Self, bool) {
        let (treasures, taken) = self.treasures.collected(position);
        (
            Self {
                occupancy: self.occupancy,
                treasures,
            },
            taken,
        )
    }

    /// The occupancy half.
    pub const fn occupancy(&self) -> &OccupancyLedger {
        &self.occupancy
    }

    /// The treasure half.
    pub const fn treasures(&self) -> &TreasureLedger {
        &self.treasures
    }

    /// Split into the two ledgers.
    pub fn into_parts(self) -> (OccupancyLedger, TreasureLedger) {
        (self.occupancy, self.treasures)
    }
}

#[cfg(test)]
mod tests {
    use treasure_types::{Explorer, Orientation, TreasureCache};

    use super::*;

    fn grid() -> Grid {
        Grid {
            width: 3,
            height: 4,
            mountains: vec![Position::new(1, 0), Position::new(2, 1)],
            explorers: vec![Explorer {
                name: "Lara".to_owned(),
                position: Position::new(1, 1),
                orientation: Orientation::South,
                moves: Vec::new(),
            }],
            treasures: vec![TreasureCache::new(0, 3, 2), TreasureCache::new(1, 3, 3)],
        }
    }

    #[test]
    fn seeded_from_mountains_and_explorers() {
        let ledger = Ledger::from_grid(&grid());
        assert!(ledger.is_occupied(Position::new(1, 0)));
        assert!(ledger.is_occupied(Position::new(2, 1)));
        assert!(ledger.is_occupied(Position::new(1, 1)));
        assert!(!ledger.is_occupied(Position::new(0, 3)));
        assert_eq!(ledger.occupancy().len(), 3);
    }

    #[test]
    fn seeded_treasures() {
        let ledger = Ledger::from_grid(&grid());
        assert_eq!(ledger.remaining(Position::new(0, 3)), 2);
        assert_eq!(ledger.remaining(Position::new(1, 3)), 3);
        assert_eq!(ledger.remaining(Position::new(2, 2)), 0);
    }

    #[test]
    fn earlier_value_is_unaffected_by_later_steps() {
        let before = Ledger::from_grid(&grid());
        let after = before
            .clone()
            .relocated(Position::new(1, 1), Position::new(1, 2));

        assert!(before.is_occupied(Position::new(1, 1)));
        assert!(!after.is_occupied(Position::new(1, 1)));
        assert!(after.is_occupied(Position::new(1, 2)));
    }

    #[test]
    fn collecting_leaves_occupancy_alone() {
        let ledger = Ledger::from_grid(&grid());
        let (next, taken) = ledger.clone().collected(Position::new(1, 3));
        assert!(taken);
        assert_eq!(next.remaining(Position::new(1, 3)), 2);
        assert_eq!(next.occupancy(), ledger.occupancy());
    }

    #[test]
    fn into_parts_round_trip() {
        let ledger = Ledger::from_grid(&grid());
        let (occupancy, treasures) = ledger.into_parts();
        assert_eq!(occupancy.len(), 3);
        assert_eq!(treasures.len(), 2);
    }
}
