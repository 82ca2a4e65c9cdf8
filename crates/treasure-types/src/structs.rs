//! Core entity structs: the grid model read from input, the explorer
//! snapshots produced while simulating, and the final result.
//!
//! The [`Grid`] is built once by the parser and read-only afterwards.
//! [`ExplorerState`] values are immutable snapshots: the engine replaces
//! an explorer's snapshot after every instruction rather than editing it.

use std::collections::BTreeSet;

use core::fmt;

use crate::enums::{Instruction, Orientation};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell coordinate. `x` grows eastward, `y` grows southward.
///
/// Positions carry no bounds of their own; whether a position lies on the
/// map is decided against a grid's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Horizontal axis.
    pub x: i64,
    /// Vertical axis.
    pub y: i64,
}

impl Position {
    /// Create a position from its two coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `orientation`.
    ///
    /// Returns `None` when the coordinate would overflow `i64`; callers
    /// treat that the same way as stepping off the map.
    pub const fn step(self, orientation: Orientation) -> Option<Self> {
        let (dx, dy) = orientation.delta();
        let Some(x) = self.x.checked_add(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add(dy) else {
            return None;
        };
        Some(Self { x, y })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Grid model
// ---------------------------------------------------------------------------

/// An explorer as declared in the input, with its full move program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explorer {
    /// Display name. Not required to be unique.
    pub name: String,
    /// Starting cell.
    pub position: Position,
    /// Starting orientation.
    pub orientation: Orientation,
    /// Ordered move program, consumed read-only by the simulation.
    pub moves: Vec<Instruction>,
}

/// A treasure cache: a cell holding a number of treasures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreasureCache {
    /// The cell holding the treasures.
    pub position: Position,
    /// Treasures left in the cell.
    pub remaining: u32,
}

impl TreasureCache {
    /// Create a cache at `(x, y)` holding `remaining` treasures.
    pub const fn new(x: i64, y: i64, remaining: u32) -> Self {
        Self {
            position: Position::new(x, y),
            remaining,
        }
    }
}

/// The immutable description of a treasure map.
///
/// `width` and `height` are the largest in-bounds coordinates, not
/// exclusive sizes: a map of width 3 accepts `x` from 0 to 3 inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    /// Largest in-bounds `x`.
    pub width: i64,
    /// Largest in-bounds `y`.
    pub height: i64,
    /// Mountain cells, in declaration order.
    pub mountains: Vec<Position>,
    /// Explorers, in declaration order. This order drives turn resolution.
    pub explorers: Vec<Explorer>,
    /// Treasure caches, in declaration order.
    pub treasures: Vec<TreasureCache>,
}

impl Grid {
    /// An empty grid of the given dimensions.
    pub const fn new(width: i64, height: i64) -> Self {
        Self {
            width,
            height,
            mountains: Vec::new(),
            explorers: Vec::new(),
            treasures: Vec::new(),
        }
    }

    /// Total number of placed items (explorers, mountains, and caches).
    pub const fn item_count(&self) -> usize {
        self.explorers
            .len()
            .saturating_add(self.mountains.len())
            .saturating_add(self.treasures.len())
    }
}

// ---------------------------------------------------------------------------
// Simulation snapshots
// ---------------------------------------------------------------------------

/// An explorer's live state during and after simulation.
///
/// The move program is not carried here; it belongs to the input
/// [`Explorer`] only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerState {
    /// Display name, copied from the input.
    pub name: String,
    /// Current cell.
    pub position: Position,
    /// Current orientation.
    pub orientation: Orientation,
    /// Treasures collected so far. Never decreases.
    pub treasures: u32,
}

impl ExplorerState {
    /// Snapshot with a new orientation and everything else unchanged.
    #[must_use]
    pub fn facing(&self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self.clone()
        }
    }

    /// Snapshot standing on `position`, with one more treasure when
    /// `collected` is set.
    #[must_use]
    pub fn moved_to(&self, position: Position, collected: bool) -> Self {
        let treasures = if collected {
            self.treasures.saturating_add(1)
        } else {
            self.treasures
        };
        Self {
            position,
            treasures,
            ..self.clone()
        }
    }
}

impl From<&Explorer> for ExplorerState {
    fn from(explorer: &Explorer) -> Self {
        Self {
            name: explorer.name.clone(),
            position: explorer.position,
            orientation: explorer.orientation,
            treasures: 0,
        }
    }
}

/// The outcome of one complete simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationResult {
    /// Final explorer snapshots, in declaration order.
    pub explorers: Vec<ExplorerState>,
    /// Cells occupied at the end of the run: mountains plus explorers.
    pub occupied: BTreeSet<Position>,
    /// Final count per treasure cell, in first-declaration order. Cells
    /// that were emptied stay listed with `remaining == 0`.
    pub treasures: Vec<TreasureCache>,
}

impl SimulationResult {
    /// Treasure cells that still hold at least one treasure.
    pub fn leftover_treasures(&self) -> impl Iterator<Item = &TreasureCache> {
        self.treasures.iter().filter(|cache| cache.remaining > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lara() -> Explorer {
        Explorer {
            name: "Lara".to_owned(),
            position: Position::new(1, 1),
            orientation: Orientation::South,
            moves: vec![Instruction::Advance, Instruction::RotateLeft],
        }
    }

    #[test]
    fn step_follows_orientation() {
        let origin = Position::new(1, 1);
        assert_eq!(origin.step(Orientation::North), Some(Position::new(1, 0)));
        assert_eq!(origin.step(Orientation::South), Some(Position::new(1, 2)));
        assert_eq!(origin.step(Orientation::East), Some(Position::new(2, 1)));
        assert_eq!(origin.step(Orientation::West), Some(Position::new(0, 1)));
    }

    #[test]
    fn step_reports_overflow() {
        let corner = Position::new(i64::MIN, i64::MAX);
        assert_eq!(corner.step(Orientation::West), None);
        assert_eq!(corner.step(Orientation::South), None);
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::new(0, 3).to_string(), "(0, 3)");
        assert_eq!(Position::new(-1, 2).to_string(), "(-1, 2)");
    }

    #[test]
    fn snapshot_starts_without_treasure() {
        let state = ExplorerState::from(&lara());
        assert_eq!(state.name, "Lara");
        assert_eq!(state.position, Position::new(1, 1));
        assert_eq!(state.orientation, Orientation::South);
        assert_eq!(state.treasures, 0);
    }

    #[test]
    fn snapshots_are_new_values() {
        let start = ExplorerState::from(&lara());
        let turned = start.facing(Orientation::East);
        let moved = turned.moved_to(Position::new(2, 1), true);

        assert_eq!(start.orientation, Orientation::South);
        assert_eq!(turned.position, Position::new(1, 1));
        assert_eq!(moved.position, Position::new(2, 1));
        assert_eq!(moved.orientation, Orientation::East);
        assert_eq!(moved.treasures, 1);
        assert_eq!(turned.treasures, 0);
    }

    #[test]
    fn item_count_sums_all_lists() {
        let mut grid = Grid::new(3, 4);
        grid.mountains.push(Position::new(1, 0));
        grid.explorers.push(lara());
        grid.treasures.push(TreasureCache::new(0, 3, 2));
        grid.treasures.push(TreasureCache::new(1, 3, 3));
        assert_eq!(grid.item_count(), 4);
    }

    #[test]
    fn leftovers_skip_empty_cells() {
        let result = SimulationResult {
            explorers: Vec::new(),
            occupied: BTreeSet::new(),
            treasures: vec![TreasureCache::new(0, 3, 0), TreasureCache::new(1, 3, 2)],
        };
        let left: Vec<_> = result.leftover_treasures().copied().collect();
        assert_eq!(left, vec![TreasureCache::new(1, 3, 2)]);
    }
}
