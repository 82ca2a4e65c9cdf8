//! Movement resolution: one explorer, one instruction.
//!
//! Rotations only change orientation. An advance targets the neighbouring
//! cell in the current orientation; when that cell is busy (mountain or
//! explorer) or off the map, nothing changes. Otherwise the explorer moves,
//! the ledger releases the old cell and occupies the new one, and one
//! treasure is taken if the new cell holds any. A missing instruction
//! (exhausted program) is a no-op.
//!
//! Resolution never fails: every instruction either applies or is absorbed.

use treasure_ledger::Ledger;
use treasure_types::{ExplorerState, Instruction, Orientation, Position};
use treasure_world::MapBounds;

/// What an instruction did, for logging and per-turn summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No instruction this turn.
    Idle,
    /// Orientation changed.
    Rotated {
        /// The new orientation.
        to: Orientation,
    },
    /// The explorer entered a new cell.
    Moved {
        /// The cell entered.
        to: Position,
        /// Whether a treasure was taken there.
        collected: bool,
    },
    /// The advance was refused.
    Blocked {
        /// The refused cell; `None` when the coordinate overflowed.
        target: Option<Position>,
    },
}

/// The explorer snapshot and ledger after one instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The explorer's next snapshot.
    pub explorer: ExplorerState,
    /// The next ledger.
    pub ledger: Ledger,
    /// What happened.
    pub outcome: Outcome,
}

/// Apply `instruction` for `explorer` against `ledger`.
pub fn resolve(
    ledger: Ledger,
    explorer: &ExplorerState,
    instruction: Option<Instruction>,
    bounds: MapBounds,
) -> Resolution {
    match instruction {
        None => Resolution {
            explorer: explorer.clone(),
            ledger,
            outcome: Outcome::Idle,
        },
        Some(Instruction::RotateLeft) => {
            rotate(ledger, explorer, explorer.orientation.rotated_left())
        }
        Some(Instruction::RotateRight) => {
            rotate(ledger, explorer, explorer.orientation.rotated_right())
        }
        Some(Instruction::Advance) => advance(ledger, explorer, bounds),
    }
}

fn rotate(ledger: Ledger, explorer: &ExplorerState, to: Orientation) -> Resolution {
    Resolution {
        explorer: explorer.facing(to),
        ledger,
        outcome: Outcome::Rotated { to },
    }
}

fn advance(ledger: Ledger, explorer: &ExplorerState, bounds: MapBounds) -> Resolution {
    let target = explorer.position.step(explorer.orientation);

    let Some(to) = target.filter(|&cell| bounds.contains(cell) && !ledger.is_occupied(cell))
    else {
        return Resolution {
            explorer: explorer.clone(),
            ledger,
            outcome: Outcome::Blocked { target },
        };
    };

    let (ledger, collected) = ledger.relocated(explorer.position, to).collected(to);

    Resolution {
        explorer: explorer.moved_to(to, collected),
        ledger,
        outcome: Outcome::Moved { to, collected },
    }
}

#[cfg(test)]
mod tests {
    use treasure_types::{Explorer, Grid, TreasureCache};

    use super::*;

    fn lara(x: i64, y: i64, orientation: Orientation) -> Explorer {
        Explorer {
            name: "Lara".to_owned(),
            position: Position::new(x, y),
            orientation,
            moves: Vec::new(),
        }
    }

    fn setup(explorer: Explorer) -> (Ledger, ExplorerState, MapBounds) {
        let grid = Grid {
            width: 3,
            height: 4,
            mountains: vec![Position::new(1, 0), Position::new(2, 1)],
            treasures: vec![TreasureCache::new(0, 3, 2), TreasureCache::new(1, 3, 3)],
            explorers: vec![explorer],
        };
        let state = grid
            .explorers
            .first()
            .map(ExplorerState::from)
            .unwrap_or_else(|| ExplorerState::from(&lara(0, 0, Orientation::North)));
        (Ledger::from_grid(&grid), state, MapBounds::of(&grid))
    }

    #[test]
    fn idle_changes_nothing() {
        let (ledger, state, bounds) = setup(lara(1, 1, Orientation::South));
        let resolution = resolve(ledger.clone(), &state, None, bounds);
        assert_eq!(resolution.explorer, state);
        assert_eq!(resolution.ledger, ledger);
        assert_eq!(resolution.outcome, Outcome::Idle);
    }

    #[test]
    fn rotations_keep_position() {
        let (ledger, state, bounds) = setup(lara(1, 1, Orientation::South));

        let left = resolve(ledger.clone(), &state, Some(Instruction::RotateLeft), bounds);
        assert_eq!(left.explorer.orientation, Orientation::East);
        assert_eq!(left.explorer.position, state.position);
        assert_eq!(left.ledger, ledger);

        let right = resolve(ledger.clone(), &state, Some(Instruction::RotateRight), bounds);
        assert_eq!(right.explorer.orientation, Orientation::West);
        assert_eq!(right.explorer.position, state.position);
        assert_eq!(right.ledger, ledger);
    }

    #[test]
    fn advance_into_free_cell() {
        let (ledger, state, bounds) = setup(lara(1, 1, Orientation::South));
        let resolution = resolve(ledger, &state, Some(Instruction::Advance), bounds);

        assert_eq!(resolution.explorer.position, Position::new(1, 2));
        assert_eq!(resolution.explorer.treasures, 0);
        assert!(resolution.ledger.is_occupied(Position::new(1, 2)));
        assert!(!resolution.ledger.is_occupied(Position::new(1, 1)));
        assert_eq!(
            resolution.outcome,
            Outcome::Moved {
                to: Position::new(1, 2),
                collected: false
            }
        );
    }

    #[test]
    fn advance_onto_treasure_collects_one() {
        let (ledger, state, bounds) = setup(lara(1, 2, Orientation::South));
        let resolution = resolve(ledger, &state, Some(Instruction::Advance), bounds);

        assert_eq!(resolution.explorer.position, Position::new(1, 3));
        assert_eq!(resolution.explorer.treasures, 1);
        assert_eq!(resolution.ledger.remaining(Position::new(1, 3)), 2);
    }

    #[test]
    fn mountain_blocks() {
        let (ledger, state, bounds) = setup(lara(1, 1, Orientation::East));
        let resolution = resolve(ledger.clone(), &state, Some(Instruction::Advance), bounds);

        assert_eq!(resolution.explorer, state);
        assert_eq!(resolution.ledger, ledger);
        assert_eq!(
            resolution.outcome,
            Outcome::Blocked {
                target: Some(Position::new(2, 1))
            }
        );
    }

    #[test]
    fn map_edge_blocks() {
        let (ledger, state, bounds) = setup(lara(0, 1, Orientation::West));
        let resolution = resolve(ledger.clone(), &state, Some(Instruction::Advance), bounds);

        assert_eq!(resolution.explorer, state);
        assert_eq!(resolution.ledger, ledger);
    }

    #[test]
    fn far_edge_is_reachable() {
        let (ledger, state, bounds) = setup(lara(2, 4, Orientation::East));
        let resolution = resolve(ledger, &state, Some(Instruction::Advance), bounds);
        assert_eq!(resolution.explorer.position, Position::new(3, 4));
    }

    #[test]
    fn overflowing_step_is_blocked() {
        let explorer = ExplorerState {
            name: "Edge".to_owned(),
            position: Position::new(i64::MAX, 0),
            orientation: Orientation::East,
            treasures: 0,
        };
        let bounds = MapBounds::new(i64::MAX, 1);
        let resolution = resolve(Ledger::default(), &explorer, Some(Instruction::Advance), bounds);
        assert_eq!(resolution.explorer, explorer);
        assert_eq!(resolution.outcome, Outcome::Blocked { target: None });
    }
}
