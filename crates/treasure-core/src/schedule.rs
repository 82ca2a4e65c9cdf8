//! Turn scheduling.
//!
//! Turn `i` holds, for every explorer in declaration order, the instruction
//! at index `i` of its move program, or `None` once that program is
//! exhausted. The schedule is as long as the longest program; explorers
//! with shorter programs keep their slot and simply idle.

use treasure_types::{Explorer, Instruction};

/// One slot per explorer, in declaration order.
pub type Turn = Vec<Option<Instruction>>;

/// The ordered turns of a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnSchedule {
    /// Turns in execution order.
    turns: Vec<Turn>,
}

impl TurnSchedule {
    /// Derive the schedule from the explorers' move programs.
    pub fn from_explorers(explorers: &[Explorer]) -> Self {
        let length = explorers
            .iter()
            .map(|explorer| explorer.moves.len())
            .max()
            .unwrap_or(0);

        let turns = (0..length)
            .map(|index| {
                explorers
                    .iter()
                    .map(|explorer| explorer.moves.get(index).copied())
                    .collect()
            })
            .collect();

        Self { turns }
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether there is nothing to run.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Iterate turns in execution order.
    pub fn iter(&self) -> core::slice::Iter<'_, Turn> {
        self.turns.iter()
    }
}

impl<'a> IntoIterator for &'a TurnSchedule {
    type Item = &'a Turn;
    type IntoIter = core::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
