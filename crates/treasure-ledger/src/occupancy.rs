//! The occupancy ledger: which cells are currently busy.

use std::collections::BTreeSet;

use treasure_types::Position;

/// Set of busy cells, keyed by coordinate pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyLedger {
    /// Busy cells.
    cells: BTreeSet<Position>,
}

impl OccupancyLedger {
    /// An empty ledger.
    pub const fn new() -> Self {
        Self {
            cells: BTreeSet::new(),
        }
    }

    /// Whether `position` is busy.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    /// Release `from` and occupy `to` in one step.
    #[must_use]
    pub fn relocated(mut self, from: Position, to: Position) -> Self {
        self.cells.remove(&from);
        self.cells.insert(to);
        self
    }

    /// Number of busy cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is busy.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Consume the ledger, returning the busy cells.
    pub fn into_cells(self) -> BTreeSet<Position> {
        self.cells
    }
}

impl FromIterator<Position> for OccupancyLedger {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relocation_frees_the_old_cell() {
        let ledger: OccupancyLedger = [Position::new(0, 0), Position::new(1, 1)]
            .into_iter()
            .collect();
        let next = ledger.relocated(Position::new(1, 1), Position::new(1, 2));

        assert!(!next.is_occupied(Position::new(1, 1)));
        assert!(next.is_occupied(Position::new(1, 2)));
        assert!(next.is_occupied(Position::new(0, 0)));
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn duplicate_seeds_collapse() {
        let ledger: OccupancyLedger = [Position::new(2, 2), Position::new(2, 2)]
            .into_iter()
            .collect();
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn empty_ledger() {
        let ledger = OccupancyLedger::new();
        assert!(ledger.is_empty());
        assert!(!ledger.is_occupied(Position::new(0, 0)));
    }
}
