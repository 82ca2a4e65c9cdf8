//! The treasure ledger: remaining treasures per cell.
//!
//! Cells keep the order in which their cache was first declared, so
//! leftovers are reported in input order. Counts never go below zero.

use indexmap::IndexMap;
use treasure_types::{Position, TreasureCache};

/// Remaining treasure count per cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreasureLedger {
    /// Remaining count, in first-declaration order.
    remaining: IndexMap<Position, u32>,
}

impl TreasureLedger {
    /// Seed from cache declarations. A later cache on an already-seen cell
    /// replaces its count but keeps the original position in the order.
    pub fn seeded(caches: &[TreasureCache]) -> Self {
        let mut remaining = IndexMap::with_capacity(caches.len());
        for cache in caches {
            remaining.insert(cache.position, cache.remaining);
        }
        Self { remaining }
    }

    /// Treasures left at `position`; zero when the cell has no cache.
    pub fn remaining(&self, position: Position) -> u32 {
        self.remaining.get(&position).copied().unwrap_or(0)
    }

    /// Take one treasure from `position` if any is left.
    ///
    /// Returns the next ledger and whether a treasure was taken. An empty
    /// or unknown cell is left as is.
    #[must_use]
    pub fn collected(mut self, position: Position) -> (Self, bool) {
        let mut taken = false;
        if let Some(count) = self.remaining.get_mut(&position)
            && let Some(next) = count.checked_sub(1)
        {
            *count = next;
            taken = true;
        }
        (self, taken)
    }

    /// Number of cells that had a cache declared.
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Whether no cache was declared.
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Sum of all remaining treasures.
    pub fn total_remaining(&self) -> u64 {
        self.remaining
            .values()
            .fold(0_u64, |acc, &count| acc.saturating_add(u64::from(count)))
    }

    /// Iterate `(cell, remaining)` in first-declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.remaining.iter().map(|(&position, &count)| (position, count))
    }

    /// Final counts as cache records, including emptied cells.
    pub fn to_caches(&self) -> Vec<TreasureCache> {
        self.iter()
            .map(|(position, remaining)| TreasureCache {
                position,
                remaining,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn unknown_cell_holds_nothing() {
        let ledger = TreasureLedger::seeded(&[TreasureCache::new(0, 3, 2)]);
        assert_eq!(ledger.remaining(Position::new(5, 5)), 0);
        let (next, taken) = ledger.clone().collected(Position::new(5, 5));
        assert!(!taken);
        assert_eq!(next, ledger);
    }

    #[test]
    fn floor_at_zero() {
        let ledger = TreasureLedger::seeded(&[TreasureCache::new(0, 3, 1)]);
        let (ledger, first) = ledger.collected(Position::new(0, 3));
        let (ledger, second) = ledger.collected(Position::new(0, 3));
        assert!(first);
        assert!(!second);
        assert_eq!(ledger.remaining(Position::new(0, 3)), 0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn declaration_order_is_kept() {
        let ledger = TreasureLedger::seeded(&[
            TreasureCache::new(2, 0, 1),
            TreasureCache::new(0, 3, 2),
            TreasureCache::new(1, 1, 4),
        ]);
        let cells: Vec<Position> = ledger.iter().map(|(position, _)| position).collect();
        assert_eq!(
            cells,
            vec![Position::new(2, 0), Position::new(0, 3), Position::new(1, 1)]
        );
    }

    #[test]
    fn redeclared_cell_keeps_first_slot() {
        let ledger = TreasureLedger::seeded(&[
            TreasureCache::new(0, 3, 2),
            TreasureCache::new(1, 3, 3),
            TreasureCache::new(0, 3, 7),
        ]);
        assert_eq!(
            ledger.to_caches(),
            vec![TreasureCache::new(0, 3, 7), TreasureCache::new(1, 3, 3)]
        );
    }

    #[test]
    fn total_remaining_sums_cells() {
        let ledger =
            TreasureLedger::seeded(&[TreasureCache::new(0, 3, 2), TreasureCache::new(1, 3, 3)]);
        assert_eq!(ledger.total_remaining(), 5);
    }

    proptest! {
        #[test]
        fn each_collection_takes_exactly_one(start in 0_u32..20, attempts in 0_usize..30) {
            let cell = Position::new(1, 1);
            let mut ledger = TreasureLedger::seeded(&[TreasureCache { position: cell, remaining: start }]);
            let mut taken_total = 0_u32;
            for _ in 0..attempts {
                let before = ledger.remaining(cell);
                let (next, taken) = ledger.collected(cell);
                let after = next.remaining(cell);
                if taken {
                    prop_assert_eq!(after.checked_add(1), Some(before));
                    taken_total = taken_total.saturating_add(1);
                } else {
                    prop_assert_eq!(before, 0);
                    prop_assert_eq!(after, 0);
                }
                ledger = next;
            }
            prop_assert_eq!(ledger.remaining(cell).saturating_add(taken_total), start);
        }
    }
}
