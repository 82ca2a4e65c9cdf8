//! Pre-flight structural validation.
//!
//! [`validate`] runs every check and collects all messages rather than
//! stopping at the first problem. The only short-circuit is the dimension
//! check: a map with a non-positive width or height reports exactly one
//! error and nothing else.
//!
//! Checks, in order:
//!
//! 1. Dimensions: `"The map is invalid"`.
//! 2. Overlap: `"At least 2 elements are overlapping"`, at most once.
//! 3. Explorers out of bounds: `"<name> (<x>, <y>) is out of bounds"`.
//! 4. Mountains out of bounds: `"A mountain (<x>, <y>) is out of bounds"`.
//! 5. Treasures out of bounds: `"A treasure (<x>, <y>) is out of bounds"`.

use std::collections::BTreeSet;

use treasure_types::{Grid, Position};

use crate::bounds::MapBounds;
use crate::error::ValidationError;

/// Message for a map with a non-positive dimension.
pub const INVALID_MAP: &str = "The map is invalid";

/// Message for two or more items sharing a starting cell.
pub const OVERLAPPING: &str = "At least 2 elements are overlapping";

/// Validate a grid, returning every problem found in check order.
///
/// An empty list means the grid can be simulated.
pub fn validate(grid: &Grid) -> Vec<String> {
    let bounds = MapBounds::of(grid);
    if !bounds.has_valid_dimensions() {
        return vec![INVALID_MAP.to_owned()];
    }

    let mut errors = Vec::new();

    if has_overlap(grid) {
        errors.push(OVERLAPPING.to_owned());
    }

    errors.extend(
        grid.explorers
            .iter()
            .filter(|explorer| bounds.is_out_of_bounds(explorer.position))
            .map(|explorer| format!("{} {} is out of bounds", explorer.name, explorer.position)),
    );

    errors.extend(
        grid.mountains
            .iter()
            .filter(|&&mountain| bounds.is_out_of_bounds(mountain))
            .map(|mountain| format!("A mountain {mountain} is out of bounds")),
    );

    errors.extend(
        grid.treasures
            .iter()
            .filter(|cache| bounds.is_out_of_bounds(cache.position))
            .map(|cache| format!("A treasure {} is out of bounds", cache.position)),
    );

    errors
}

/// Validate a grid and turn a non-empty message list into an error.
///
/// # Errors
///
/// Returns [`ValidationError`] carrying the full list from [`validate`]
/// when at least one check fails.
pub fn ensure_valid(grid: &Grid) -> Result<(), ValidationError> {
    let errors = validate(grid);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { errors })
    }
}

/// Whether any two explorers, mountains, or caches start on the same cell.
///
/// Only detects that a collision exists; it does not say which items
/// collide.
fn has_overlap(grid: &Grid) -> bool {
    let cells: BTreeSet<Position> = grid
        .explorers
        .iter()
        .map(|explorer| explorer.position)
        .chain(grid.mountains.iter().copied())
        .chain(grid.treasures.iter().map(|cache| cache.position))
        .collect();
    cells.len() < grid.item_count()
}
