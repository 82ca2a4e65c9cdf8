//! The bounds rule.
//!
//! A position is out of bounds iff `x < 0 || x > width || y < 0 || y > height`.
//! The comparison is against `width`/`height` themselves, so a map declared
//! as `C - 3 - 4` accepts `x` in `0..=3` and `y` in `0..=4`.

use treasure_types::{Grid, Position};

/// The inclusive rectangle of in-bounds cells for a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapBounds {
    /// Largest in-bounds `x`.
    pub width: i64,
    /// Largest in-bounds `y`.
    pub height: i64,
}

impl MapBounds {
    /// Bounds for an explicit width and height.
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Bounds of a grid's declared dimensions.
    pub const fn of(grid: &Grid) -> Self {
        Self::new(grid.width, grid.height)
    }

    /// Whether both dimensions are strictly positive.
    pub const fn has_valid_dimensions(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Whether `position` lies outside the map.
    pub const fn is_out_of_bounds(self, position: Position) -> bool {
        let x_out = position.x < 0 || position.x > self.width;
        let y_out = position.y < 0 || position.y > self.height;
        x_out || y_out
    }

    /// Whether `position` lies on the map.
    pub const fn contains(self, position: Position) -> bool {
        !self.is_out_of_bounds(position)
    }
}
