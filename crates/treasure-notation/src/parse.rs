//! Parsing notation lines into a [`Grid`].
//!
//! Each line is split on [`FIELD_SEPARATOR`] and matched by its leading
//! tag and field count. Anything that does not match one of the four record
//! shapes exactly is skipped without error:
//!
//! | Line | Fields |
//! |------|--------|
//! | `C - <w> - <h>` | map size, both positive, no leading zero |
//! | `M - <x> - <y>` | mountain, coordinates non-negative |
//! | `T - <x> - <y> - <n>` | treasure cache, `n` positive, no leading zero |
//! | `A - <name> - <x> - <y> - <o> - <moves>` | explorer |
//!
//! A later `C` line replaces an earlier one. Numbers too large for their
//! type are malformed.

use std::str::FromStr;

use tracing::{info, trace};
use treasure_types::{Explorer, Grid, Instruction, Orientation, Position, TreasureCache};

/// The token between two fields of a record.
pub const FIELD_SEPARATOR: &str = " - ";

/// One recognized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Record {
    Map { width: i64, height: i64 },
    Mountain(Position),
    Treasure(TreasureCache),
    Explorer(Explorer),
}

/// Fold `lines` into a grid, starting from a 0 x 0 map with no items.
pub fn parse<I>(lines: I) -> Grid
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut grid = Grid::default();
    let mut skipped: usize = 0;

    for line in lines {
        let line = line.as_ref();
        match record(line) {
            Some(Record::Map { width, height }) => {
                grid.width = width;
                grid.height = height;
            }
            Some(Record::Mountain(position)) => grid.mountains.push(position),
            Some(Record::Treasure(cache)) => grid.treasures.push(cache),
            Some(Record::Explorer(explorer)) => grid.explorers.push(explorer),
            None => {
                trace!(line, "Skipped unrecognized line");
                skipped = skipped.saturating_add(1);
            }
        }
    }

    info!(
        width = grid.width,
        height = grid.height,
        mountains = grid.mountains.len(),
        treasures = grid.treasures.len(),
        explorers = grid.explorers.len(),
        skipped,
        "Grid parsed"
    );
    grid
}

fn record(line: &str) -> Option<Record> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

    match fields.as_slice() {
        ["C", width, height] => Some(Record::Map {
            width: positive(width)?,
            height: positive(height)?,
        }),
        ["M", x, y] => Some(Record::Mountain(Position::new(natural(x)?, natural(y)?))),
        ["T", x, y, count] => Some(Record::Treasure(TreasureCache::new(
            natural(x)?,
            natural(y)?,
            positive(count)?,
        ))),
        ["A", name, x, y, orientation, moves] if !name.is_empty() => {
            Some(Record::Explorer(Explorer {
                name: (*name).to_owned(),
                position: Position::new(natural(x)?, natural(y)?),
                orientation: single_letter(orientation).and_then(Orientation::from_letter)?,
                moves: program(moves)?,
            }))
        }
        _ => None,
    }
}

/// A non-empty run of ASCII digits that fits in `T`.
fn natural<T: FromStr>(field: &str) -> Option<T> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Like [`natural`], without a leading zero (so never zero).
fn positive<T: FromStr>(field: &str) -> Option<T> {
    if field.starts_with('0') {
        return None;
    }
    natural(field)
}

fn single_letter(field: &str) -> Option<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Some(letter),
        _ => None,
    }
}

/// One or more instruction letters.
fn program(field: &str) -> Option<Vec<Instruction>> {
    if field.is_empty() {
        return None;
    }
    field.chars().map(Instruction::from_letter).collect()
}
