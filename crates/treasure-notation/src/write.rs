//! Rendering the final state of a run.
//!
//! The output echoes the map and its mountains, lists the caches that
//! still hold treasures (the whole section, header included, is omitted
//! when none do), then every explorer with its final position, orientation
//! and collected count. Lines are joined with `\n`; there is no trailing
//! newline.

use std::path::Path;

use tracing::debug;
use treasure_types::{Grid, SimulationResult};

use crate::error::NotationError;
use crate::parse::FIELD_SEPARATOR;

/// Default comment line introducing the leftover treasures.
pub const DEFAULT_TREASURE_HEADER: &str =
    "# {T comme Trésor} - {Axe horizontal} - {Axe vertical} - {Nb. de trésors restants}";

/// Default comment line introducing the explorers.
pub const DEFAULT_EXPLORER_HEADER: &str = "# {A comme Aventurier} - {Nom de l’aventurier} - {Axe horizontal} - {Axevertical} - {Orientation} - {Nb. trésors ramassés}";

/// Comment lines written above the treasure and explorer sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headers {
    /// Written before the `T` lines, only when at least one is written.
    pub treasure: String,
    /// Written before the `A` lines, always.
    pub explorer: String,
}

impl Default for Headers {
    fn default() -> Self {
        Self {
            treasure: DEFAULT_TREASURE_HEADER.to_owned(),
            explorer: DEFAULT_EXPLORER_HEADER.to_owned(),
        }
    }
}

fn record(fields: &[String]) -> String {
    fields.join(FIELD_SEPARATOR)
}

/// Render `result` over the map of `grid`.
pub fn render(grid: &Grid, result: &SimulationResult, headers: &Headers) -> String {
    let mut lines = vec![record(&[
        "C".to_owned(),
        grid.width.to_string(),
        grid.height.to_string(),
    ])];

    lines.extend(grid.mountains.iter().map(|mountain| {
        record(&[
            "M".to_owned(),
            mountain.x.to_string(),
            mountain.y.to_string(),
        ])
    }));

    let mut leftovers = result.leftover_treasures().peekable();
    if leftovers.peek().is_some() {
        lines.push(headers.treasure.clone());
        lines.extend(leftovers.map(|cache| {
            record(&[
                "T".to_owned(),
                cache.position.x.to_string(),
                cache.position.y.to_string(),
                cache.remaining.to_string(),
            ])
        }));
    }

    lines.push(headers.explorer.clone());
    lines.extend(result.explorers.iter().map(|explorer| {
        record(&[
            "A".to_owned(),
            explorer.name.clone(),
            explorer.position.x.to_string(),
            explorer.position.y.to_string(),
            explorer.orientation.to_string(),
            explorer.treasures.to_string(),
        ])
    }));

    lines.join("\n")
}

/// Render and write the result to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`NotationError::Io`] if the file cannot be written.
pub fn write(
    path: &Path,
    grid: &Grid,
    result: &SimulationResult,
    headers: &Headers,
) -> Result<(), NotationError> {
    let contents = render(grid, result, headers);
    std::fs::write(path, &contents).map_err(|e| NotationError::io(path, e))?;
    debug!(path = %path.display(), bytes = contents.len(), "Result written");
    Ok(())
}
