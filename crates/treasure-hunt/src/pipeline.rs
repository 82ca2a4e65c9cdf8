//! The read, parse, validate, simulate, write pipeline.

use std::path::Path;

use tracing::{info, warn};
use treasure_core::simulate_validated;
use treasure_notation::{Headers, parse, read_lines, write};
use treasure_types::SimulationResult;

use crate::error::HuntError;

/// Run one treasure hunt from `input` to `output`.
///
/// Nothing is written when the map fails validation.
///
/// # Errors
///
/// Returns [`HuntError::Notation`] if the input cannot be read or the
/// output cannot be written, and [`HuntError::Validation`] if the map
/// cannot be simulated.
pub fn run(input: &Path, output: &Path, headers: &Headers) -> Result<SimulationResult, HuntError> {
    let lines = read_lines(input)?;
    info!(path = %input.display(), lines = lines.len(), "Input read");

    let grid = parse(&lines);

    let result = simulate_validated(&grid).inspect_err(|rejected| {
        for message in &rejected.errors {
            warn!(error = %message, "Map rejected");
        }
    })?;

    write(output, &grid, &result, headers)?;
    info!(path = %output.display(), "Output written");

    Ok(result)
}
