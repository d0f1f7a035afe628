//! Compress command implementation.

use crate::utils::{Format, read_text_units, savings, write_output};
use std::path::Path;

pub fn cmd_compress(
    format: Format,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let units = read_text_units(input)?;
    let payload = format.compress(&units)?;

    log::debug!(
        "compressed {} code units to {} bytes of {} ({:.1}% saved)",
        units.len(),
        payload.len(),
        format,
        savings(units.len() * 2, payload.len())
    );

    write_output(output, &payload, format.is_text())?;
    Ok(())
}
