//! Decompress command implementation.

use crate::utils::{Format, read_input, write_output};
use std::path::Path;

pub fn cmd_decompress(
    format: Format,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload = read_input(input)?;
    let units = format.decompress(&payload)?;
    let text = String::from_utf16(&units)?;

    log::debug!(
        "decompressed {} bytes of {} to {} code units",
        payload.len(),
        format,
        units.len()
    );

    write_output(output, text.as_bytes(), true)?;
    Ok(())
}
