//! Utility functions for the CLI.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

/// Payload format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Raw 16-bit units as big-endian byte pairs
    Raw,
    /// UTF-16 safe text (written as UTF-8)
    Utf16,
    /// Base64 text
    Base64,
    /// URI component safe text
    Uri,
}

impl Format {
    /// All formats, in display order.
    pub const ALL: [Format; 4] = [Format::Raw, Format::Utf16, Format::Base64, Format::Uri];

    /// Whether payloads of this format are text.
    pub fn is_text(self) -> bool {
        !matches!(self, Format::Raw)
    }

    /// Compress code units into the on-disk payload.
    pub fn compress(self, units: &[u16]) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let payload = match self {
            Format::Raw => lzstring::compress_to_uint8_array(units),
            Format::Utf16 => String::from_utf16(&lzstring::compress_to_utf16(units))?.into_bytes(),
            Format::Base64 => lzstring::compress_to_base64(units).into_bytes(),
            Format::Uri => lzstring::compress_to_encoded_uri_component(units).into_bytes(),
        };
        Ok(payload)
    }

    /// Decompress an on-disk payload into code units.
    pub fn decompress(self, payload: &[u8]) -> Result<Vec<u16>, Box<dyn std::error::Error>> {
        let units = match self {
            Format::Raw => lzstring::decompress_from_uint8_array(payload)?,
            Format::Utf16 => {
                let units: Vec<u16> = text_payload(payload)?.encode_utf16().collect();
                lzstring::decompress_from_utf16(&units)?
            }
            Format::Base64 => lzstring::decompress_from_base64(text_payload(payload)?)?,
            Format::Uri => lzstring::decompress_from_encoded_uri_component(text_payload(payload)?)?,
        };
        Ok(units)
    }
}

/// A text payload without the line ending editors and shells append.
fn text_payload(payload: &[u8]) -> Result<&str, std::str::Utf8Error> {
    Ok(std::str::from_utf8(payload)?.trim_end_matches(['\r', '\n']))
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Raw => "raw",
            Format::Utf16 => "utf16",
            Format::Base64 => "base64",
            Format::Uri => "uri",
        };
        f.write_str(name)
    }
}

/// Read the whole input file, or stdin.
pub fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

/// Read the input as UTF-8 text and return its UTF-16 code units.
pub fn read_text_units(path: Option<&Path>) -> Result<Vec<u16>, Box<dyn std::error::Error>> {
    let data = read_input(path)?;
    let text = String::from_utf8(data)?;
    Ok(text.encode_utf16().collect())
}

/// Write data to the output file, or stdout.
///
/// Text written to an interactive terminal gets a trailing newline.
pub fn write_output(path: Option<&Path>, data: &[u8], is_text: bool) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, data),
        None => {
            let stdout = io::stdout();
            let terminal = stdout.is_terminal();
            let mut out = stdout.lock();
            out.write_all(data)?;
            if is_text && terminal {
                out.write_all(b"\n")?;
            }
            out.flush()
        }
    }
}

/// Percentage saved by compression.
pub fn savings(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}
