//! Info command implementation.

use crate::utils::{Format, read_text_units, savings};
use serde::Serialize;
use std::path::Path;

/// Compressed size of the input in one format.
#[derive(Debug, Serialize)]
struct FormatReport {
    format: Format,
    bytes: usize,
    savings_percent: f64,
}

/// Sizes of the input before and after compression.
#[derive(Debug, Serialize)]
struct InfoReport {
    code_units: usize,
    utf8_bytes: usize,
    utf16_bytes: usize,
    formats: Vec<FormatReport>,
}

fn build_report(units: &[u16]) -> Result<InfoReport, Box<dyn std::error::Error>> {
    let utf8_bytes = String::from_utf16_lossy(units).len();
    let utf16_bytes = units.len() * 2;

    let formats = Format::ALL
        .iter()
        .map(|&format| -> Result<FormatReport, Box<dyn std::error::Error>> {
            let bytes = format.compress(units)?.len();
            Ok(FormatReport {
                format,
                bytes,
                savings_percent: savings(utf8_bytes, bytes),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(InfoReport {
        code_units: units.len(),
        utf8_bytes,
        utf16_bytes,
        formats,
    })
}

pub fn cmd_info(input: Option<&Path>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let units = read_text_units(input)?;
    let report = build_report(&units)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Input Information");
    println!("=================");
    if let Some(path) = input {
        println!("File: {}", path.display());
    }
    println!("Code units: {}", report.code_units);
    println!("UTF-8 size: {} bytes", report.utf8_bytes);
    println!("UTF-16 size: {} bytes", report.utf16_bytes);
    println!();
    println!("Compressed:");
    for entry in &report.formats {
        println!(
            "  {:<7} {:>10} bytes  ({:.1}% saved)",
            entry.format, entry.bytes, entry.savings_percent
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_covers_every_format() {
        let units: Vec<u16> = "abcabcabcabcabcabcabcabc".encode_utf16().collect();
        let report = build_report(&units).unwrap();
        assert_eq!(report.code_units, 24);
        assert_eq!(report.utf8_bytes, 24);
        assert_eq!(report.utf16_bytes, 48);
        assert_eq!(report.formats.len(), Format::ALL.len());
    }

    #[test]
    fn test_report_json() {
        let units: Vec<u16> = "aaaaaaaaaa".encode_utf16().collect();
        let report = build_report(&units).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["code_units"], 10);
        assert_eq!(json["formats"][0]["format"], "raw");
        assert_eq!(json["formats"][0]["bytes"], 4);
        assert_eq!(json["formats"][2]["format"], "base64");
        assert_eq!(json["formats"][2]["bytes"], 4);
    }

    #[test]
    fn test_report_empty_input() {
        let report = build_report(&[]).unwrap();
        assert!(report.formats.iter().all(|f| f.bytes == 0));
    }
}
