//! # lzstring: Pure Rust LZ-String Compression
//!
//! This crate provides LZ-String compression and decompression, the
//! LZ78-family text codec commonly used to squeeze documents into URLs,
//! cookies and browser storage.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Bit compatible**: Payloads interoperate with other LZ-String 1.4
//!   implementations
//! - **Four alphabets**: raw 16-bit units, UTF-16 safe, Base64, URI safe
//! - **Typed failures**: corrupt input is an error, never an empty string
//!
//! ## Stream Format
//!
//! - **Adaptive dictionary**: codes are assigned densely from 3; codes 0 and
//!   1 escape 8-bit and 16-bit literals, code 2 ends the stream
//! - **Growing code width**: codes start at 2 bits and widen by one bit each
//!   time the dictionary doubles
//! - **Bit order**: code values are written LSB first into output units that
//!   fill from their most significant used bit
//!
//! Text is handled as UTF-16 code units; surrogate pairs are two independent
//! units.
//!
//! ## Example
//!
//! ```rust
//! use lzstring::{compress_to_base64, decompress_from_base64};
//!
//! let original: Vec<u16> = "Hello, World!".encode_utf16().collect();
//!
//! // Compress
//! let compressed = compress_to_base64(&original);
//! assert_eq!(compressed, "BIUwNmD2A0AEDqkBOYAmBCIA");
//!
//! // Decompress
//! let decompressed = decompress_from_base64(&compressed).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod alphabet;
mod bitstream;
mod decoder;
mod dictionary;
mod encoder;
mod error;

pub use alphabet::{Alphabet, KeyedAlphabet, Raw, Utf16Safe};
pub use decoder::LzDecoder;
pub use encoder::LzEncoder;
pub use error::{LzStringError, Result};

/// Compress UTF-16 code units with any [`Alphabet`].
///
/// Unlike the named variants this does not short-circuit empty input: the
/// result is always a terminated stream.
///
/// # Example
///
/// ```rust
/// use lzstring::{compress_with, decompress_with, Utf16Safe};
///
/// let original: Vec<u16> = "abcabcabc".encode_utf16().collect();
/// let compressed = compress_with(&Utf16Safe, &original);
/// let decompressed = decompress_with(&Utf16Safe, &compressed).unwrap();
/// assert_eq!(decompressed, original);
/// ```
pub fn compress_with<A: Alphabet>(alphabet: &A, input: &[u16]) -> Vec<u16> {
    LzEncoder::new(alphabet).encode(input)
}

/// Decompress units of any [`Alphabet`].
///
/// Empty input decodes to empty output.
pub fn decompress_with<A: Alphabet>(alphabet: &A, input: &[u16]) -> Result<Vec<u16>> {
    LzDecoder::new(alphabet).decode(input)
}

/// Compress to raw 16-bit code units.
///
/// The output may contain lone surrogates and is not valid UTF-16 in
/// general. Empty input compresses to empty output.
///
/// # Example
///
/// ```rust
/// use lzstring::{compress, decompress};
///
/// let original: Vec<u16> = "aaaaaaaaaa".encode_utf16().collect();
/// let compressed = compress(&original);
/// assert_eq!(compressed.len(), 2);
/// assert_eq!(decompress(&compressed).unwrap(), original);
/// ```
pub fn compress(input: &[u16]) -> Vec<u16> {
    if input.is_empty() {
        return Vec::new();
    }
    compress_with(&Raw, input)
}

/// Decompress raw 16-bit code units produced by [`compress`].
pub fn decompress(input: &[u16]) -> Result<Vec<u16>> {
    decompress_with(&Raw, input)
}

/// Compress to UTF-16 safe units, terminated by a space.
///
/// Every unit lies in `32..=32799`, so the result is valid UTF-16 without
/// control characters or surrogates.
pub fn compress_to_utf16(input: &[u16]) -> Vec<u16> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut output = compress_with(&Utf16Safe, input);
    output.push(u16::from(b' '));
    output
}

/// Decompress units produced by [`compress_to_utf16`].
///
/// The trailing space decodes to zero padding bits and needs no stripping.
pub fn decompress_from_utf16(input: &[u16]) -> Result<Vec<u16>> {
    decompress_with(&Utf16Safe, input)
}

fn keyed_to_string(alphabet: &KeyedAlphabet, input: &[u16]) -> String {
    compress_with(alphabet, input)
        .into_iter()
        .map(|unit| char::from(unit as u8))
        .collect()
}

/// Compress to Base64 text, padded with `=` to a multiple of 4 characters.
///
/// # Example
///
/// ```rust
/// use lzstring::compress_to_base64;
///
/// let data: Vec<u16> = "aaaaaaaaaa".encode_utf16().collect();
/// let compressed = compress_to_base64(&data);
/// assert_eq!(compressed, "IY1o");
/// assert_eq!(compress_to_base64(&[]), "");
/// ```
pub fn compress_to_base64(input: &[u16]) -> String {
    if input.is_empty() {
        return String::new();
    }
    let alphabet = KeyedAlphabet::BASE64;
    let mut output = keyed_to_string(&alphabet, input);
    while output.len() % 4 != 0 {
        output.push(alphabet.padding());
    }
    output
}

/// Decompress Base64 text produced by [`compress_to_base64`].
///
/// # Errors
///
/// Any character outside `A-Za-z0-9+/=` is
/// [`LzStringError::InvalidCharacter`].
pub fn decompress_from_base64(input: &str) -> Result<Vec<u16>> {
    let units: Vec<u16> = input.encode_utf16().collect();
    decompress_with(&KeyedAlphabet::BASE64, &units)
}

/// Compress to text that can be used verbatim in a URI component.
///
/// Uses `A-Za-z0-9+-` and is not padded.
pub fn compress_to_encoded_uri_component(input: &[u16]) -> String {
    if input.is_empty() {
        return String::new();
    }
    keyed_to_string(&KeyedAlphabet::URI_SAFE, input)
}

/// Decompress text produced by [`compress_to_encoded_uri_component`].
///
/// Spaces are read as `+`, undoing form decoding of the query string.
pub fn decompress_from_encoded_uri_component(input: &str) -> Result<Vec<u16>> {
    let units: Vec<u16> = input
        .encode_utf16()
        .map(|unit| if unit == u16::from(b' ') { u16::from(b'+') } else { unit })
        .collect();
    decompress_with(&KeyedAlphabet::URI_SAFE, &units)
}

/// Compress to bytes: [`compress`] output as big-endian 16-bit pairs.
pub fn compress_to_uint8_array(input: &[u16]) -> Vec<u8> {
    compress(input)
        .into_iter()
        .flat_map(u16::to_be_bytes)
        .collect()
}

/// Decompress bytes produced by [`compress_to_uint8_array`].
///
/// # Errors
///
/// Input of odd length is [`LzStringError::OddByteLength`].
pub fn decompress_from_uint8_array(input: &[u8]) -> Result<Vec<u16>> {
    if input.len() % 2 != 0 {
        return Err(LzStringError::OddByteLength(input.len()));
    }
    let units: Vec<u16> = input
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    decompress(&units)
}

/// Compress a `str` to Base64 (convenience function).
///
/// This is equivalent to `compress_to_base64(&s.encode_utf16().collect::<Vec<_>>())`.
pub fn compress_str_to_base64(s: &str) -> String {
    let units: Vec<u16> = s.encode_utf16().collect();
    compress_to_base64(&units)
}

/// Compress a `str` for a URI component (convenience function).
pub fn compress_str_to_encoded_uri_component(s: &str) -> String {
    let units: Vec<u16> = s.encode_utf16().collect();
    compress_to_encoded_uri_component(&units)
}

/// Decompress Base64 text into a `String`.
///
/// # Errors
///
/// Besides the decoding errors of [`decompress_from_base64`], output that is
/// not valid UTF-16 is [`LzStringError::InvalidUtf16`].
///
/// # Example
///
/// ```rust
/// use lzstring::{compress_str_to_base64, decompress_from_base64_to_string};
///
/// let compressed = compress_str_to_base64("héllo wörld");
/// let text = decompress_from_base64_to_string(&compressed).unwrap();
/// assert_eq!(text, "héllo wörld");
/// ```
pub fn decompress_from_base64_to_string(input: &str) -> Result<String> {
    Ok(String::from_utf16(&decompress_from_base64(input)?)?)
}

/// Decompress URI component text into a `String`.
pub fn decompress_from_encoded_uri_component_to_string(input: &str) -> Result<String> {
    Ok(String::from_utf16(&decompress_from_encoded_uri_component(
        input,
    )?)?)
}
