//! LZ-String error types.

use thiserror::Error;

/// LZ-String decompression errors.
///
/// Compression never fails; every variant here describes input that was not
/// produced by the matching compress function.
#[derive(Debug, Error)]
pub enum LzStringError {
    /// Input unit is not a member of the expected output alphabet.
    #[error("Invalid character {unit:#06x} at position {position} for {alphabet} alphabet")]
    InvalidCharacter {
        /// The offending code unit.
        unit: u16,
        /// Index of the unit in the compressed input.
        position: usize,
        /// Name of the alphabet the input was decoded with.
        alphabet: &'static str,
    },

    /// Decoded code references a dictionary slot that cannot exist yet.
    #[error("Invalid code {code} (dictionary size {dict_size})")]
    InvalidCode {
        /// The decoded code.
        code: u32,
        /// Number of dictionary slots at the time of the read.
        dict_size: usize,
    },

    /// Input ran out before the terminator code was read.
    #[error("Unexpected end of data after {units} input units")]
    UnexpectedEof {
        /// Number of input units in the stream.
        units: usize,
    },

    /// Byte input must hold whole 16-bit units.
    #[error("Odd byte length {0}: expected pairs of big-endian bytes")]
    OddByteLength(usize),

    /// Decoded code units are not valid UTF-16.
    #[error("Invalid UTF-16 in decompressed output: {0}")]
    InvalidUtf16(#[from] std::string::FromUtf16Error),
}

/// Result type for LZ-String operations.
pub type Result<T> = std::result::Result<T, LzStringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LzStringError::InvalidCharacter {
            unit: u16::from(b'!'),
            position: 7,
            alphabet: "base64",
        };
        assert_eq!(
            err.to_string(),
            "Invalid character 0x0021 at position 7 for base64 alphabet"
        );

        let err = LzStringError::InvalidCode {
            code: 13,
            dict_size: 8,
        };
        assert_eq!(err.to_string(), "Invalid code 13 (dictionary size 8)");
    }

    #[test]
    fn test_from_utf16_error() {
        let err: LzStringError = String::from_utf16(&[0xD800]).unwrap_err().into();
        assert!(matches!(err, LzStringError::InvalidUtf16(_)));
    }
}
