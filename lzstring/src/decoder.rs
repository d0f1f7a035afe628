//! LZ-String decoder (decompression).
//!
//! Malformed input is reported as an error instead of the empty string the
//! reference decoders return, so a legitimately empty payload can never be
//! confused with a corrupt one.

use crate::alphabet::Alphabet;
use crate::bitstream::UnitReader;
use crate::dictionary::{
    CodeWidth, DecoderDictionary, END_OF_STREAM, LITERAL_8, LITERAL_16, Span,
};
use crate::error::{LzStringError, Result};

/// LZ-String decoder for one alphabet.
#[derive(Debug, Clone, Copy)]
pub struct LzDecoder<'a, A: Alphabet> {
    alphabet: &'a A,
}

impl<'a, A: Alphabet> LzDecoder<'a, A> {
    /// Create a decoder reading units of `alphabet`.
    pub fn new(alphabet: &'a A) -> Self {
        Self { alphabet }
    }

    /// Map every input unit out of the alphabet.
    fn unpack(&self, input: &[u16]) -> Result<Vec<u16>> {
        input
            .iter()
            .enumerate()
            .map(|(position, &unit)| {
                self.alphabet
                    .decode_unit(unit)
                    .ok_or(LzStringError::InvalidCharacter {
                        unit,
                        position,
                        alphabet: self.alphabet.name(),
                    })
            })
            .collect()
    }

    /// Decompress units produced by the matching encoder.
    ///
    /// Empty input decodes to empty output.
    ///
    /// # Errors
    ///
    /// - [`LzStringError::InvalidCharacter`] if a unit is outside the alphabet
    /// - [`LzStringError::InvalidCode`] if a code refers past the dictionary
    /// - [`LzStringError::UnexpectedEof`] if input ends before the terminator
    pub fn decode(&self, input: &[u16]) -> Result<Vec<u16>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let values = self.unpack(input)?;
        let mut reader = UnitReader::new(&values, self.alphabet.reset_value());

        let first = match reader.read_bits(CodeWidth::FIRST_CODE_BITS) {
            LITERAL_8 => reader.read_bits(8) as u16,
            LITERAL_16 => reader.read_bits(16) as u16,
            END_OF_STREAM => return Ok(Vec::new()),
            code => {
                log::debug!("lz-string decode: invalid first code {code}");
                return Err(LzStringError::InvalidCode { code, dict_size: 3 });
            }
        };

        let mut output = Vec::with_capacity(input.len() * 5);
        let mut dict = DecoderDictionary::with_capacity(input.len() * 2);
        let mut width = CodeWidth::DECODER;

        let mut w = Span { start: 0, len: 1 };
        output.push(first);
        dict.push(w);

        loop {
            if reader.is_exhausted() {
                log::debug!(
                    "lz-string decode: input exhausted after {} units, {} units decoded",
                    reader.units(),
                    output.len()
                );
                return Err(LzStringError::UnexpectedEof {
                    units: reader.units(),
                });
            }

            let entry = match reader.read_bits(width.bits()) {
                code @ (LITERAL_8 | LITERAL_16) => {
                    let bits = if code == LITERAL_8 { 8 } else { 16 };
                    let span = Span {
                        start: output.len(),
                        len: 1,
                    };
                    output.push(reader.read_bits(bits) as u16);
                    dict.push(span);
                    width.tick();
                    span
                }
                END_OF_STREAM => break,
                code => {
                    let start = output.len();
                    if let Some(span) = dict.get(code) {
                        output.extend_from_within(span.start..span.end());
                    } else if code as usize == dict.len() {
                        // The code being defined right now: w + w[0].
                        let head = output[w.start];
                        output.extend_from_within(w.start..w.end());
                        output.push(head);
                    } else {
                        log::debug!(
                            "lz-string decode: code {code} beyond dictionary of {} entries",
                            dict.len()
                        );
                        return Err(LzStringError::InvalidCode {
                            code,
                            dict_size: dict.len(),
                        });
                    }
                    Span {
                        start,
                        len: output.len() - start,
                    }
                }
            };

            // `entry` directly follows `w`, so `w + entry[0]` is `w` grown by one.
            dict.push(Span {
                start: w.start,
                len: w.len + 1,
            });
            width.tick();
            w = entry;
        }

        log::trace!(
            "lz-string decode: {} {} units in, {} units out, {} codes, {}-bit codes",
            input.len(),
            self.alphabet.name(),
            output.len(),
            dict.len(),
            width.bits()
        );

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{KeyedAlphabet, Raw, Utf16Safe};
    use crate::encoder::LzEncoder;

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    fn roundtrip<A: Alphabet>(alphabet: &A, s: &str) -> Vec<u16> {
        let compressed = LzEncoder::new(alphabet).encode(&units(s));
        LzDecoder::new(alphabet).decode(&compressed).unwrap()
    }

    #[test]
    fn test_decode_known_raw() {
        let decoder = LzDecoder::new(&Raw);
        assert_eq!(decoder.decode(&[8589, 26624]).unwrap(), units("aaaaaaaaaa"));
        assert_eq!(
            decoder.decode(&[36161, 1392, 19983, 25600]).unwrap(),
            units("€uro")
        );
    }

    #[test]
    fn test_decode_terminator_only() {
        let decoder = LzDecoder::new(&Raw);
        assert!(decoder.decode(&[16384]).unwrap().is_empty());
        assert!(decoder.decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_self_referential_code() {
        // "aaaa..." references each new code before the decoder has added it.
        for n in 1..40 {
            let s = "a".repeat(n);
            assert_eq!(roundtrip(&Raw, &s), units(&s), "length {n}");
        }
    }

    #[test]
    fn test_decode_all_alphabets() {
        let text = "TOBEORNOTTOBEORTOBEORNOT";
        assert_eq!(roundtrip(&Raw, text), units(text));
        assert_eq!(roundtrip(&Utf16Safe, text), units(text));
        assert_eq!(roundtrip(&KeyedAlphabet::BASE64, text), units(text));
        assert_eq!(roundtrip(&KeyedAlphabet::URI_SAFE, text), units(text));
    }

    #[test]
    fn test_decode_invalid_code() {
        let b64 = KeyedAlphabet::BASE64;
        let input = units("BIUZNmD2A0AEDqkBOYAmBCIA");
        let err = LzDecoder::new(&b64).decode(&input).unwrap_err();
        assert!(matches!(
            err,
            LzStringError::InvalidCode {
                code: 13,
                dict_size: 8
            }
        ));
    }

    #[test]
    fn test_decode_truncated() {
        let compressed = LzEncoder::new(&Raw).encode(&units("Hello, World!"));
        assert_eq!(compressed.len(), 9);
        let err = LzDecoder::new(&Raw).decode(&compressed[..4]).unwrap_err();
        assert!(matches!(err, LzStringError::UnexpectedEof { units: 4 }));
    }

    #[test]
    fn test_decode_invalid_first_code() {
        // First two bits read as 3.
        let err = LzDecoder::new(&Raw).decode(&[0xC000]).unwrap_err();
        assert!(matches!(err, LzStringError::InvalidCode { code: 3, .. }));
    }

    #[test]
    fn test_decode_rejects_foreign_unit() {
        let err = LzDecoder::new(&Utf16Safe).decode(&[4326, 10]).unwrap_err();
        assert!(matches!(
            err,
            LzStringError::InvalidCharacter {
                unit: 10,
                position: 1,
                alphabet: "utf16"
            }
        ));
    }
}
