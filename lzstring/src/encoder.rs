//! LZ-String encoder (compression).

use crate::alphabet::Alphabet;
use crate::bitstream::UnitWriter;
use crate::dictionary::{
    CodeWidth, END_OF_STREAM, EncoderDictionary, LITERAL_8, LITERAL_16, Phrase,
};

/// LZ-String encoder for one alphabet.
///
/// All dictionary and width state is created inside [`encode`](Self::encode),
/// so an encoder can be reused for unrelated inputs.
#[derive(Debug, Clone, Copy)]
pub struct LzEncoder<'a, A: Alphabet> {
    alphabet: &'a A,
}

/// Per-call encoder state.
struct EncodeState<'a, A: Alphabet> {
    dict: EncoderDictionary,
    width: CodeWidth,
    writer: UnitWriter<'a, A>,
}

impl<A: Alphabet> EncodeState<'_, A> {
    /// Emit the code for `phrase`, or a literal escape on its first use.
    fn emit(&mut self, phrase: &Phrase) {
        if self.dict.take_pending(phrase) {
            let unit = phrase.head;
            if unit < 256 {
                self.writer.write_bits(LITERAL_8, self.width.bits());
                self.writer.write_bits(u32::from(unit), 8);
            } else {
                self.writer.write_bits(LITERAL_16, self.width.bits());
                self.writer.write_bits(u32::from(unit), 16);
            }
            // The literal itself occupies a dictionary slot.
            self.width.tick();
        } else {
            self.writer.write_bits(phrase.code, self.width.bits());
        }
        self.width.tick();
    }
}

impl<'a, A: Alphabet> LzEncoder<'a, A> {
    /// Create an encoder producing units of `alphabet`.
    pub fn new(alphabet: &'a A) -> Self {
        Self { alphabet }
    }

    /// Compress UTF-16 code units.
    ///
    /// # Algorithm
    ///
    /// 1. Extend the current token `w` while `w + c` is in the dictionary
    /// 2. Otherwise emit `w` (as a literal escape if `w` is a single unit
    ///    that was never emitted), add `w + c`, restart from `c`
    /// 3. Emit the final token, then the end-of-stream code
    /// 4. Pad the last output unit with zero bits
    ///
    /// Empty input still produces a terminated stream; the public entry
    /// points short-circuit it.
    pub fn encode(&self, input: &[u16]) -> Vec<u16> {
        let mut state = EncodeState {
            dict: EncoderDictionary::new(),
            width: CodeWidth::ENCODER,
            writer: UnitWriter::with_capacity(self.alphabet, (input.len() / 5).max(255)),
        };

        let mut current: Option<Phrase> = None;

        for &unit in input {
            let literal = state.dict.literal(unit);

            current = Some(match current {
                None => literal,
                Some(w) => match state.dict.extend(&w, unit) {
                    Some(longer) => longer,
                    None => {
                        state.emit(&w);
                        state.dict.add_phrase(&w, unit);
                        literal
                    }
                },
            });
        }

        if let Some(w) = current {
            state.emit(&w);
        }

        state.writer.write_bits(END_OF_STREAM, state.width.bits());

        log::trace!(
            "lz-string encode: {} units in, {} {} units out, {} codes, {}-bit codes",
            input.len(),
            state.writer.units_written() + 1,
            self.alphabet.name(),
            state.dict.next_code(),
            state.width.bits()
        );

        state.writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{KeyedAlphabet, Raw, Utf16Safe};

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_encode_empty_is_terminator() {
        let encoder = LzEncoder::new(&Raw);
        assert_eq!(encoder.encode(&[]), vec![16384]);
    }

    #[test]
    fn test_encode_known_raw() {
        let encoder = LzEncoder::new(&Raw);
        assert_eq!(encoder.encode(&units("aaaaaaaaaa")), vec![8589, 26624]);
        assert_eq!(encoder.encode(&units("A")), vec![8336]);
    }

    #[test]
    fn test_encode_known_utf16_safe() {
        let encoder = LzEncoder::new(&Utf16Safe);
        assert_eq!(encoder.encode(&units("aaaaaaaaaa")), vec![4326, 23072]);
    }

    #[test]
    fn test_encode_16_bit_literal() {
        let encoder = LzEncoder::new(&Raw);
        assert_eq!(
            encoder.encode(&units("€uro")),
            vec![36161, 1392, 19983, 25600]
        );
    }

    #[test]
    fn test_encode_base64_units_are_ascii() {
        let b64 = KeyedAlphabet::BASE64;
        let encoder = LzEncoder::new(&b64);
        let out = encoder.encode(&units("TOBEORNOTTOBEORTOBEORNOT"));
        let text = String::from_utf16(&out).unwrap();
        assert_eq!(text, "CoeQQgoiBKByLFJGSpwUA");
    }

    #[test]
    fn test_encoder_is_reusable() {
        let encoder = LzEncoder::new(&Raw);
        let first = encoder.encode(&units("hello world"));
        let _ = encoder.encode(&units("something else entirely"));
        assert_eq!(encoder.encode(&units("hello world")), first);
    }
}
