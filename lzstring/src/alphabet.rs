//! Output alphabets (raw, UTF-16 safe, Base64, URI safe).
//!
//! An alphabet decides how many bits of the compressed stream are packed
//! into one output unit and how that packed value is spelled. Compression
//! and decompression are otherwise identical for every alphabet.

/// Strategy for turning packed bit values into output units and back.
pub trait Alphabet {
    /// Short name used in error messages.
    fn name(&self) -> &'static str;

    /// Number of stream bits carried by one output unit.
    fn bits_per_unit(&self) -> u32;

    /// Mask of the first bit read from each unit during decompression.
    fn reset_value(&self) -> u16 {
        1 << (self.bits_per_unit() - 1)
    }

    /// Spell a packed value (`< 2^bits_per_unit`) as an output unit.
    fn encode_unit(&self, value: u16) -> u16;

    /// Recover the packed value from an input unit, or `None` if the unit
    /// is not part of this alphabet.
    fn decode_unit(&self, unit: u16) -> Option<u16>;
}

/// Raw 16-bit code units. Output may contain any value, including lone
/// surrogates, so it is only suitable for storage that keeps UTF-16 intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Raw;

impl Alphabet for Raw {
    fn name(&self) -> &'static str {
        "raw"
    }

    fn bits_per_unit(&self) -> u32 {
        16
    }

    fn encode_unit(&self, value: u16) -> u16 {
        value
    }

    fn decode_unit(&self, unit: u16) -> Option<u16> {
        Some(unit)
    }
}

/// 15 bits per unit, offset by 32 so no control character or surrogate is
/// ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Utf16Safe;

impl Utf16Safe {
    /// Offset added to every packed value.
    pub const OFFSET: u16 = 32;

    /// Largest unit this alphabet produces.
    pub const MAX_UNIT: u16 = Self::OFFSET + (1 << 15) - 1;
}

impl Alphabet for Utf16Safe {
    fn name(&self) -> &'static str {
        "utf16"
    }

    fn bits_per_unit(&self) -> u32 {
        15
    }

    fn encode_unit(&self, value: u16) -> u16 {
        value + Self::OFFSET
    }

    fn decode_unit(&self, unit: u16) -> Option<u16> {
        (Self::OFFSET..=Self::MAX_UNIT)
            .contains(&unit)
            .then(|| unit - Self::OFFSET)
    }
}

const BASE64_KEYS: &[u8; 65] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";
const URI_SAFE_KEYS: &[u8; 65] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+-$";

const NOT_IN_ALPHABET: u8 = 0xFF;

const fn reverse_table(keys: &[u8; 65]) -> [u8; 128] {
    let mut table = [NOT_IN_ALPHABET; 128];
    let mut i = 0;
    while i < keys.len() {
        table[keys[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// A 6-bit alphabet spelled with 64 ASCII symbols plus a 65th padding
/// symbol.
///
/// The padding symbol decodes to 64; only the low six bits of a unit are
/// ever read, so it contributes zero bits to the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyedAlphabet {
    name: &'static str,
    keys: &'static [u8; 65],
    reverse: [u8; 128],
}

impl KeyedAlphabet {
    /// Standard Base64 symbols (`A-Za-z0-9+/`, padding `=`).
    pub const BASE64: Self = Self {
        name: "base64",
        keys: BASE64_KEYS,
        reverse: reverse_table(BASE64_KEYS),
    };

    /// URI component safe symbols (`A-Za-z0-9+-`, 65th symbol `$`).
    pub const URI_SAFE: Self = Self {
        name: "uri",
        keys: URI_SAFE_KEYS,
        reverse: reverse_table(URI_SAFE_KEYS),
    };

    /// The padding symbol (the 65th key).
    pub fn padding(&self) -> char {
        char::from(self.keys[64])
    }

    /// Whether `c` is one of the 65 symbols of this alphabet.
    pub fn contains(&self, c: char) -> bool {
        u8::try_from(c).is_ok_and(|b| self.keys.contains(&b))
    }
}

impl Alphabet for KeyedAlphabet {
    fn name(&self) -> &'static str {
        self.name
    }

    fn bits_per_unit(&self) -> u32 {
        6
    }

    fn encode_unit(&self, value: u16) -> u16 {
        u16::from(self.keys[usize::from(value)])
    }

    fn decode_unit(&self, unit: u16) -> Option<u16> {
        let index = *self.reverse.get(usize::from(unit))?;
        (index != NOT_IN_ALPHABET).then_some(u16::from(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_values() {
        assert_eq!(Raw.reset_value(), 32768);
        assert_eq!(Utf16Safe.reset_value(), 16384);
        assert_eq!(KeyedAlphabet::BASE64.reset_value(), 32);
        assert_eq!(KeyedAlphabet::URI_SAFE.reset_value(), 32);
    }

    #[test]
    fn test_utf16_safe_range() {
        assert_eq!(Utf16Safe.encode_unit(0), 32);
        assert_eq!(Utf16Safe.encode_unit(0x7FFF), Utf16Safe::MAX_UNIT);
        assert_eq!(Utf16Safe.decode_unit(32), Some(0));
        assert_eq!(Utf16Safe.decode_unit(Utf16Safe::MAX_UNIT), Some(0x7FFF));
        assert_eq!(Utf16Safe.decode_unit(31), None);
        assert_eq!(Utf16Safe.decode_unit(Utf16Safe::MAX_UNIT + 1), None);
        assert!(Utf16Safe::MAX_UNIT < 0xD800);
    }

    #[test]
    fn test_base64_lookup() {
        let b64 = KeyedAlphabet::BASE64;
        for value in 0..64u16 {
            let unit = b64.encode_unit(value);
            assert_eq!(b64.decode_unit(unit), Some(value));
        }
        assert_eq!(b64.decode_unit(u16::from(b'=')), Some(64));
        assert_eq!(b64.decode_unit(u16::from(b'-')), None);
        assert_eq!(b64.decode_unit(u16::from(b'$')), None);
        assert_eq!(b64.decode_unit(0x00E9), None);
        assert_eq!(b64.padding(), '=');
    }

    #[test]
    fn test_uri_safe_lookup() {
        let uri = KeyedAlphabet::URI_SAFE;
        assert_eq!(uri.encode_unit(62), u16::from(b'+'));
        assert_eq!(uri.encode_unit(63), u16::from(b'-'));
        assert_eq!(uri.decode_unit(u16::from(b'$')), Some(64));
        assert_eq!(uri.decode_unit(u16::from(b'/')), None);
        assert!(uri.contains('-'));
        assert!(!uri.contains('/'));
        assert!(!uri.contains('é'));
    }
}
