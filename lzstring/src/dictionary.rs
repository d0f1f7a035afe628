//! LZ-String dictionaries and the code width schedule.
//!
//! Encoder and decoder grow their dictionaries independently, one entry per
//! emitted code, and must tick their [`CodeWidth`] in lockstep. Codes 0-2
//! are reserved control codes, so real entries start at 3.

use rustc_hash::{FxHashMap, FxHashSet};

/// Control code: an 8-bit literal follows.
pub const LITERAL_8: u32 = 0;
/// Control code: a 16-bit literal follows.
pub const LITERAL_16: u32 = 1;
/// Control code: end of stream.
pub const END_OF_STREAM: u32 = 2;
/// Number of reserved control codes.
pub const RESERVED_CODES: u32 = 3;

/// Width in bits of the next code, and the countdown to its growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeWidth {
    num_bits: u32,
    enlarge_in: u32,
}

impl CodeWidth {
    /// Initial schedule of the encoder.
    ///
    /// The first literal is counted once more than on the decoder side,
    /// which starts after it has been read.
    pub const ENCODER: Self = Self {
        num_bits: 2,
        enlarge_in: 2,
    };

    /// Initial schedule of the decoder once the first literal is known.
    pub const DECODER: Self = Self {
        num_bits: 3,
        enlarge_in: 4,
    };

    /// Width of the first control code of a stream.
    pub const FIRST_CODE_BITS: u32 = 2;

    /// Current code width in bits.
    #[inline]
    pub fn bits(&self) -> u32 {
        self.num_bits
    }

    /// Count one dictionary addition; widen codes when the countdown ends.
    #[inline]
    pub fn tick(&mut self) {
        self.enlarge_in -= 1;
        if self.enlarge_in == 0 {
            self.enlarge_in = 1 << self.num_bits;
            self.num_bits += 1;
        }
    }
}

/// The token currently being extended by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrase {
    /// Dictionary code of the whole token.
    pub code: u32,
    /// First code unit of the token.
    pub head: u16,
    /// Whether the token is a single code unit.
    pub single: bool,
}

/// Encoder side dictionary: an append-only trie keyed by
/// `(prefix code, next unit)`.
#[derive(Debug)]
pub struct EncoderDictionary {
    /// Single-unit tokens.
    literals: FxHashMap<u16, u32>,
    /// Multi-unit tokens.
    phrases: FxHashMap<(u32, u16), u32>,
    /// Single-unit tokens not yet emitted as a literal.
    pending: FxHashSet<u16>,
    next_code: u32,
}

impl EncoderDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self {
            literals: FxHashMap::default(),
            phrases: FxHashMap::default(),
            pending: FxHashSet::default(),
            next_code: RESERVED_CODES,
        }
    }

    /// Token for a single unit, registering it as pending on first sight.
    pub fn literal(&mut self, unit: u16) -> Phrase {
        let code = match self.literals.get(&unit) {
            Some(&code) => code,
            None => {
                let code = self.allocate();
                self.literals.insert(unit, code);
                self.pending.insert(unit);
                code
            }
        };
        Phrase {
            code,
            head: unit,
            single: true,
        }
    }

    /// Token for `phrase` followed by `unit`, if it is already known.
    pub fn extend(&self, phrase: &Phrase, unit: u16) -> Option<Phrase> {
        self.phrases
            .get(&(phrase.code, unit))
            .map(|&code| Phrase {
                code,
                head: phrase.head,
                single: false,
            })
    }

    /// Add `phrase` followed by `unit` and return its code.
    pub fn add_phrase(&mut self, phrase: &Phrase, unit: u16) -> u32 {
        let code = self.allocate();
        self.phrases.insert((phrase.code, unit), code);
        code
    }

    /// Clear the pending mark of `phrase`; returns whether it was set.
    pub fn take_pending(&mut self, phrase: &Phrase) -> bool {
        phrase.single && self.pending.remove(&phrase.head)
    }

    /// Next code that will be assigned.
    pub fn next_code(&self) -> u32 {
        self.next_code
    }

    fn allocate(&mut self) -> u32 {
        let code = self.next_code;
        self.next_code += 1;
        code
    }
}

impl Default for EncoderDictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// A dictionary entry as a range of the decoder's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Offset of the first unit in the output.
    pub start: usize,
    /// Number of units.
    pub len: usize,
}

impl Span {
    /// Exclusive end offset.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Decoder side dictionary: an append-only arena of output spans.
///
/// Every entry is a substring the decoder has already written, so storing
/// offsets instead of owned strings keeps lookups O(1) and copies out of
/// the dictionary cheap.
#[derive(Debug)]
pub struct DecoderDictionary {
    entries: Vec<Span>,
}

impl DecoderDictionary {
    /// Create a dictionary holding only the reserved slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut entries = Vec::with_capacity(capacity.max(RESERVED_CODES as usize));
        entries.resize(RESERVED_CODES as usize, Span::default());
        Self { entries }
    }

    /// Append an entry and return its code.
    pub fn push(&mut self, span: Span) -> u32 {
        self.entries.push(span);
        (self.entries.len() - 1) as u32
    }

    /// Look up a non-reserved code.
    pub fn get(&self, code: u32) -> Option<Span> {
        if code < RESERVED_CODES {
            return None;
        }
        self.entries.get(code as usize).copied()
    }

    /// Number of slots, reserved ones included. Equals the next code.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
