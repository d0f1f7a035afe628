//! Unit-granular bit packing for LZ-String streams.
//!
//! Codes are written least-significant bit first, but inside each output
//! unit the first bit written lands in the most significant used position.
//! Every payload produced by other LZ-String implementations relies on this
//! exact order.

use crate::alphabet::Alphabet;

/// Packs code bits into output units of an [`Alphabet`].
#[derive(Debug)]
pub struct UnitWriter<'a, A: Alphabet> {
    alphabet: &'a A,
    /// Bits per output unit.
    bits_per_unit: u32,
    /// Pending unit value.
    value: u16,
    /// Number of bits already placed in `value`.
    position: u32,
    output: Vec<u16>,
}

impl<'a, A: Alphabet> UnitWriter<'a, A> {
    /// Create a writer, reserving room for roughly `capacity` units.
    pub fn with_capacity(alphabet: &'a A, capacity: usize) -> Self {
        Self {
            alphabet,
            bits_per_unit: alphabet.bits_per_unit(),
            value: 0,
            position: 0,
            output: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    fn push_bit(&mut self, bit: u16) {
        self.value = (self.value << 1) | bit;
        if self.position == self.bits_per_unit - 1 {
            self.output.push(self.alphabet.encode_unit(self.value));
            self.position = 0;
            self.value = 0;
        } else {
            self.position += 1;
        }
    }

    /// Write the low `count` bits of `value`, least significant first.
    pub fn write_bits(&mut self, mut value: u32, count: u32) {
        for _ in 0..count {
            self.push_bit((value & 1) as u16);
            value >>= 1;
        }
    }

    /// Number of complete units emitted so far.
    pub fn units_written(&self) -> usize {
        self.output.len()
    }

    /// Pad the pending unit with zero bits and return the output.
    ///
    /// At least one padding bit is always shifted in, so a stream that is
    /// already unit-aligned gains a trailing all-zero unit.
    pub fn finish(mut self) -> Vec<u16> {
        loop {
            self.value <<= 1;
            if self.position == self.bits_per_unit - 1 {
                self.output.push(self.alphabet.encode_unit(self.value));
                break;
            }
            self.position += 1;
        }
        self.output
    }
}

/// Reads code bits back out of decoded unit values.
#[derive(Debug)]
pub struct UnitReader<'a> {
    /// Packed values, already mapped out of their alphabet.
    values: &'a [u16],
    /// Value of the unit being read.
    value: u16,
    /// Mask of the next bit to read from `value`.
    mask: u16,
    /// Mask of the first bit of every unit.
    reset: u16,
    /// Index of the next unit to load.
    index: usize,
}

impl<'a> UnitReader<'a> {
    /// Create a reader over `values`; `reset` is the alphabet's
    /// [`reset_value`](Alphabet::reset_value).
    pub fn new(values: &'a [u16], reset: u16) -> Self {
        Self {
            values,
            value: values.first().copied().unwrap_or(0),
            mask: reset,
            reset,
            index: 1,
        }
    }

    #[inline]
    fn read_bit(&mut self) -> bool {
        let bit = self.value & self.mask != 0;
        self.mask >>= 1;
        if self.mask == 0 {
            self.mask = self.reset;
            // Past the end the stream reads as zeros; callers detect
            // exhaustion through `is_exhausted`.
            self.value = self.values.get(self.index).copied().unwrap_or(0);
            self.index += 1;
        }
        bit
    }

    /// Read `count` bits (at most 32), least significant first.
    pub fn read_bits(&mut self, count: u32) -> u32 {
        let mut bits = 0u32;
        for i in 0..count {
            if self.read_bit() {
                bits |= 1 << i;
            }
        }
        bits
    }

    /// Whether the reader has moved beyond the last unit.
    pub fn is_exhausted(&self) -> bool {
        self.index > self.values.len()
    }

    /// Number of input units.
    pub fn units(&self) -> usize {
        self.values.len()
    }
}
