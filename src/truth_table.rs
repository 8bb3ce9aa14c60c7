//! Truth tables and input domains.
//!
//! A [`TruthTable`] is a fixed-width bitmask: bit `k` holds the output of a
//! Boolean function on the `k`-th input assignment. All tables taking part in
//! one search share the width of their [`Domain`].
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::error::SynthError;

/// Maximum number of inputs whose truth table fits into a `u64`.
pub const MAX_INPUTS: u32 = 6;

/// A truth table over `width` input assignments.
///
/// # Invariants
///
/// - `1 <= width <= 64`
/// - Bits at positions `>= width` are always zero
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TruthTable {
    bits: u64,
    width: u32,
}

impl TruthTable {
    /// Creates a truth table, rejecting values that do not fit into `width` rows.
    pub fn new(bits: u64, width: u32) -> Result<Self, SynthError> {
        assert!(
            (1..=64).contains(&width),
            "Truth table width should be in the range 1..=64"
        );
        if bits & !mask(width) != 0 {
            return Err(SynthError::ValueOutOfRange {
                name: None,
                value: bits,
                width,
            });
        }
        Ok(Self { bits, width })
    }

    pub fn bits(self) -> u64 {
        self.bits
    }

    pub fn width(self) -> u32 {
        self.width
    }
}

fn mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1 << width) - 1
    }
}

impl Not for TruthTable {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            bits: !self.bits & mask(self.width),
            width: self.width,
        }
    }
}

impl BitAnd for TruthTable {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        assert_eq!(self.width, rhs.width, "Truth table widths differ");
        Self {
            bits: self.bits & rhs.bits,
            width: self.width,
        }
    }
}

impl BitOr for TruthTable {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        assert_eq!(self.width, rhs.width, "Truth table widths differ");
        Self {
            bits: self.bits | rhs.bits,
            width: self.width,
        }
    }
}

impl BitXor for TruthTable {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        assert_eq!(self.width, rhs.width, "Truth table widths differ");
        Self {
            bits: self.bits ^ rhs.bits,
            width: self.width,
        }
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = (self.width / 4).max(1) as usize;
        write!(f, "0x{:0digits$x}", self.bits, digits = digits)
    }
}

/// The input domain of a search: `inputs` Boolean variables, `2^inputs` rows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Domain {
    inputs: u32,
}

impl Domain {
    pub fn new(inputs: u32) -> Result<Self, SynthError> {
        if inputs == 0 {
            return Err(SynthError::NoInputs);
        }
        if inputs > MAX_INPUTS {
            return Err(SynthError::TooManyInputs(inputs));
        }
        Ok(Self { inputs })
    }

    pub fn inputs(self) -> u32 {
        self.inputs
    }

    /// Number of rows in every truth table of this domain.
    pub fn width(self) -> u32 {
        1 << self.inputs
    }

    /// Canonical truth table of the `index`-th input (0-based, most significant first).
    ///
    /// Rows are enumerated in increasing binary order, and row `k` is set iff
    /// bit `inputs - 1 - index` of `k` is clear. For three inputs this gives
    /// `0x0f`, `0x33` and `0x55`.
    pub fn variable(self, index: u32) -> TruthTable {
        assert!(
            index < self.inputs,
            "Input index {} is out of range 0..{}",
            index,
            self.inputs
        );
        let shift = self.inputs - 1 - index;
        let bits = (0..self.width())
            .filter(|k| (k >> shift) & 1 == 0)
            .fold(0u64, |acc, k| acc | (1 << k));
        TruthTable {
            bits,
            width: self.width(),
        }
    }

    /// Default name of the `index`-th input: `a`, `b`, `c`, ...
    pub fn default_name(self, index: u32) -> String {
        assert!(index < self.inputs);
        char::from(b'a' + index as u8).to_string()
    }

    /// Parses `bits` as a truth table of this domain.
    pub fn table(self, bits: u64) -> Result<TruthTable, SynthError> {
        TruthTable::new(bits, self.width())
    }
}
