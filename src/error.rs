//! Error types for configuring and running a synthesis search.

use std::fmt;
use std::io;

/// Errors reported by [`ExpressionPool`][crate::pool::ExpressionPool] and the driver.
///
/// All of them are configuration or call-order errors: once a search is set up
/// correctly it runs to completion deterministically.
#[derive(Debug)]
pub enum SynthError {
    /// The domain must have at least one input.
    NoInputs,
    /// The domain has more inputs than fit into a `u64` truth table.
    TooManyInputs(u32),
    /// A truth table does not have the width of the search domain.
    WidthMismatch { expected: u32, got: u32 },
    /// A seed value has bits set outside of its domain.
    ValueOutOfRange {
        name: Option<String>,
        value: u64,
        width: u32,
    },
    /// Two seeds share the same name.
    DuplicateName(String),
    /// A seed name is empty or contains operator characters.
    InvalidName(String),
    /// Seeds can only be added before the first combination step.
    SeedAfterCombine(String),
    /// Combination levels must be visited as `1, 2, 3, ...` without gaps.
    LevelOutOfOrder { expected: u32, got: u32 },
    /// Writing the report failed.
    Io(io::Error),
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::NoInputs => write!(f, "Domain must have at least one input"),
            SynthError::TooManyInputs(n) => write!(
                f,
                "Domain has {} inputs, at most {} are supported",
                n,
                crate::truth_table::MAX_INPUTS
            ),
            SynthError::WidthMismatch { expected, got } => write!(
                f,
                "Truth table has width {}, expected {}",
                got, expected
            ),
            SynthError::ValueOutOfRange { name, value, width } => match name {
                Some(name) => write!(
                    f,
                    "Value {:#x} of '{}' does not fit into {} rows",
                    value, name, width
                ),
                None => write!(f, "Value {:#x} does not fit into {} rows", value, width),
            },
            SynthError::DuplicateName(name) => write!(f, "Duplicate variable name '{}'", name),
            SynthError::InvalidName(name) => write!(f, "Invalid variable name {:?}", name),
            SynthError::SeedAfterCombine(name) => write!(
                f,
                "Cannot seed '{}' after the search has started",
                name
            ),
            SynthError::LevelOutOfOrder { expected, got } => write!(
                f,
                "Combination level {} requested, expected level {}",
                got, expected
            ),
            SynthError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SynthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SynthError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SynthError {
    fn from(err: io::Error) -> Self {
        SynthError::Io(err)
    }
}
