//! Conjugation policies for operator alphabets.
//!
//! Conjugating a word reverses it and replaces each operator by its
//! adjoint. How adjoints are spelled depends on how the alphabet lays out
//! adjoint pairs, which is a property of the caller's encoding, not of the
//! rewriting engine. The policy is picked once at context construction and
//! passed explicitly into conjugation calls.

use std::fmt;

use crate::error::WordError;
use crate::word::OperatorId;

/// Layout of adjoint pairs within an operator alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConjugationMode {
    /// Every operator is its own adjoint; conjugation is plain reversal.
    #[default]
    SelfAdjoint,
    /// The lower half of the alphabet holds the operators and the upper
    /// half their adjoints, in the same order: `op* = op +- radix/2`.
    Bunched,
    /// Adjoint pairs sit next to each other: `(2k)* = 2k + 1`.
    Interleaved,
}

impl ConjugationMode {
    /// Checks that an alphabet of `radix` operators can host this mode.
    ///
    /// `Bunched` and `Interleaved` pair operators two by two and therefore
    /// require an even radix; `SelfAdjoint` accepts any alphabet.
    pub fn validate(self, radix: u32) -> Result<(), WordError> {
        match self {
            ConjugationMode::SelfAdjoint => Ok(()),
            ConjugationMode::Bunched | ConjugationMode::Interleaved if radix % 2 == 0 => Ok(()),
            _ => Err(WordError::OddRadixConjugation {
                mode: self.name(),
                radix,
            }),
        }
    }

    /// Maps an operator to its adjoint.
    ///
    /// Applying the map twice returns the original operator in every mode.
    #[must_use]
    pub fn adjoint_of(self, op: OperatorId, radix: u32) -> OperatorId {
        debug_assert!(op < radix, "operator {op} out of range for radix {radix}");
        match self {
            ConjugationMode::SelfAdjoint => op,
            ConjugationMode::Bunched => {
                let half = radix / 2;
                if op < half {
                    op + half
                } else {
                    op - half
                }
            }
            ConjugationMode::Interleaved => op ^ 1,
        }
    }

    /// Returns the name of the mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ConjugationMode::SelfAdjoint => "self-adjoint",
            ConjugationMode::Bunched => "bunched",
            ConjugationMode::Interleaved => "interleaved",
        }
    }
}

impl fmt::Display for ConjugationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
