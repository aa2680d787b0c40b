//! Error types for word construction and validation.

use thiserror::Error;

/// Errors raised when validating, hashing, or conjugating operator words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    /// The word is longer than the hasher can encode injectively.
    #[error("word of length {len} exceeds the hashable bound of {max}")]
    LengthExceeded {
        /// Length of the offending word.
        len: usize,
        /// Longest length the hasher encodes without wrapping.
        max: usize,
    },

    /// An operator identifier fell outside the alphabet.
    #[error("operator {op} is out of range for radix {radix}")]
    InvalidOperator {
        /// The offending operator identifier.
        op: u32,
        /// Size of the alphabet it was checked against.
        radix: u32,
    },

    /// The alphabet must contain at least one operator.
    #[error("radix {radix} is not a valid alphabet size")]
    InvalidRadix {
        /// The rejected alphabet size.
        radix: u32,
    },

    /// A paired conjugation mode was requested for an odd alphabet.
    #[error("conjugation mode `{mode}` pairs operators and requires an even radix, got {radix}")]
    OddRadixConjugation {
        /// Name of the rejected mode.
        mode: &'static str,
        /// The odd alphabet size.
        radix: u32,
    },
}
