//! Error types for catalog lookups.

use canonica_core::WordError;
use thiserror::Error;

/// Errors raised by catalog construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// An index beyond the generated range was looked up.
    ///
    /// Recoverable: the caller may `generate` further lengths and retry.
    #[error("index {index} is out of range for a catalog of {len} words")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of words generated so far.
        len: usize,
    },

    /// A hash with no cataloged word behind it was looked up.
    ///
    /// Either the word is longer than anything generated yet, or the hash
    /// came from a different hasher.
    #[error("hash {hash} does not belong to any cataloged word")]
    HashNotCataloged {
        /// The unmatched hash.
        hash: u64,
    },

    /// An underlying word was ill-formed for the catalog's alphabet.
    #[error(transparent)]
    Word(#[from] WordError),
}
