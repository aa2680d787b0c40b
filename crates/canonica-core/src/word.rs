//! Hashed operator words.
//!
//! A [`HashedWord`] carries a sequence of operator identifiers together
//! with its shortlex hash, computed once at construction. Equality checks
//! and ordering run on the hash, while the substring machinery rewriting
//! needs (prefix matching, leftmost occurrence search, suffix/prefix
//! overlap measurement) runs on the raw sequence.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use crate::conjugate::ConjugationMode;
use crate::error::WordError;
use crate::hasher::{ShortlexHasher, ZERO_WORD_HASH};

/// Identifier of a single operator, in `0..radix`.
pub type OperatorId = u32;

/// Backing storage for a word. Words up to 8 operators live inline;
/// longer ones spill to the heap.
pub type WordBuf = SmallVec<[OperatorId; 8]>;

/// A word of operator identifiers with its shortlex hash attached.
///
/// Besides ordinary operator sequences there are two distinguished words:
/// the empty identity word, hashing to the hasher offset, and the zero
/// word, hashing to [`ZERO_WORD_HASH`]. Both carry an empty sequence; they
/// are told apart by hash alone. The zero word is absorbing: it has no
/// operators to match on and substitution into it never fires.
#[derive(Clone)]
pub struct HashedWord {
    ops: WordBuf,
    hash: u64,
}

impl HashedWord {
    /// Builds a word from raw operators, validating against `hasher`.
    ///
    /// Rejects words longer than the hashable bound and operators outside
    /// `0..radix`.
    pub fn new(ops: &[OperatorId], hasher: &ShortlexHasher) -> Result<Self, WordError> {
        if ops.len() > hasher.longest_hashable_word() {
            return Err(WordError::LengthExceeded {
                len: ops.len(),
                max: hasher.longest_hashable_word(),
            });
        }
        if let Some(&op) = ops.iter().find(|&&op| op >= hasher.radix()) {
            return Err(WordError::InvalidOperator {
                op,
                radix: hasher.radix(),
            });
        }
        let hash = hasher.hash(ops);
        Ok(Self {
            ops: WordBuf::from_slice(ops),
            hash,
        })
    }

    /// Builds a word from operators already known to be valid for `hasher`.
    ///
    /// This is the splice path used by rule application and catalog
    /// generation, where every candidate is derived from words that were
    /// validated on construction. Checked only in debug builds.
    #[must_use]
    pub fn from_validated(ops: WordBuf, hasher: &ShortlexHasher) -> Self {
        debug_assert!(ops.len() <= hasher.longest_hashable_word());
        debug_assert!(ops.iter().all(|&op| op < hasher.radix()));
        let hash = hasher.hash(&ops);
        Self { ops, hash }
    }

    /// Returns the empty identity word for `hasher`.
    #[must_use]
    pub fn identity(hasher: &ShortlexHasher) -> Self {
        Self {
            ops: WordBuf::new(),
            hash: hasher.offset(),
        }
    }

    /// Returns the zero word.
    ///
    /// The zero word is shortlex-smaller than every other word, including
    /// the identity, and is its own conjugate and normal form.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            ops: WordBuf::new(),
            hash: ZERO_WORD_HASH,
        }
    }

    /// Returns the shortlex hash.
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Returns the operator sequence.
    #[must_use]
    pub fn operators(&self) -> &[OperatorId] {
        &self.ops
    }

    /// Returns the number of operators in the word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True for the identity and zero words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// True for the zero word.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.hash == ZERO_WORD_HASH
    }

    /// True for the empty identity word.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty() && self.hash != ZERO_WORD_HASH
    }

    /// True if this word occurs at the very start of `range`.
    ///
    /// The empty word matches everywhere.
    #[must_use]
    pub fn matches(&self, range: &[OperatorId]) -> bool {
        range.len() >= self.ops.len() && range[..self.ops.len()] == self.ops[..]
    }

    /// Returns the leftmost position where this word occurs as a
    /// contiguous subsequence of `range`, or `None`.
    #[must_use]
    pub fn matches_anywhere(&self, range: &[OperatorId]) -> Option<usize> {
        if self.ops.len() > range.len() {
            return None;
        }
        (0..=range.len() - self.ops.len()).find(|&at| self.matches(&range[at..]))
    }

    /// Returns the length of the longest suffix of `self` that equals a
    /// prefix of `other`.
    ///
    /// Candidates are scanned from the longest down, so identical words
    /// report their full length. Empty and zero words never overlap.
    #[must_use]
    pub fn suffix_prefix_overlap(&self, other: &Self) -> usize {
        let longest = self.ops.len().min(other.ops.len());
        for k in (1..=longest).rev() {
            if self.ops[self.ops.len() - k..] == other.ops[..k] {
                return k;
            }
        }
        0
    }

    /// Returns the conjugate word: operators reversed, each replaced by
    /// its adjoint under `mode`, then re-hashed.
    ///
    /// The zero word is its own conjugate. `mode` must be valid for the
    /// hasher's radix; paired modes over odd alphabets are rejected by
    /// [`ConjugationMode::validate`] at context-construction time.
    #[must_use]
    pub fn conjugate(&self, mode: ConjugationMode, hasher: &ShortlexHasher) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        debug_assert!(mode.validate(hasher.radix()).is_ok());
        let ops: WordBuf = self
            .ops
            .iter()
            .rev()
            .map(|&op| mode.adjoint_of(op, hasher.radix()))
            .collect();
        let hash = hasher.hash(&ops);
        Self { ops, hash }
    }
}

impl PartialEq for HashedWord {
    fn eq(&self, other: &Self) -> bool {
        // The sequence comparison only distinguishes words hashed under
        // different hashers; within one hasher the hash is injective.
        self.hash == other.hash && self.ops == other.ops
    }
}

impl Eq for HashedWord {}

impl Hash for HashedWord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal words have equal shortlex hashes, so hashing the cached
        // value alone keeps Eq and Hash consistent.
        self.hash.hash(state);
    }
}

impl PartialOrd for HashedWord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HashedWord {
    /// Shortlex order via the cached hash. Only meaningful between words
    /// produced by the same hasher.
    fn cmp(&self, other: &Self) -> Ordering {
        self.hash.cmp(&other.hash)
    }
}

impl fmt::Display for HashedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.ops.is_empty() {
            return write!(f, "I");
        }
        for &op in &self.ops {
            if op < 26 {
                write!(f, "{}", char::from(b'a' + u8::try_from(op).unwrap_or(0)))?;
            } else {
                write!(f, "[{op}]")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for HashedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({}, hash={})", self, self.hash)
    }
}
