//! Shortlex ordering and order-preserving hashing.
//!
//! Words over a fixed alphabet are well-ordered by length first, then
//! lexicographically within a length. The hasher maps every word within its
//! length bound to a `u64` so that hash comparison and shortlex comparison
//! agree exactly, which lets hashes stand in for words everywhere ordering
//! or identity matters.

use std::cmp::Ordering;

use crate::word::OperatorId;

/// Hash value reserved for the zero word.
///
/// No ordinary word hashes to 0: the empty word hashes to the offset
/// (at least 1) and every operator contributes a positive digit.
pub const ZERO_WORD_HASH: u64 = 0;

/// Order-preserving positional hasher for words over a fixed radix.
///
/// For a word `w = w0 w1 .. w(n-1)` over radix `r`, with base `b = r + 1`,
///
/// ```text
/// hash(w) = offset + sum_i (w_i + 1) * b^(n-1-i)
/// ```
///
/// Digits are drawn from `1..=r`, never 0, so a longer word always hashes
/// above every shorter word and two distinct words never collide. The empty
/// word hashes to `offset` (1 by default) and hash 0 stays reserved for the
/// zero word. Within [`longest_hashable_word`](Self::longest_hashable_word)
/// the map is injective and strictly monotone with respect to shortlex
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortlexHasher {
    radix: u32,
    offset: u64,
    max_len: usize,
}

impl ShortlexHasher {
    /// Creates a hasher for an alphabet of `radix` operators, offset 1.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is 0. The fallible construction paths live on the
    /// rule book and catalog, which validate the radix before building one.
    #[must_use]
    pub fn new(radix: u32) -> Self {
        Self::with_offset(radix, 1)
    }

    /// Creates a hasher with an explicit hash for the empty word.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is 0 or `offset` is 0 (offset 0 would collide with
    /// the reserved zero-word hash).
    #[must_use]
    pub fn with_offset(radix: u32, offset: u64) -> Self {
        assert!(radix >= 1, "alphabet must contain at least one operator");
        assert!(offset >= 1, "offset 0 collides with the zero word");
        let max_len = hashable_bound(radix, offset);
        Self {
            radix,
            offset,
            max_len,
        }
    }

    /// Returns the alphabet size.
    #[must_use]
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Returns the hash of the empty word.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the longest word length this hasher encodes injectively.
    ///
    /// Beyond this length the positional weights would wrap and order
    /// preservation would silently break, so [`crate::word::HashedWord`]
    /// construction rejects longer words outright.
    #[must_use]
    pub fn longest_hashable_word(&self) -> usize {
        self.max_len
    }

    /// Hashes a word of operator identifiers.
    ///
    /// Runs in `O(len)` with no allocation. Callers must keep the word
    /// within the hashable bound; [`crate::word::HashedWord::new`] is the
    /// checked entry point.
    #[must_use]
    pub fn hash(&self, word: &[OperatorId]) -> u64 {
        debug_assert!(
            word.len() <= self.max_len,
            "word of length {} exceeds the hashable bound {}",
            word.len(),
            self.max_len
        );
        let base = u64::from(self.radix) + 1;
        // Horner evaluation from the left. Every intermediate value is the
        // hash body of a prefix, so nothing here can exceed the final value,
        // which the length bound keeps below u64::MAX - offset + 1.
        let mut body: u64 = 0;
        for &op in word {
            debug_assert!(op < self.radix, "operator {op} out of range");
            body = body * base + (u64::from(op) + 1);
        }
        self.offset + body
    }

    /// Compares two words directly in shortlex order.
    ///
    /// Agrees with comparing [`hash`](Self::hash) values for words within
    /// the hashable bound, but works on raw slices of any length.
    #[must_use]
    pub fn compare(&self, a: &[OperatorId], b: &[OperatorId]) -> Ordering {
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

/// Longest `n` such that every length-`n` word still hashes within `u64`.
///
/// The largest hash of a length-`n` word is `offset + b^n - 1`, so the bound
/// is the largest `n` with `b^n <= u64::MAX - offset + 1`, computed in
/// `u128` to sidestep overflow in the search itself.
fn hashable_bound(radix: u32, offset: u64) -> usize {
    let base = u128::from(radix) + 1;
    let limit = u128::from(u64::MAX - offset) + 1;
    let mut len = 0;
    let mut power: u128 = 1;
    while power * base <= limit {
        power *= base;
        len += 1;
    }
    len
}
