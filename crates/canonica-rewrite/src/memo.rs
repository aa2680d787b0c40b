//! Canonical-form memoization for the query phase.
//!
//! Once a book is completed it is read-only, and the surrounding layers
//! canonicalize large batches of words against it, many of them repeats.
//! The cache remembers the normal form keyed by the word's shortlex hash,
//! which identifies the word completely within one hasher.

use canonica_core::HashedWord;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::rulebook::RuleBook;

/// A shared memo from word hash to canonical form.
///
/// Internally synchronized, so any number of query threads can share one
/// cache by reference while the rule book itself stays lock-free. Lookups
/// take the read lock; only misses take the write lock.
#[derive(Debug, Default)]
pub struct CanonicalCache {
    memo: RwLock<FxHashMap<u64, HashedWord>>,
}

impl CanonicalCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical form of `word` under `book`, consulting the
    /// cache first and recording the answer on a miss.
    ///
    /// The normal form is also recorded under its own hash, so reducing a
    /// word that is already canonical never reduces twice.
    #[must_use]
    pub fn canonicalize(&self, book: &RuleBook, word: &HashedWord) -> HashedWord {
        if let Some(hit) = self.memo.read().get(&word.hash()) {
            return hit.clone();
        }
        let canonical = book.reduce(word);
        let mut memo = self.memo.write();
        // A racing thread may have filled either entry between the locks;
        // both threads computed the same normal form, so keep the first.
        memo.entry(canonical.hash())
            .or_insert_with(|| canonical.clone());
        memo.entry(word.hash()).or_insert_with(|| canonical.clone());
        canonical
    }

    /// Returns the cached canonical form of the word with this hash, if any.
    #[must_use]
    pub fn get(&self, hash: u64) -> Option<HashedWord> {
        self.memo.read().get(&hash).cloned()
    }

    /// Returns the number of memoized words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.memo.read().len()
    }

    /// True if nothing has been memoized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memo.read().is_empty()
    }

    /// Drops every memoized entry.
    ///
    /// Required after growing the book further; cached normal forms are
    /// only valid for the rule set they were computed against.
    pub fn clear(&self) {
        self.memo.write().clear();
    }
}
