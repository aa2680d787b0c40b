//! Oriented substitution rules.

use std::cmp::Ordering;
use std::fmt;

use canonica_core::{HashedWord, ShortlexHasher, WordBuf};

/// A rewrite rule between two words denoting the same algebraic element.
///
/// Rules are always oriented downhill: the left-hand side is strictly
/// shortlex-greater than the right-hand side, so every application strictly
/// decreases shortlex rank and any sequence of applications terminates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    lhs: HashedWord,
    rhs: HashedWord,
}

impl SubstitutionRule {
    /// Orients a pair of equal-in-meaning words into a rule.
    ///
    /// The shortlex-larger side becomes the pattern regardless of argument
    /// order. Returns `None` when the sides are equal: a rule rewriting a
    /// word to itself is degenerate and dropped.
    #[must_use]
    pub fn new(a: HashedWord, b: HashedWord) -> Option<Self> {
        match a.hash().cmp(&b.hash()) {
            Ordering::Greater => Some(Self { lhs: a, rhs: b }),
            Ordering::Less => Some(Self { lhs: b, rhs: a }),
            Ordering::Equal => {
                tracing::debug!(word = %a, "dropping degenerate rule");
                None
            }
        }
    }

    /// Returns the pattern side.
    #[must_use]
    pub fn lhs(&self) -> &HashedWord {
        &self.lhs
    }

    /// Returns the replacement side.
    #[must_use]
    pub fn rhs(&self) -> &HashedWord {
        &self.rhs
    }

    /// Returns the leftmost position where the pattern occurs in `word`.
    #[must_use]
    pub fn match_at(&self, word: &HashedWord) -> Option<usize> {
        self.lhs.matches_anywhere(word.operators())
    }

    /// Applies the rule at a known match position.
    ///
    /// A zero replacement annihilates the whole word, not just the matched
    /// segment. The position must come from [`match_at`](Self::match_at) or
    /// an equivalent check; it is verified only in debug builds.
    #[must_use]
    pub fn apply_at(&self, word: &HashedWord, at: usize, hasher: &ShortlexHasher) -> HashedWord {
        debug_assert!(self.lhs.matches(&word.operators()[at..]));
        if self.rhs.is_zero() {
            return HashedWord::zero();
        }
        let ops = word.operators();
        let mut spliced = WordBuf::with_capacity(ops.len() - self.lhs.len() + self.rhs.len());
        spliced.extend_from_slice(&ops[..at]);
        spliced.extend_from_slice(self.rhs.operators());
        spliced.extend_from_slice(&ops[at + self.lhs.len()..]);
        HashedWord::from_validated(spliced, hasher)
    }

    /// Applies the rule once at the leftmost match, if there is one.
    #[must_use]
    pub fn reduce_once(&self, word: &HashedWord, hasher: &ShortlexHasher) -> Option<HashedWord> {
        self.match_at(word).map(|at| self.apply_at(word, at, hasher))
    }
}

impl fmt::Display for SubstitutionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.lhs, self.rhs)
    }
}
