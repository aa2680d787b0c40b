//! Rule ownership and reduction to normal form.

use canonica_core::{HashedWord, OperatorId, ShortlexHasher, WordError};
use rustc_hash::FxHashMap;

use crate::rule::SubstitutionRule;

/// An ordered collection of substitution rules over one alphabet.
///
/// The book owns the hasher, so every word flowing through it is hashed
/// consistently. Rules are kept in insertion order and indexed by pattern
/// hash. Both sides of an equation are reduced through the existing rules
/// before insertion, which keeps patterns irreducible with respect to the
/// rules that precede them and rules out duplicate patterns.
///
/// Reduction and completion borrow the book mutably or not at all; there
/// is no interior mutability, so a completed book can be shared freely
/// across threads for read-only queries.
#[derive(Debug, Clone)]
pub struct RuleBook {
    hasher: ShortlexHasher,
    rules: Vec<SubstitutionRule>,
    by_lhs: FxHashMap<u64, usize>,
}

impl RuleBook {
    /// Creates a rule book from an initial list of equations.
    ///
    /// Each equation is a pair of words asserted equal in the algebra; the
    /// shortlex-larger side becomes the pattern. Degenerate equations are
    /// logged and dropped. Construction fails if the radix is 0 or any word
    /// is ill-formed for it.
    pub fn new(
        radix: u32,
        equations: &[(&[OperatorId], &[OperatorId])],
    ) -> Result<Self, WordError> {
        if radix == 0 {
            return Err(WordError::InvalidRadix { radix });
        }
        let mut book = Self {
            hasher: ShortlexHasher::new(radix),
            rules: Vec::new(),
            by_lhs: FxHashMap::default(),
        };
        for &(a, b) in equations {
            book.push_equation(a, b)?;
        }
        Ok(book)
    }

    /// Adds the equation `a = b`, orienting it into a rule.
    ///
    /// Returns whether a rule was inserted; equations whose sides reduce to
    /// the same normal form add nothing.
    pub fn push_equation(
        &mut self,
        a: &[OperatorId],
        b: &[OperatorId],
    ) -> Result<bool, WordError> {
        let a = HashedWord::new(a, &self.hasher)?;
        let b = HashedWord::new(b, &self.hasher)?;
        Ok(self.insert_equation(a, b))
    }

    /// Adds the equation `lhs = 0`, annihilating every word containing `lhs`.
    pub fn push_annihilator(&mut self, lhs: &[OperatorId]) -> Result<bool, WordError> {
        let lhs = HashedWord::new(lhs, &self.hasher)?;
        Ok(self.insert_equation(lhs, HashedWord::zero()))
    }

    /// Reduces both sides, orients, and inserts. The single insertion path.
    pub(crate) fn insert_equation(&mut self, a: HashedWord, b: HashedWord) -> bool {
        let a = self.reduce(&a);
        let b = self.reduce(&b);
        let Some(rule) = SubstitutionRule::new(a, b) else {
            return false;
        };
        // A freshly reduced pattern is irreducible, so no existing rule can
        // share it: equality with a stored pattern would itself be a match.
        debug_assert!(!self.by_lhs.contains_key(&rule.lhs().hash()));
        tracing::trace!(rule = %rule, index = self.rules.len(), "inserting rule");
        self.by_lhs.insert(rule.lhs().hash(), self.rules.len());
        self.rules.push(rule);
        true
    }

    /// Reduces a word to its normal form under the current rules.
    ///
    /// Scans rules in insertion order, applies the first match at its
    /// leftmost position, and restarts until nothing fires. Every
    /// application strictly decreases shortlex rank, so this terminates.
    #[must_use]
    pub fn reduce(&self, word: &HashedWord) -> HashedWord {
        let mut current = word.clone();
        'rescan: loop {
            // The zero word is absorbing and has nothing to match on.
            if current.is_zero() {
                return current;
            }
            for rule in &self.rules {
                if let Some(next) = rule.reduce_once(&current, &self.hasher) {
                    current = next;
                    continue 'rescan;
                }
            }
            return current;
        }
    }

    /// Validates raw operators and reduces them to normal form.
    pub fn reduce_operators(&self, ops: &[OperatorId]) -> Result<HashedWord, WordError> {
        Ok(self.reduce(&HashedWord::new(ops, &self.hasher)?))
    }

    /// True if no rule in the book rewrites `word`.
    #[must_use]
    pub fn is_normal_form(&self, word: &HashedWord) -> bool {
        word.is_zero()
            || self
                .rules
                .iter()
                .all(|rule| rule.match_at(word).is_none())
    }

    /// Looks up the rule whose pattern has the given hash.
    #[must_use]
    pub fn rule_for_pattern(&self, hash: u64) -> Option<&SubstitutionRule> {
        self.by_lhs.get(&hash).map(|&index| &self.rules[index])
    }

    /// Returns the rules in insertion order.
    #[must_use]
    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the book holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the alphabet size.
    #[must_use]
    pub fn radix(&self) -> u32 {
        self.hasher.radix()
    }

    /// Returns the hasher shared by every word in the book.
    #[must_use]
    pub fn hasher(&self) -> &ShortlexHasher {
        &self.hasher
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_radix() {
        assert_eq!(
            RuleBook::new(0, &[]).unwrap_err(),
            WordError::InvalidRadix { radix: 0 }
        );
    }

    #[test]
    fn test_new_rejects_bad_operators() {
        assert_eq!(
            RuleBook::new(2, &[(&[0, 3], &[0])]).unwrap_err(),
            WordError::InvalidOperator { op: 3, radix: 2 }
        );
    }

    #[test]
    fn test_degenerate_equation_adds_nothing() {
        let mut book = RuleBook::new(2, &[]).unwrap();
        assert!(!book.push_equation(&[0, 1], &[0, 1]).unwrap());
        assert!(book.is_empty());
    }

    #[test]
    fn test_reduce_to_fixpoint() {
        // ab -> a and ba -> b, without completion: abab -> aab -> aa, and
        // aa is a normal form of this book (aa -> a is only derived by
        // completion).
        let book = RuleBook::new(2, &[(&[0, 1], &[0]), (&[1, 0], &[1])]).unwrap();
        let reduced = book.reduce_operators(&[0, 1, 0, 1]).unwrap();
        assert_eq!(reduced.operators(), &[0, 0]);
        assert!(book.is_normal_form(&reduced));
    }

    #[test]
    fn test_reduce_prefers_earlier_rules() {
        // Both rules match bb; the first one inserted wins each step.
        let book = RuleBook::new(2, &[(&[1, 1], &[0]), (&[1, 1], &[1])]).unwrap();
        // The second equation is itself reduced on insertion: bb -> a first,
        // so it becomes a = b reoriented to b -> a.
        let reduced = book.reduce_operators(&[1, 1]).unwrap();
        assert_eq!(reduced.operators(), &[0]);
    }

    #[test]
    fn test_insertion_reduces_sides_first() {
        let mut book = RuleBook::new(2, &[(&[0, 1], &[0])]).unwrap();
        // abb reduces to ab reduces to a before orientation, so this
        // inserts b -> a rather than a duplicate pattern.
        assert!(book.push_equation(&[0, 1, 1], &[1]).unwrap());
        assert_eq!(book.len(), 2);
        assert_eq!(book.rules()[1].to_string(), "b -> a");
    }

    #[test]
    fn test_annihilator_reduces_to_zero() {
        let mut book = RuleBook::new(2, &[]).unwrap();
        assert!(book.push_annihilator(&[0, 0]).unwrap());

        let reduced = book.reduce_operators(&[1, 0, 0, 1]).unwrap();
        assert!(reduced.is_zero());
        // Words without the pattern are untouched.
        let other = book.reduce_operators(&[0, 1, 0]).unwrap();
        assert_eq!(other.operators(), &[0, 1, 0]);
    }

    #[test]
    fn test_zero_and_identity_are_normal_forms() {
        let book = RuleBook::new(2, &[(&[0, 1], &[0])]).unwrap();
        assert!(book.reduce(&HashedWord::zero()).is_zero());
        let identity = HashedWord::identity(book.hasher());
        assert_eq!(book.reduce(&identity), identity);
    }

    #[test]
    fn test_rule_for_pattern() {
        let book = RuleBook::new(2, &[(&[0, 1], &[0]), (&[1, 0], &[1])]).unwrap();
        let ab = HashedWord::new(&[0, 1], book.hasher()).unwrap();
        let rule = book.rule_for_pattern(ab.hash()).unwrap();
        assert_eq!(rule.lhs(), &ab);
        assert!(book.rule_for_pattern(12345).is_none());
    }

    #[test]
    fn test_empty_book_reduces_nothing() {
        let book = RuleBook::new(3, &[]).unwrap();
        let word = book.reduce_operators(&[2, 1, 0]).unwrap();
        assert_eq!(word.operators(), &[2, 1, 0]);
    }
}
