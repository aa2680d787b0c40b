//! Property-based tests for hashing, matching, and conjugation.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::prelude::*;

    use crate::conjugate::ConjugationMode;
    use crate::hasher::ShortlexHasher;
    use crate::word::{HashedWord, OperatorId};

    const RADIX: u32 = 3;

    // Strategy for words comfortably inside the hashable bound
    fn small_word() -> impl Strategy<Value = Vec<OperatorId>> {
        proptest::collection::vec(0..RADIX, 0..12)
    }

    // Shortlex comparison written out directly, as the reference
    fn shortlex_reference(a: &[OperatorId], b: &[OperatorId]) -> Ordering {
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }

    proptest! {
        #[test]
        fn hash_preserves_shortlex_order(a in small_word(), b in small_word()) {
            let hasher = ShortlexHasher::new(RADIX);
            let wa = HashedWord::new(&a, &hasher).unwrap();
            let wb = HashedWord::new(&b, &hasher).unwrap();
            prop_assert_eq!(wa.hash().cmp(&wb.hash()), shortlex_reference(&a, &b));
        }

        #[test]
        fn compare_agrees_with_reference(a in small_word(), b in small_word()) {
            let hasher = ShortlexHasher::new(RADIX);
            prop_assert_eq!(hasher.compare(&a, &b), shortlex_reference(&a, &b));
        }

        #[test]
        fn hash_is_injective_on_distinct_words(a in small_word(), b in small_word()) {
            let hasher = ShortlexHasher::new(RADIX);
            if a != b {
                prop_assert_ne!(hasher.hash(&a), hasher.hash(&b));
            }
        }

        #[test]
        fn matches_anywhere_agrees_with_naive_scan(
            pattern in proptest::collection::vec(0..RADIX, 1..5),
            range in small_word(),
        ) {
            let hasher = ShortlexHasher::new(RADIX);
            let needle = HashedWord::new(&pattern, &hasher).unwrap();
            let naive = if pattern.len() > range.len() {
                None
            } else {
                (0..=range.len() - pattern.len())
                    .find(|&at| range[at..at + pattern.len()] == pattern[..])
            };
            prop_assert_eq!(needle.matches_anywhere(&range), naive);
        }

        #[test]
        fn overlap_is_the_longest_coincidence(
            a in proptest::collection::vec(0..RADIX, 0..8),
            b in proptest::collection::vec(0..RADIX, 0..8),
        ) {
            let hasher = ShortlexHasher::new(RADIX);
            let wa = HashedWord::new(&a, &hasher).unwrap();
            let wb = HashedWord::new(&b, &hasher).unwrap();
            let k = wa.suffix_prefix_overlap(&wb);

            prop_assert!(k <= a.len().min(b.len()));
            prop_assert_eq!(&a[a.len() - k..], &b[..k]);
            // No longer coincidence may exist
            for longer in (k + 1)..=a.len().min(b.len()) {
                prop_assert_ne!(&a[a.len() - longer..], &b[..longer]);
            }
        }

        #[test]
        fn every_word_overlaps_itself_fully(a in small_word()) {
            let hasher = ShortlexHasher::new(RADIX);
            let w = HashedWord::new(&a, &hasher).unwrap();
            prop_assert_eq!(w.suffix_prefix_overlap(&w), a.len());
        }

        #[test]
        fn conjugation_is_an_involution(a in proptest::collection::vec(0..4u32, 0..10)) {
            let hasher = ShortlexHasher::new(4);
            let w = HashedWord::new(&a, &hasher).unwrap();
            for mode in [
                ConjugationMode::SelfAdjoint,
                ConjugationMode::Bunched,
                ConjugationMode::Interleaved,
            ] {
                prop_assert_eq!(w.conjugate(mode, &hasher).conjugate(mode, &hasher), w.clone());
            }
        }

        #[test]
        fn conjugation_preserves_length(a in proptest::collection::vec(0..4u32, 0..10)) {
            let hasher = ShortlexHasher::new(4);
            let w = HashedWord::new(&a, &hasher).unwrap();
            let conj = w.conjugate(ConjugationMode::Interleaved, &hasher);
            prop_assert_eq!(conj.len(), w.len());
        }
    }
}
