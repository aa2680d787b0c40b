//! Dense shortlex enumeration of words.

use canonica_core::{HashedWord, ShortlexHasher, WordBuf, WordError};
use canonica_rewrite::RuleBook;
use hashbrown::HashMap;

use crate::error::CatalogError;

/// All words over one alphabet up to a generated length, in shortlex order.
///
/// Indices are dense and stable: index 0 is the zero word, index 1 the
/// identity, and every generated word follows in shortlex order. Growing
/// the catalog appends whole length levels, so an index issued once stays
/// valid for the life of the catalog.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    hasher: ShortlexHasher,
    words: Vec<HashedWord>,
    by_hash: HashMap<u64, usize>,
    longest: usize,
    /// Index of the first word of length `longest`; the tail
    /// `words[level_start..]` is the parent level for the next generation.
    level_start: usize,
}

impl WordCatalog {
    /// Creates a catalog seeded with the zero word and the identity.
    pub fn new(radix: u32) -> Result<Self, CatalogError> {
        if radix == 0 {
            return Err(WordError::InvalidRadix { radix }.into());
        }
        let hasher = ShortlexHasher::new(radix);
        let zero = HashedWord::zero();
        let identity = HashedWord::identity(&hasher);
        let mut by_hash = HashMap::new();
        by_hash.insert(zero.hash(), 0);
        by_hash.insert(identity.hash(), 1);
        Ok(Self {
            hasher,
            words: vec![zero, identity],
            by_hash,
            longest: 0,
            level_start: 1,
        })
    }

    /// Generates every word of every length up to `length`.
    ///
    /// Lengths already generated are skipped, so calling with a smaller or
    /// equal length is a no-op. Returns the new total word count. Fails if
    /// `length` exceeds the hashable bound; the catalog is left at its
    /// previous extent.
    pub fn generate(&mut self, length: usize) -> Result<usize, CatalogError> {
        if length > self.hasher.longest_hashable_word() {
            return Err(WordError::LengthExceeded {
                len: length,
                max: self.hasher.longest_hashable_word(),
            }
            .into());
        }
        while self.longest < length {
            let parents = self.level_start..self.words.len();
            self.level_start = self.words.len();
            for parent_index in parents {
                // Extending each parent by every operator, parents in
                // shortlex order, yields the next level in shortlex order.
                let parent = self.words[parent_index].clone();
                for op in 0..self.hasher.radix() {
                    let mut ops = WordBuf::with_capacity(parent.len() + 1);
                    ops.extend_from_slice(parent.operators());
                    ops.push(op);
                    let word = HashedWord::from_validated(ops, &self.hasher);
                    self.by_hash.insert(word.hash(), self.words.len());
                    self.words.push(word);
                }
            }
            self.longest += 1;
        }
        Ok(self.words.len())
    }

    /// Returns the word at a catalog index.
    pub fn sequence(&self, index: usize) -> Result<&HashedWord, CatalogError> {
        self.words.get(index).ok_or(CatalogError::IndexOutOfRange {
            index,
            len: self.words.len(),
        })
    }

    /// Returns the index of the word with the given shortlex hash.
    pub fn index_of_hash(&self, hash: u64) -> Result<usize, CatalogError> {
        self.by_hash
            .get(&hash)
            .copied()
            .ok_or(CatalogError::HashNotCataloged { hash })
    }

    /// Returns the index of a cataloged word.
    pub fn index_of(&self, word: &HashedWord) -> Result<usize, CatalogError> {
        self.index_of_hash(word.hash())
    }

    /// Maps every catalog index to the index of its canonical form.
    ///
    /// The book must share the catalog's alphabet. Reduction never
    /// increases shortlex rank and the catalog holds complete length
    /// levels, so every normal form of a cataloged word is itself
    /// cataloged; a missing normal form therefore means the book belongs
    /// to a different alphabet and is reported as an error.
    pub fn canonical_map(&self, book: &RuleBook) -> Result<Vec<usize>, CatalogError> {
        debug_assert_eq!(book.hasher(), &self.hasher, "book and catalog alphabets differ");
        self.words
            .iter()
            .map(|word| self.index_of_hash(book.reduce(word).hash()))
            .collect()
    }

    /// Returns the number of cataloged words, zero and identity included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; the zero word and the identity are seeded at birth.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the longest generated word length.
    #[must_use]
    pub fn longest_sequence(&self) -> usize {
        self.longest
    }

    /// Returns the alphabet size.
    #[must_use]
    pub fn radix(&self) -> u32 {
        self.hasher.radix()
    }

    /// Returns the hasher shared by every cataloged word.
    #[must_use]
    pub fn hasher(&self) -> &ShortlexHasher {
        &self.hasher
    }

    /// Returns every cataloged word in index order.
    #[must_use]
    pub fn words(&self) -> &[HashedWord] {
        &self.words
    }
}
