//! # Canonica
//!
//! Canonicalization of finite words over non-commuting operator alphabets.
//!
//! Given an alphabet size and a list of algebraic equations between words,
//! canonica orients the equations into shortlex-decreasing rewrite rules,
//! runs bounded Knuth-Bendix completion to resolve critical pairs, and
//! then reduces arbitrary words to a unique canonical representative.
//!
//! ## Features
//!
//! - **Order-Preserving Hashing**: one `u64` carries a word's identity and
//!   its shortlex rank
//! - **Guaranteed Termination**: every rule points strictly downhill, so
//!   reducing any finite word always halts
//! - **Honest Completion**: convergence, iteration truncation, and length
//!   truncation are reported as distinct outcomes
//! - **Dense Catalogs**: every word up to a length, shortlex-ordered, with
//!   stable contiguous indices for symbol tables
//!
//! ## Quick Start
//!
//! ```rust
//! use canonica::prelude::*;
//!
//! // ab = a and ba = b over a two-operator alphabet.
//! let mut book = RuleBook::new(2, &[(&[0, 1], &[0]), (&[1, 0], &[1])]).unwrap();
//! let outcome = book.complete(&CompletionConfig::default());
//! assert!(outcome.is_confluent());
//!
//! // Completion derived that both operators are idempotent.
//! let canonical = book.reduce_operators(&[0, 1, 1, 0]).unwrap();
//! assert_eq!(canonical.operators(), &[0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use canonica_catalog as catalog;
pub use canonica_core as core;
pub use canonica_rewrite as rewrite;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use canonica_catalog::{CatalogError, WordCatalog};
    pub use canonica_core::{
        ConjugationMode, HashedWord, OperatorId, ShortlexHasher, WordError,
    };
    pub use canonica_rewrite::{
        CanonicalCache, CompletionConfig, CompletionOutcome, CompletionStatus, RuleBook,
        SubstitutionRule,
    };
}
