//! # canonica-rewrite
//!
//! Substitution rules, rule books, and bounded Knuth-Bendix completion.
//!
//! This crate provides:
//! - [`SubstitutionRule`]: an oriented rewrite between two hashed words
//! - [`RuleBook`]: rule ownership plus reduction to normal form
//! - [`RuleBook::complete`]: bounded critical-pair completion with an
//!   explicit [`CompletionOutcome`] distinguishing convergence from
//!   truncation
//! - [`CanonicalCache`]: a shared memo for the read-only query phase
//!
//! ## Design Principles
//!
//! - Rules only ever point downhill in shortlex order, so reduction of any
//!   finite word terminates unconditionally
//! - Completion is best-effort and says so: truncation is a status, not an
//!   error
//! - The rule book has no interior mutability; once completion finishes it
//!   can be shared across any number of reader threads

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod completion;
pub mod memo;
pub mod rule;
pub mod rulebook;


pub use completion::{CompletionConfig, CompletionOutcome, CompletionStatus};
pub use memo::CanonicalCache;
pub use rule::SubstitutionRule;
pub use rulebook::RuleBook;
