//! # canonica-core
//!
//! Shortlex ordering, order-preserving hashing, and hashed operator words:
//! the foundations of the canonica rewriting engine.
//!
//! This crate provides:
//! - [`ShortlexHasher`]: an injective, order-preserving map from words to `u64`
//! - [`HashedWord`]: a word with its hash attached, plus the substring
//!   operations rewriting is built from
//! - [`ConjugationMode`]: adjoint layouts for operator alphabets
//!
//! ## Design Principles
//!
//! - Comparing hashes is comparing words: one `u64` carries identity and
//!   shortlex rank
//! - Validation happens once, at construction; everything downstream is
//!   infallible
//! - No interior mutability; values are cheap to clone and safe to share
//!   across threads

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod conjugate;
pub mod error;
pub mod hasher;
pub mod word;

#[cfg(test)]
mod proptests;

pub use conjugate::ConjugationMode;
pub use error::WordError;
pub use hasher::{ShortlexHasher, ZERO_WORD_HASH};
pub use word::{HashedWord, OperatorId, WordBuf};
