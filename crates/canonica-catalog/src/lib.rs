//! # canonica-catalog
//!
//! Dense shortlex word catalogs: every word over a fixed alphabet up to a
//! chosen length, in shortlex order, with a contiguous index per word and
//! reverse lookup from shortlex hash to index.
//!
//! Symbol-table layers need a dense identifier for every dictionary word;
//! the catalog issues those identifiers and, via
//! [`WordCatalog::canonical_map`], collapses them onto the identifiers of
//! their canonical forms under a completed rule book.
//!
//! ## Design Principles
//!
//! - Indices are stable: growing the catalog never renumbers what was
//!   already issued
//! - Index 0 is the zero word and index 1 the identity, so annihilated and
//!   trivial words always have somewhere to land
//! - Growth is `O(radix^length)`; bounding the length is the caller's job

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod error;

pub use catalog::WordCatalog;
pub use error::CatalogError;
