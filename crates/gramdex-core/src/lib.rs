//! # `gramdex` Core
//!
//! In-memory n-gram reverse index for fuzzy substring search.
//!
//! Items are registered under an integer key together with a text and an
//! arbitrary payload. A query is cut into the same fixed-length byte windows
//! as the indexed texts, and items are ranked by how many query windows they
//! share. There is no tokenization, normalization or persistence: matching is
//! over raw bytes, whitespace and punctuation included.
//!
//! ## Quick Start
//!
//! ```rust
//! use gramdex_core::NgramIndex;
//!
//! let mut index = NgramIndex::new();
//! index.add(0, "My first index item", "first");
//! index.add(1, "Second item", "second");
//! index.add(2, "Thired item too", "third");
//!
//! let results = index.search("count first and second item");
//! assert_eq!(results[0].key, 1);
//! assert_eq!(results[0].match_count, 9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_const_for_fn)]

pub mod config;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod index;

pub use config::{ConfigError, GramdexConfig, IndexConfig, LoggingConfig, SearchConfig};
pub use error::{Error, Result};
pub use index::ngram::{
    extract_ngram_bytes, extract_ngrams, Fingerprint, Item, Matches, NgramIndex, NgramLength,
    NgramStats, DEFAULT_NGRAM_LENGTH,
};
