//! N-gram reverse index for fuzzy substring search.
//!
//! Text is cut into overlapping fixed-length byte windows ("n-grams"). Each
//! window is base64-encoded into a [`Fingerprint`] so arbitrary bytes,
//! including split multi-byte characters, make safe map keys.
//!
//! # Architecture
//!
//! - Extract fingerprints from text, one per byte offset (no padding)
//! - Store reverse index: fingerprint → `RoaringTreemap` of item keys
//! - Query: count, per item, how many query positions hit its fingerprints
//! - Ranking: match count descending, ties by ascending key
//!
//! ```
//! use gramdex_core::index::ngram::NgramIndex;
//!
//! let mut index = NgramIndex::new();
//! index.add(0, "My first index item", "first");
//! index.add(1, "Second item", "second");
//!
//! let results = index.search("first item");
//! assert_eq!(results[0].key, 0);
//! assert_eq!(results[0].payload, "first");
//! ```

mod extract;
mod fingerprint;
mod index;

pub use extract::{extract_ngram_bytes, extract_ngrams};
pub use fingerprint::{Fingerprint, NgramLength, DEFAULT_NGRAM_LENGTH};
pub use index::{Item, Matches, NgramIndex, NgramStats};
