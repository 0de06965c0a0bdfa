//! N-gram reverse index implementation using Roaring Treemaps.

use roaring::RoaringTreemap;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;

use super::extract::{extract_ngram_bytes, extract_ngrams};
use super::fingerprint::{Fingerprint, NgramLength};
use crate::config::IndexConfig;
use crate::error::Result;

/// Per-query match results keyed by item key.
pub type Matches<P> = FxHashMap<u64, Item<P>>;

/// An indexed record.
///
/// `match_count` is zero on stored items and only meaningful on records
/// returned by [`NgramIndex::get_matches`] or [`NgramIndex::search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item<P> {
    /// Caller-assigned unique key.
    pub key: u64,
    /// Caller-defined payload, carried through unchanged.
    pub payload: P,
    /// Number of query n-gram positions that hit this item.
    pub match_count: usize,
}

impl<P> Item<P> {
    /// Creates an item with a zero match count.
    #[must_use]
    pub fn new(key: u64, payload: P) -> Self {
        Self {
            key,
            payload,
            match_count: 0,
        }
    }
}

/// Statistics for the n-gram index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NgramStats {
    /// Number of stored items.
    pub item_count: usize,
    /// Number of distinct fingerprints.
    pub ngram_count: usize,
    /// Total (fingerprint, key) memberships.
    pub posting_count: u64,
    /// Fingerprint length in bytes.
    pub ngram_length: usize,
}

/// N-gram reverse index ranking items by shared fingerprint count.
///
/// Mutation takes `&mut self`; lookups take `&self` and may run from several
/// threads at once. Callers needing concurrent mutation must wrap the index
/// in their own lock.
#[derive(Debug)]
pub struct NgramIndex<P> {
    ngram_length: NgramLength,

    /// Reverse index: fingerprint → keys whose text contains it.
    postings: FxHashMap<Fingerprint, RoaringTreemap>,

    /// Primary store: key → item.
    items: FxHashMap<u64, Item<P>>,

    /// Fingerprints recorded per key, for retraction on re-insertion.
    item_ngrams: FxHashMap<u64, FxHashSet<Fingerprint>>,
}

impl<P> Default for NgramIndex<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> NgramIndex<P> {
    /// Creates an empty trigram index.
    #[must_use]
    pub fn new() -> Self {
        Self::with_length(NgramLength::TRIGRAM)
    }

    /// Creates an empty index with the given fingerprint length.
    #[must_use]
    pub fn with_length(ngram_length: NgramLength) -> Self {
        tracing::debug!(ngram_length = ngram_length.get(), "creating n-gram index");
        Self {
            ngram_length,
            postings: FxHashMap::default(),
            items: FxHashMap::default(),
            item_ngrams: FxHashMap::default(),
        }
    }

    /// Creates an empty index from a raw fingerprint length.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidNgramLength`] if `n` is zero.
    pub fn with_ngram_length(n: usize) -> Result<Self> {
        NgramLength::new(n).map(Self::with_length)
    }

    /// Creates an empty index from the `[index]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidNgramLength`] if the configured length is zero.
    pub fn from_config(config: &IndexConfig) -> Result<Self> {
        Self::with_ngram_length(config.ngram_length)
    }

    /// Fingerprint length this index was built with.
    #[must_use]
    pub fn ngram_length(&self) -> NgramLength {
        self.ngram_length
    }

    /// Number of stored items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the stored item for `key`.
    #[must_use]
    pub fn get(&self, key: u64) -> Option<&Item<P>> {
        self.items.get(&key)
    }

    /// Check if `key` has been added.
    #[must_use]
    pub fn contains_key(&self, key: u64) -> bool {
        self.items.contains_key(&key)
    }

    /// Adds an item, indexing every n-gram of `text` against `key`.
    ///
    /// Re-adding an existing key replaces its payload and retracts the
    /// fingerprints of the previous text before indexing the new one.
    /// Text shorter than the n-gram length is stored but never matches.
    pub fn add(&mut self, key: u64, text: &str, payload: P) {
        self.retract(key);

        let ngrams: FxHashSet<Fingerprint> = extract_ngrams(text, self.ngram_length)
            .into_iter()
            .collect();

        for fingerprint in &ngrams {
            self.postings
                .entry(fingerprint.clone())
                .or_default()
                .insert(key);
        }

        tracing::trace!(key, distinct_ngrams = ngrams.len(), "indexed item");

        self.item_ngrams.insert(key, ngrams);
        self.items.insert(key, Item::new(key, payload));
    }

    fn retract(&mut self, key: u64) {
        let Some(ngrams) = self.item_ngrams.remove(&key) else {
            return;
        };

        tracing::debug!(key, stale_ngrams = ngrams.len(), "retracting re-added key");

        for fingerprint in ngrams {
            if let Some(keys) = self.postings.get_mut(&fingerprint) {
                keys.remove(key);
                if keys.is_empty() {
                    self.postings.remove(&fingerprint);
                }
            }
        }
    }

    /// Ranks matches by `match_count` descending, ties by ascending key.
    #[must_use]
    pub fn sort_matches(matches: Matches<P>) -> Vec<Item<P>> {
        let mut sorted: Vec<Item<P>> = matches.into_values().collect();
        sorted.sort_unstable_by(|a, b| {
            b.match_count
                .cmp(&a.match_count)
                .then_with(|| a.key.cmp(&b.key))
        });
        sorted
    }

    /// Get index statistics.
    #[must_use]
    pub fn stats(&self) -> NgramStats {
        NgramStats {
            item_count: self.items.len(),
            ngram_count: self.postings.len(),
            posting_count: self.postings.values().map(RoaringTreemap::len).sum(),
            ngram_length: self.ngram_length.get(),
        }
    }
}

impl<P: Clone> NgramIndex<P> {
    /// Counts, per item, how many n-gram positions of `query` hit it.
    ///
    /// A window repeated in the query counts once per occurrence. Every
    /// returned item is a fresh copy with its own `match_count`.
    #[must_use]
    pub fn get_matches(&self, query: &str) -> Matches<P> {
        let mut matches: Matches<P> = FxHashMap::default();

        for window in extract_ngram_bytes(query, self.ngram_length) {
            let Some(keys) = self.postings.get(&Fingerprint::from_bytes(window)) else {
                continue;
            };

            for key in keys {
                let item = match matches.entry(key) {
                    Entry::Occupied(entry) => entry.into_mut(),
                    Entry::Vacant(entry) => {
                        let Some(stored) = self.items.get(&key) else {
                            continue;
                        };
                        entry.insert(Item::new(key, stored.payload.clone()))
                    }
                };
                item.match_count += 1;
            }
        }

        tracing::trace!(query_len = query.len(), matched = matches.len(), "counted matches");

        matches
    }

    /// Returns all matching items, best match first.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Item<P>> {
        Self::sort_matches(self.get_matches(query))
    }

    /// Returns at most `limit` matching items, best match first.
    #[must_use]
    pub fn search_top(&self, query: &str, limit: usize) -> Vec<Item<P>> {
        let mut results = self.search(query);
        results.truncate(limit);
        results
    }
}
