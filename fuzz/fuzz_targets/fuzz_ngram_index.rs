//! Fuzz target for n-gram extraction and the reverse index.
//!
//! Arbitrary UTF-8 (including multi-byte characters split by windows) is
//! indexed and queried; extraction counts and ranking order must hold.

#![no_main]

use arbitrary::Arbitrary;
use gramdex_core::{extract_ngrams, NgramIndex, NgramLength};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    ngram_length: u8,
    items: Vec<(u16, String)>,
    query: String,
}

fuzz_target!(|input: Input| {
    // Keep lengths small so windows actually overlap short inputs.
    let Ok(n) = NgramLength::new(usize::from(input.ngram_length % 8)) else {
        return;
    };

    let ngrams = extract_ngrams(&input.query, n);
    assert_eq!(ngrams.len(), (input.query.len() + 1).saturating_sub(n.get()));
    for fingerprint in &ngrams {
        assert_eq!(fingerprint.decode().map(|b| b.len()).ok(), Some(n.get()));
    }

    let mut index = NgramIndex::with_length(n);
    for (key, text) in &input.items {
        index.add(u64::from(*key), text, text.clone());
    }

    let results = index.search(&input.query);
    assert!(results.len() <= index.len());
    for pair in results.windows(2) {
        assert!(pair[0].match_count >= pair[1].match_count);
    }
    for item in &results {
        assert!(item.match_count >= 1 && item.match_count <= ngrams.len());
    }
});
