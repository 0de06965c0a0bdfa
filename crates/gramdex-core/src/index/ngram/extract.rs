//! N-gram extraction.
//!
//! Windows are taken over UTF-8 bytes, not chars: a window may split a
//! multi-byte character, which the base64 fingerprint keeps lossless.

use std::slice::Windows;

use super::fingerprint::{Fingerprint, NgramLength};

/// Yields every `n`-byte window of `text`, left to right, advancing by one.
///
/// Text shorter than `n` yields nothing.
#[must_use]
pub fn extract_ngram_bytes(text: &str, n: NgramLength) -> Windows<'_, u8> {
    text.as_bytes().windows(n.get())
}

/// Extracts the ordered fingerprints of `text`.
///
/// Returns exactly `len - n + 1` fingerprints when `text.len() >= n`, and an
/// empty vector otherwise. Duplicated windows are kept: the sequence is
/// positional.
///
/// # Example
///
/// ```
/// use gramdex_core::index::ngram::{extract_ngrams, NgramLength};
///
/// let n = NgramLength::new(4).unwrap();
/// let ngrams = extract_ngrams("four chars", n);
/// assert_eq!(ngrams.len(), 7);
/// assert_eq!(ngrams[0].as_str(), "Zm91cg=="); // "four"
/// assert_eq!(ngrams[1].decode().unwrap(), b"our ");
/// ```
#[must_use]
pub fn extract_ngrams(text: &str, n: NgramLength) -> Vec<Fingerprint> {
    extract_ngram_bytes(text, n)
        .map(Fingerprint::from_bytes)
        .collect()
}
