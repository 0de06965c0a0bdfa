//! Fingerprint and n-gram length types.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

use crate::error::{Error, Result};

/// Default fingerprint length: trigrams.
pub const DEFAULT_NGRAM_LENGTH: usize = 3;

/// Base64 encoding of one n-gram window.
///
/// Padded standard-alphabet base64 is injective over byte slices, so two
/// fingerprints compare equal iff their source windows are byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Encodes a raw byte window.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(STANDARD.encode(bytes))
    }

    /// Returns the textual map key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recovers the original window bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFingerprint`] if the fingerprint was not
    /// produced by [`Fingerprint::from_bytes`] (e.g. deserialized garbage).
    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(&self.0)
            .map_err(|_| Error::InvalidFingerprint(self.0.clone()))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fingerprint length in bytes, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct NgramLength(NonZeroUsize);

impl NgramLength {
    /// Trigram length, the default.
    pub const TRIGRAM: Self = match NonZeroUsize::new(DEFAULT_NGRAM_LENGTH) {
        Some(n) => Self(n),
        None => panic!("default n-gram length is non-zero"),
    };

    /// Validates a raw length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNgramLength`] if `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        NonZeroUsize::new(n)
            .map(Self)
            .ok_or(Error::InvalidNgramLength(n))
    }

    /// Returns the length in bytes.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for NgramLength {
    fn default() -> Self {
        Self::TRIGRAM
    }
}

impl TryFrom<usize> for NgramLength {
    type Error = Error;

    fn try_from(n: usize) -> Result<Self> {
        Self::new(n)
    }
}

impl From<NgramLength> for usize {
    fn from(n: NgramLength) -> Self {
        n.get()
    }
}

impl fmt::Display for NgramLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
