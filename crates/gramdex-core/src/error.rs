//! Error types for `gramdex`.
//!
//! The index itself performs no I/O, so there is no I/O variant: every error
//! is a caller or input error rejected before any state changes.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for `gramdex` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in `gramdex` operations.
///
/// Error codes follow the pattern `GRAMDEX-XXX` for easy debugging.
#[derive(Error, Debug)]
pub enum Error {
    /// N-gram length must be at least one byte (GRAMDEX-001).
    #[error("[GRAMDEX-001] Invalid n-gram length {0}: must be at least 1")]
    InvalidNgramLength(usize),

    /// Fingerprint text is not valid base64 (GRAMDEX-002).
    ///
    /// Only reachable for fingerprints deserialized from outside the index.
    #[error("[GRAMDEX-002] Invalid fingerprint '{0}': not valid base64")]
    InvalidFingerprint(String),

    /// Configuration error (GRAMDEX-003).
    #[error("[GRAMDEX-003] Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the error code (e.g., "GRAMDEX-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidNgramLength(_) => "GRAMDEX-001",
            Self::InvalidFingerprint(_) => "GRAMDEX-002",
            Self::Config(_) => "GRAMDEX-003",
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
