//! Tests for `error` module

use super::config::ConfigError;
use super::error::*;

#[test]
fn test_error_codes_are_unique() {
    // Arrange
    let errors: Vec<Error> = vec![
        Error::InvalidNgramLength(0),
        Error::InvalidFingerprint("!!".into()),
        Error::Config("test".into()),
    ];

    // Act
    let codes: Vec<&str> = errors.iter().map(Error::code).collect();

    // Assert
    let mut unique_codes = codes.clone();
    unique_codes.sort_unstable();
    unique_codes.dedup();
    assert_eq!(codes.len(), unique_codes.len(), "Error codes must be unique");

    for code in &codes {
        assert!(
            code.starts_with("GRAMDEX-"),
            "Code {code} should start with GRAMDEX-"
        );
    }
}

#[test]
fn test_invalid_ngram_length_display() {
    // Arrange
    let err = Error::InvalidNgramLength(0);

    // Act
    let display = format!("{err}");

    // Assert
    assert!(display.contains("GRAMDEX-001"));
    assert!(display.contains("at least 1"));
}

#[test]
fn test_config_error_converts_with_context() {
    // Arrange
    let config_err = ConfigError::InvalidValue {
        key: "index.ngram_length".into(),
        message: "value 0 is out of range [1, 64]".into(),
    };

    // Act
    let err: Error = config_err.into();

    // Assert
    assert_eq!(err.code(), "GRAMDEX-003");
    assert!(err.to_string().contains("index.ngram_length"));
}

#[test]
fn test_display_carries_code_for_every_variant() {
    // Arrange
    let errors: Vec<Error> = vec![
        Error::InvalidNgramLength(0),
        Error::InvalidFingerprint("!!".into()),
        Error::Config("test".into()),
    ];

    // Act & Assert
    for err in &errors {
        let display = err.to_string();
        assert!(
            display.starts_with(&format!("[{}]", err.code())),
            "Display '{display}' should start with its code"
        );
    }
}

#[test]
fn test_invalid_fingerprint_from_deserialized_text() {
    // Arrange
    let fingerprint: crate::Fingerprint =
        serde_json::from_str("\"not base64!\"").expect("transparent string");

    // Act
    let err = fingerprint.decode().expect_err("should reject non-base64");

    // Assert
    assert_eq!(err.code(), "GRAMDEX-002");
    assert!(matches!(err, Error::InvalidFingerprint(ref text) if text == "not base64!"));
    assert!(err.to_string().contains("not base64!"));
}
