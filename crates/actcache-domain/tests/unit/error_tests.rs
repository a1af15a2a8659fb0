//! Unit tests for domain error types

use actcache_domain::Error;

#[test]
fn test_cache_error_is_flagged_as_cache_failure() {
    let error = Error::cache("redis unreachable");
    assert!(error.is_cache_failure());
    assert!(format!("{error}").contains("redis unreachable"));
}

#[test]
fn test_handler_error_is_not_a_cache_failure() {
    let error = Error::handler("post not found");
    assert!(!error.is_cache_failure());
    match error {
        Error::Handler { message, source } => {
            assert_eq!(message, "post not found");
            assert!(source.is_none());
        }
        _ => panic!("Expected Handler error"),
    }
}

#[test]
fn test_cache_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
    let error = Error::cache_with_source("GET failed", io);
    let source = std::error::Error::source(&error).expect("source should be kept");
    assert!(source.to_string().contains("timed out"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_err.into();
    assert!(matches!(error, Error::Json { .. }));
}

#[test]
fn test_key_generation_error() {
    let error = Error::key_generation("tenant missing");
    match error {
        Error::KeyGeneration { message } => assert_eq!(message, "tenant missing"),
        _ => panic!("Expected KeyGeneration error"),
    }
}
