//! Error extension tests

use actcache_domain::error::Error;
use actcache_infrastructure::error_ext::ErrorContext;
use std::io;

fn io_failure() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file missing"))
}

#[test]
fn test_context_produces_infrastructure_error() {
    let err = io_failure().context("Reading state").unwrap_err();

    assert!(matches!(err, Error::Infrastructure { .. }));
    assert!(err.to_string().contains("Reading state: file missing"));
}

#[test]
fn test_with_context_is_lazy() {
    let mut evaluated = false;
    let ok: Result<u8, io::Error> = Ok(1);

    let value = ok
        .with_context(|| {
            evaluated = true;
            "never used"
        })
        .unwrap();

    assert_eq!(value, 1);
    assert!(!evaluated);
}

#[test]
fn test_config_context_produces_configuration_error() {
    let err = io_failure().config_context("Loading actcache.toml").unwrap_err();

    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));
    assert!(err.to_string().contains("Loading actcache.toml"));
}

#[test]
fn test_cache_context_produces_cache_failure() {
    let err = io_failure().cache_context("Reading entry").unwrap_err();

    assert!(err.is_cache_failure());
}

#[test]
fn test_source_is_preserved() {
    let err = io_failure().context("Reading state").unwrap_err();
    let source = std::error::Error::source(&err).unwrap();

    assert_eq!(source.to_string(), "file missing");
}
