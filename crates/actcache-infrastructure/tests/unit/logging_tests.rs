//! Logging tests

use actcache_infrastructure::config::LoggingConfig;
use actcache_infrastructure::logging::{default_filter, init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level_accepts_known_levels() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_log_level_rejects_unknown() {
    let err = parse_log_level("verbose").unwrap_err();
    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(config).is_err());
}

#[test]
fn test_logging_config_defaults() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
    assert!(config.cacher_level.is_none());
}

#[test]
fn test_default_filter_uses_configured_level() {
    let filter = default_filter(&LoggingConfig::default()).unwrap();
    let rendered = filter.to_string();

    assert!(rendered.contains("info"));
    assert!(!rendered.contains("actcache::cacher"));
}

#[test]
fn test_default_filter_adds_cacher_directive() {
    let config = LoggingConfig {
        level: "warning".to_string(),
        cacher_level: Some("DEBUG".to_string()),
        ..LoggingConfig::default()
    };
    let rendered = default_filter(&config).unwrap().to_string();

    assert!(rendered.contains("actcache::cacher=debug"));
    assert!(rendered.contains("warn"));
}

#[test]
fn test_default_filter_rejects_invalid_cacher_level() {
    let config = LoggingConfig {
        cacher_level: Some("loud".to_string()),
        ..LoggingConfig::default()
    };
    let err = default_filter(&config).unwrap_err();
    assert!(err.to_string().contains("Invalid log level"));
}
