//! Configuration validation tests

use actcache_domain::error::Error;
use actcache_infrastructure::config::loader::{validate_app_config, validate_cacher_config};
use actcache_infrastructure::config::{AppConfig, BackendKind, CacherConfig, ConfigLoader};
use figment::Jail;

#[test]
fn test_default_config_is_valid() {
    assert!(validate_app_config(&AppConfig::default()).is_ok());
}

#[test]
fn test_invalid_cacher_log_level_rejected() {
    let mut config = AppConfig::default();
    config.logging.cacher_level = Some("loud".to_string());
    let err = validate_app_config(&config).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_zero_max_params_length_rejected() {
    let config = CacherConfig {
        max_params_length: Some(0),
        ..CacherConfig::default()
    };
    let err = validate_cacher_config(&config).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_short_max_params_length_accepted() {
    let config = CacherConfig {
        max_params_length: Some(10),
        ..CacherConfig::default()
    };
    assert!(validate_cacher_config(&config).is_ok());
}

#[test]
fn test_zero_max_entries_rejected_for_memory() {
    let config = CacherConfig {
        max_entries: 0,
        ..CacherConfig::default()
    };
    assert!(validate_cacher_config(&config).is_err());

    let null = CacherConfig {
        backend: BackendKind::Null,
        ..config
    };
    assert!(validate_cacher_config(&null).is_ok());
}

#[test]
fn test_redis_backend_requires_url() {
    let mut config = CacherConfig {
        backend: BackendKind::Redis,
        ..CacherConfig::default()
    };
    assert!(validate_cacher_config(&config).is_err());

    config.redis_url = Some(String::new());
    assert!(validate_cacher_config(&config).is_err());

    config.redis_url = Some("redis://localhost:6379".to_string());
    assert!(validate_cacher_config(&config).is_ok());
}

#[test]
fn test_invalid_log_level_rejected() {
    let mut config = AppConfig::default();
    config.logging.level = "loud".to_string();
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_loader_rejects_invalid_file() {
    Jail::expect_with(|jail| {
        jail.create_file("actcache.toml", "[cacher]\nbackend = \"redis\"\n")?;

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(err.to_string().contains("redis_url"));
        Ok(())
    });
}

#[test]
fn test_loader_rejects_unknown_backend() {
    Jail::expect_with(|jail| {
        jail.create_file("actcache.toml", "[cacher]\nbackend = \"memcached\"\n")?;

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        Ok(())
    });
}
