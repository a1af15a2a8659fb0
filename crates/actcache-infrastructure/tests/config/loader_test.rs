//! Configuration loader tests
//!
//! Each test runs inside a `figment::Jail`, which gives it a private working
//! directory and serializes environment changes across tests.

use actcache_infrastructure::config::{
    AppConfig, BackendKind, CacheFailurePolicy, CacherConfig, ConfigLoader,
};
use figment::Jail;
use std::path::PathBuf;

fn load(loader: &ConfigLoader) -> figment::error::Result<AppConfig> {
    loader.load().map_err(|e| e.to_string().into())
}

#[test]
fn test_defaults_without_file_or_env() {
    Jail::expect_with(|_jail| {
        let config = load(&ConfigLoader::new())?;

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.cacher.backend, BackendKind::Memory);
        assert_eq!(config.cacher.ttl, None);
        assert_eq!(config.cacher.max_params_length, None);
        assert_eq!(config.cacher.prefix, None);
        assert_eq!(config.logging.level, "info");
        Ok(())
    });
}

#[test]
fn test_default_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "actcache.toml",
            r#"
            [broker]
            namespace = "staging"

            [cacher]
            ttl = 30
            max_params_length = 60
            failure_policy = "propagate"
            "#,
        )?;

        let config = load(&ConfigLoader::new())?;

        assert_eq!(config.broker.namespace.as_deref(), Some("staging"));
        assert_eq!(config.cacher.ttl, Some(30));
        assert_eq!(config.cacher.max_params_length, Some(60));
        assert_eq!(config.cacher.failure_policy, CacheFailurePolicy::Propagate);
        assert_eq!(config.cacher.max_entries, CacherConfig::default().max_entries);
        Ok(())
    });
}

#[test]
fn test_default_file_in_config_directory() {
    Jail::expect_with(|jail| {
        std::fs::create_dir("config").map_err(|e| e.to_string())?;
        jail.create_file("config/actcache.toml", "[cacher]\nprefix = \"app\"\n")?;

        let config = load(&ConfigLoader::new())?;

        assert_eq!(config.cacher.prefix.as_deref(), Some("app"));
        Ok(())
    });
}

#[test]
fn test_explicit_path_overrides_discovery() {
    Jail::expect_with(|jail| {
        jail.create_file("actcache.toml", "[cacher]\nttl = 1\n")?;
        jail.create_file("custom.toml", "[cacher]\nttl = 99\n")?;

        let loader = ConfigLoader::new().with_config_path("custom.toml");
        let config = load(&loader)?;

        assert_eq!(config.cacher.ttl, Some(99));
        assert_eq!(loader.config_path(), Some(PathBuf::from("custom.toml").as_path()));
        Ok(())
    });
}

#[test]
fn test_missing_explicit_path_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config = load(&ConfigLoader::new().with_config_path("nope.toml"))?;
        assert_eq!(config, AppConfig::default());
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("actcache.toml", "[cacher]\nttl = 30\n")?;
        jail.set_env("ACTCACHE_CACHER__TTL", "45");
        jail.set_env("ACTCACHE_CACHER__MAX_PARAMS_LENGTH", "80");
        jail.set_env("ACTCACHE_CACHER__BACKEND", "redis");
        jail.set_env("ACTCACHE_CACHER__REDIS_URL", "redis://cache:6379");
        jail.set_env("ACTCACHE_LOGGING__LEVEL", "debug");

        let config = load(&ConfigLoader::new())?;

        assert_eq!(config.cacher.ttl, Some(45));
        assert_eq!(config.cacher.max_params_length, Some(80));
        assert_eq!(config.cacher.backend, BackendKind::Redis);
        assert_eq!(config.cacher.redis_url.as_deref(), Some("redis://cache:6379"));
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("MYAPP_CACHER__PREFIX", "svc");
        jail.set_env("ACTCACHE_CACHER__PREFIX", "ignored");

        let config = load(&ConfigLoader::new().with_env_prefix("MYAPP"))?;

        assert_eq!(config.cacher.prefix.as_deref(), Some("svc"));
        Ok(())
    });
}

#[test]
fn test_save_then_load_round_trip() {
    Jail::expect_with(|jail| {
        let mut config = AppConfig::default();
        config.cacher.ttl = Some(15);
        config.cacher.prefix = Some("app".to_string());
        config.cacher.backend = BackendKind::Null;
        config.broker.node_id = Some("node-7".to_string());

        let path = jail.directory().join("saved.toml");
        let loader = ConfigLoader::new();
        loader.save_to_file(&config, &path).map_err(|e| e.to_string())?;

        let loaded = load(&ConfigLoader::new().with_config_path(&path))?;
        assert_eq!(loaded, config);
        Ok(())
    });
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("actcache.toml");

    let result = ConfigLoader::new().save_to_file(&AppConfig::default(), &path);

    assert!(result.is_err());
}
