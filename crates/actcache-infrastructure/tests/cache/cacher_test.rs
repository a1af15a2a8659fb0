//! Cacher lifecycle tests

use crate::test_utils::RecordingBackend;
use actcache_domain::error::Error;
use actcache_domain::ports::{Broker, CacheBackend};
use actcache_infrastructure::cache::Cacher;
use actcache_infrastructure::config::{BrokerConfig, CacherConfig};
use actcache_infrastructure::infrastructure::LocalBroker;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

fn broker(namespace: Option<&str>) -> Arc<dyn Broker> {
    Arc::new(LocalBroker::new(&BrokerConfig {
        namespace: namespace.map(str::to_string),
        node_id: Some("node-1".to_string()),
    }))
}

#[test]
fn test_prefix_before_init_uses_default() {
    let cacher = Cacher::new(CacherConfig::default(), RecordingBackend::new());
    assert_eq!(cacher.prefix(), "MOL-");
    assert!(cacher.node_id().is_none());
}

#[test]
fn test_init_folds_namespace_into_prefix() {
    let cacher = Cacher::new(CacherConfig::default(), RecordingBackend::new());
    cacher.init(&broker(Some("staging")));

    assert_eq!(cacher.prefix(), "MOL-staging-");
    assert_eq!(cacher.node_id().as_deref(), Some("node-1"));
}

#[test]
fn test_init_with_custom_prefix_ignores_namespace() {
    let config = CacherConfig {
        prefix: Some("app".to_string()),
        ..CacherConfig::default()
    };
    let cacher = Cacher::new(config, RecordingBackend::new());
    cacher.init(&broker(Some("staging")));

    assert_eq!(cacher.prefix(), "app-");
}

#[test]
fn test_init_is_idempotent() {
    let cacher = Cacher::new(CacherConfig::default(), RecordingBackend::new());
    let broker = broker(Some("ns"));

    cacher.init(&broker);
    let first = cacher.prefix();
    cacher.init(&broker);

    assert_eq!(cacher.prefix(), first);
}

#[test]
fn test_derive_key_uses_configured_max_length() {
    let config = CacherConfig {
        max_params_length: Some(60),
        ..CacherConfig::default()
    };
    let cacher = Cacher::new(config, RecordingBackend::new());
    let params = json!({ "text": "x".repeat(200) });

    let key = cacher
        .derive_key(Some("docs.search"), Some(&params), None, None)
        .unwrap()
        .unwrap();

    let value_part = key.strip_prefix("docs.search:").unwrap();
    assert_eq!(value_part.chars().count(), 60);
    assert_eq!(cacher.deriver().max_params_length(), Some(60));
}

#[test]
fn test_zero_max_length_keeps_keys_unhashed() {
    let config = CacherConfig {
        max_params_length: Some(0),
        ..CacherConfig::default()
    };
    let cacher = Cacher::new(config, RecordingBackend::new());
    let params = json!({ "id": 5, "name": "Bob" });

    let key = cacher
        .derive_key(Some("posts.find"), Some(&params), None, None)
        .unwrap();

    assert_eq!(key.as_deref(), Some("posts.find:id|5|name|Bob"));
    assert_eq!(cacher.deriver().max_params_length(), None);
}

#[test]
fn test_custom_keygen_replaces_default_algorithm() {
    let cacher = Cacher::new(CacherConfig::default(), RecordingBackend::new()).with_keygen(
        Arc::new(|name: &str, params: Option<&Value>, _meta: Option<&Value>, _keys: Option<&[String]>| {
            Ok(format!("{name}/{}", params.map_or(0, |p| p["id"].as_i64().unwrap_or(0))))
        }),
    );

    let key = cacher
        .derive_key(Some("posts.get"), Some(&json!({ "id": 7 })), None, None)
        .unwrap();
    assert_eq!(key.as_deref(), Some("posts.get/7"));
    assert!(cacher.deriver().has_custom_keygen());
}

#[test]
fn test_custom_keygen_error_is_returned_unchanged() {
    let cacher = Cacher::new(CacherConfig::default(), RecordingBackend::new())
        .with_keygen(Arc::new(|_, _, _, _| Err(Error::key_generation("no key for you"))));

    let err = cacher
        .derive_key(Some("posts.get"), None, None, None)
        .unwrap_err();
    assert!(matches!(err, Error::KeyGeneration { ref message } if message == "no key for you"));
}

#[tokio::test]
async fn test_backend_operations_are_prefixed() {
    let backend = RecordingBackend::new();
    let cacher = Cacher::new(CacherConfig::default(), backend.clone());
    cacher.init(&broker(Some("ns")));

    cacher.set("posts.get:1", json!({ "id": 1 }), None).await.unwrap();
    let value = cacher.get("posts.get:1").await.unwrap();
    cacher.del(&["posts.get:1".to_string()]).await.unwrap();
    cacher.clean("posts.*").await.unwrap();

    assert_eq!(value, Some(json!({ "id": 1 })));
    assert_eq!(backend.gets(), vec!["MOL-ns-posts.get:1".to_string()]);
    assert_eq!(backend.sets()[0].0, "MOL-ns-posts.get:1");
    assert_eq!(backend.dels(), vec![vec!["MOL-ns-posts.get:1".to_string()]]);
    assert_eq!(backend.cleans(), vec!["MOL-ns-posts.*".to_string()]);
}

#[tokio::test]
async fn test_default_ttl_fills_missing_ttl_only() {
    let backend = RecordingBackend::new();
    let config = CacherConfig {
        ttl: Some(60),
        ..CacherConfig::default()
    };
    let cacher = Cacher::new(config, backend.clone());

    cacher.set("a", json!(1), None).await.unwrap();
    cacher.set("b", json!(2), Some(Duration::from_secs(5))).await.unwrap();

    let sets = backend.sets();
    assert_eq!(sets[0].2, Some(Duration::from_secs(60)));
    assert_eq!(sets[1].2, Some(Duration::from_secs(5)));
}

#[tokio::test]
async fn test_no_default_ttl_passes_none() {
    let backend = RecordingBackend::new();
    let cacher = Cacher::new(CacherConfig::default(), backend.clone());

    cacher.set("a", json!(1), None).await.unwrap();

    assert_eq!(backend.sets()[0].2, None);
}

#[tokio::test]
async fn test_close_and_provider_name_delegate() {
    let backend = RecordingBackend::new();
    let cacher = Cacher::new(CacherConfig::default(), backend.clone());

    assert_eq!(cacher.provider_name(), "recording");
    cacher.close().await.unwrap();
    assert!(backend.is_closed());
}
