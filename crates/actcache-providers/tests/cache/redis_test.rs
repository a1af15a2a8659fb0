//! Redis Cache Backend Tests
//!
//! Require a running Redis server; ignored by default.

use actcache_providers::CacheBackend;
use actcache_providers::cache::RedisCacheBackend;
use actcache_providers::constants::REDIS_DEFAULT_URL;
use serde_json::json;
use std::time::Duration;

fn backend() -> RedisCacheBackend {
    RedisCacheBackend::new(REDIS_DEFAULT_URL).unwrap()
}

#[test]
fn test_redis_backend_rejects_invalid_url() {
    assert!(RedisCacheBackend::new("not a url").is_err());
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_redis_backend_roundtrip() {
    let backend = backend();
    let value = json!({ "id": 1, "tags": ["a", "b"] });

    backend
        .set("actcache-test:roundtrip", value.clone(), Some(Duration::from_secs(30)))
        .await
        .unwrap();
    assert_eq!(backend.get("actcache-test:roundtrip").await.unwrap(), Some(value));

    backend
        .del(&["actcache-test:roundtrip".to_string()])
        .await
        .unwrap();
    assert!(backend.get("actcache-test:roundtrip").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_redis_backend_clean_by_pattern() {
    let backend = backend();
    backend.set("actcache-clean:posts.a", json!(1), None).await.unwrap();
    backend.set("actcache-clean:posts.b", json!(2), None).await.unwrap();
    backend.set("actcache-clean:users.a", json!(3), None).await.unwrap();

    backend.clean("actcache-clean:posts.*").await.unwrap();

    assert!(backend.get("actcache-clean:posts.a").await.unwrap().is_none());
    assert!(backend.get("actcache-clean:posts.b").await.unwrap().is_none());
    assert_eq!(backend.get("actcache-clean:users.a").await.unwrap(), Some(json!(3)));

    backend.clean("actcache-clean:*").await.unwrap();
    backend.close().await.unwrap();
}
