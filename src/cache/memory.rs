use crate::cache::KeyValueCache;
use async_trait::async_trait;
use moka::future::Cache;
use std::time::Duration;

/// In-memory cache backed by moka with a fixed TTL and bounded capacity set
/// at construction time. `ttl_seconds` passed to `set_raw` is ignored beyond
/// sanity-checking it matches this instance's configured TTL, since moka's
/// builder fixes time-to-live per cache, not per entry.
pub struct MemoryCacheService {
    entries: Cache<String, String>,
}

impl MemoryCacheService {
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let entries = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        MemoryCacheService { entries }
    }
}

#[async_trait]
impl KeyValueCache for MemoryCacheService {
    async fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.get(key).await
    }

    async fn set_raw(&self, key: &str, value: String, _ttl_seconds: u64) {
        self.entries.insert(key.to_string(), value).await;
    }

    async fn delete(&self, key: &str) {
        self.entries.invalidate(key).await;
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::JsonCacheExt;

    #[tokio::test]
    async fn cache_miss() {
        let cache = MemoryCacheService::new(3600, 100);
        assert!(cache.get_raw("nonexistent").await.is_none());
    }

    #[tokio::test]
    async fn json_roundtrip() {
        let cache = MemoryCacheService::new(3600, 100);
        let value = vec![1, 2, 3];
        cache.set_json("key1", &value, 3600).await;
        let cached: Vec<i32> = cache.get_json("key1").await.unwrap();
        assert_eq!(cached, value);
    }

    #[tokio::test]
    async fn ttl_expiry() {
        let cache = MemoryCacheService::new(1, 100);
        cache.set_raw("key1", "value".to_string(), 1).await;
        assert!(cache.get_raw("key1").await.is_some());

        tokio::time::sleep(Duration::from_secs(2)).await;

        assert!(cache.get_raw("key1").await.is_none());
    }
}
