pub mod memory;
pub mod redis;

pub use memory::MemoryCacheService;
pub use redis::RedisCacheService;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json;

/// Generic string-keyed cache with per-call TTL, shared by the H3 cell
/// cache (`poi:h3:res{R}:{cell}`), the POI info store (`location:{id}`) and
/// the route cache entry (`route_metadata:{user_id}`).
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> Option<String>;
    async fn set_raw(&self, key: &str, value: String, ttl_seconds: u64);
    async fn delete(&self, key: &str);
    async fn health_check(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}

/// Convenience JSON helpers layered over [`KeyValueCache::get_raw`]/`set_raw`.
#[async_trait]
pub trait JsonCacheExt: KeyValueCache {
    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_raw(key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("failed to deserialize cache entry {}: {}", key, e);
                None
            }
        }
    }

    async fn set_json<T: Serialize + Sync>(&self, key: &str, value: &T, ttl_seconds: u64) {
        match serde_json::to_string(value) {
            Ok(json) => self.set_raw(key, json, ttl_seconds).await,
            Err(e) => tracing::warn!("failed to serialize cache entry {}: {}", key, e),
        }
    }
}

impl<T: KeyValueCache + ?Sized> JsonCacheExt for T {}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    pub connected: bool,
}
