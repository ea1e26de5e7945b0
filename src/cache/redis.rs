use crate::cache::KeyValueCache;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

/// Redis-backed cache. All methods are `&self` — `ConnectionManager` is
/// `Arc`-based internally, so `.clone()` is a cheap atomic increment.
pub struct RedisCacheService {
    connection: ConnectionManager,
}

impl RedisCacheService {
    pub async fn new(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| AppError::Cache(format!("failed to create redis client: {}", e)))?;

        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| AppError::Cache(format!("failed to connect to redis: {}", e)))?;

        tracing::info!("redis cache connection established");

        Ok(RedisCacheService { connection })
    }
}

#[async_trait]
impl KeyValueCache for RedisCacheService {
    async fn get_raw(&self, key: &str) -> Option<String> {
        let mut conn = self.connection.clone();
        match conn.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("redis get error for {}: {}", key, e);
                None
            }
        }
    }

    async fn set_raw(&self, key: &str, value: String, ttl_seconds: u64) {
        let mut conn = self.connection.clone();
        let result: redis::RedisResult<()> = conn.set_ex(key, value, ttl_seconds).await;
        if let Err(e) = result {
            tracing::warn!("redis set error for {}: {}", key, e);
        }
    }

    async fn delete(&self, key: &str) {
        let mut conn = self.connection.clone();
        let result: redis::RedisResult<()> = conn.del(key).await;
        if let Err(e) = result {
            tracing::warn!("redis delete error for {}: {}", key, e);
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.connection.clone();
        let result: redis::RedisResult<String> = redis::cmd("PING").query_async(&mut conn).await;
        result.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
