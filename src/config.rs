use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: Option<String>,
    pub redis_cache_ttl: u64,
    pub h3_cache_ttl: u64,
    pub poi_cache_ttl: u64,
    pub route_cache_ttl: u64,
    pub h3_resolution: u8,
    pub qdrant_url: String,
    pub qdrant_api_key: Option<String>,
    pub qdrant_collection_name: String,
    pub vector_dimension: u64,
    pub embedding_model: String,
    pub embedding_service_url: String,
    pub memory_cache_max_entries: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let h3_resolution: u8 = env::var("H3_RESOLUTION")
            .unwrap_or_else(|_| DEFAULT_H3_RESOLUTION.to_string())
            .parse()
            .map_err(|_| "Invalid H3_RESOLUTION")?;
        if h3_resolution > 15 {
            return Err("H3_RESOLUTION must be between 0 and 15".to_string());
        }

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            database_url: env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            redis_url: env::var("REDIS_URL").ok(),
            redis_cache_ttl: env::var("REDIS_CACHE_TTL")
                .unwrap_or_else(|_| DEFAULT_ROUTE_CACHE_TTL_SECONDS.to_string())
                .parse()
                .map_err(|_| "Invalid REDIS_CACHE_TTL")?,
            h3_cache_ttl: env::var("H3_CACHE_TTL")
                .unwrap_or_else(|_| DEFAULT_H3_CACHE_TTL_SECONDS.to_string())
                .parse()
                .map_err(|_| "Invalid H3_CACHE_TTL")?,
            poi_cache_ttl: env::var("POI_CACHE_TTL")
                .unwrap_or_else(|_| DEFAULT_POI_CACHE_TTL_SECONDS.to_string())
                .parse()
                .map_err(|_| "Invalid POI_CACHE_TTL")?,
            route_cache_ttl: env::var("ROUTE_CACHE_TTL")
                .unwrap_or_else(|_| DEFAULT_ROUTE_CACHE_TTL_SECONDS.to_string())
                .parse()
                .map_err(|_| "Invalid ROUTE_CACHE_TTL")?,
            h3_resolution,
            qdrant_url: env::var("QDRANT_URL").map_err(|_| "QDRANT_URL must be set")?,
            qdrant_api_key: env::var("QDRANT_API_KEY").ok(),
            qdrant_collection_name: env::var("QDRANT_COLLECTION_NAME")
                .unwrap_or_else(|_| "pois".to_string()),
            vector_dimension: env::var("VECTOR_DIMENSION")
                .unwrap_or_else(|_| "384".to_string())
                .parse()
                .map_err(|_| "Invalid VECTOR_DIMENSION")?,
            embedding_model: env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| "text-embedding-3-small".to_string()),
            embedding_service_url: env::var("EMBEDDING_SERVICE_URL")
                .map_err(|_| "EMBEDDING_SERVICE_URL must be set")?,
            memory_cache_max_entries: env::var("MEMORY_CACHE_MAX_ENTRIES")
                .unwrap_or_else(|_| DEFAULT_MEMORY_CACHE_MAX_ENTRIES.to_string())
                .parse()
                .map_err(|_| "Invalid MEMORY_CACHE_MAX_ENTRIES")?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
