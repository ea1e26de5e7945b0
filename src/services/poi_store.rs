use crate::cache::{JsonCacheExt, KeyValueCache};
use crate::db::PoiRepository;
use crate::error::Result;
use crate::models::Poi;
use std::sync::Arc;
use uuid::Uuid;

const NEGATIVE_SENTINEL: &str = "__absent__";

fn cache_key(id: Uuid) -> String {
    format!("location:{id}")
}

/// Per-POI cache in front of the repository: positive entries hold the POI
/// JSON, negative entries remember a miss so a repeated lookup for a
/// nonexistent id doesn't re-hit the database.
pub struct PoiInfoStore {
    repo: Arc<dyn PoiRepository>,
    cache: Arc<dyn KeyValueCache>,
    cache_ttl_seconds: u64,
}

impl PoiInfoStore {
    pub fn new(repo: Arc<dyn PoiRepository>, cache: Arc<dyn KeyValueCache>, cache_ttl_seconds: u64) -> Self {
        PoiInfoStore {
            repo,
            cache,
            cache_ttl_seconds,
        }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Poi>> {
        Ok(self.get_by_ids(&[id]).await?.into_iter().next())
    }

    /// Malformed ids are the caller's problem to filter before calling this;
    /// unknown ids are simply absent from the result, not an error.
    pub async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Poi>> {
        let mut found = Vec::new();
        let mut missing = Vec::new();

        for &id in ids {
            let key = cache_key(id);
            match self.cache.get_raw(&key).await {
                Some(raw) if raw == NEGATIVE_SENTINEL => {}
                Some(raw) => match serde_json::from_str::<Poi>(&raw) {
                    Ok(poi) => found.push(poi),
                    Err(_) => missing.push(id),
                },
                None => missing.push(id),
            }
        }

        if !missing.is_empty() {
            let fetched = self.repo.find_by_ids(&missing).await?;
            let fetched_ids: std::collections::HashSet<Uuid> = fetched.iter().map(|p| p.id).collect();

            for poi in &fetched {
                self.cache
                    .set_json(&cache_key(poi.id), poi, self.cache_ttl_seconds)
                    .await;
            }
            for id in &missing {
                if !fetched_ids.contains(id) {
                    self.cache
                        .set_raw(&cache_key(*id), NEGATIVE_SENTINEL.to_string(), self.cache_ttl_seconds)
                        .await;
                }
            }

            found.extend(fetched);
        }

        Ok(found)
    }
}
