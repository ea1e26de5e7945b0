use async_trait::async_trait;
use poi_router::cache::MemoryCacheService;
use poi_router::db::PoiRepository;
use poi_router::error::Result;
use poi_router::h3_index::H3Index;
use poi_router::models::{OpeningHoursEntry, Poi, SemanticHit, TimeRange};
use poi_router::services::{EmbeddingClient, MultiQueryOrchestrator, PoiInfoStore, ReplacementService, SemanticSearchClient, VectorStore};
use poi_router::AppState;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory `PoiRepository` over a fixed POI set, filtered by bounding box
/// the same way the real repository would filter in SQL.
pub struct FakePoiRepository {
    pois: Vec<Poi>,
}

impl FakePoiRepository {
    pub fn new(pois: Vec<Poi>) -> Self {
        FakePoiRepository { pois }
    }
}

#[async_trait]
impl PoiRepository for FakePoiRepository {
    async fn find_in_bbox(&self, min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Result<Vec<Poi>> {
        Ok(self
            .pois
            .iter()
            .filter(|p| {
                !p.is_deleted()
                    && p.coordinates.lat >= min_lat
                    && p.coordinates.lat <= max_lat
                    && p.coordinates.lng >= min_lng
                    && p.coordinates.lng <= max_lng
            })
            .cloned()
            .collect())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Poi>> {
        Ok(self.pois.iter().filter(|p| ids.contains(&p.id)).cloned().collect())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.pois.len() as i64)
    }
}

/// Deterministic stand-in for the embedding service: the "embedding" is just
/// the query text's length, so tests never need a real model round trip.
pub struct FakeEmbeddingClient;

#[async_trait]
impl EmbeddingClient for FakeEmbeddingClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(vec![text.len() as f32])
    }
}

/// Mirrors `QdrantVectorStore`'s real behavior: the winning hit's category
/// is the query text that produced it, not any field carried on the POI's
/// own payload — there is no POI payload here at all.
pub struct FakeVectorStore;

#[async_trait]
impl VectorStore for FakeVectorStore {
    async fn search(&self, _query: &[f32], _query_text: &str, top_k: u32) -> Result<Vec<SemanticHit>> {
        Ok(Vec::new().into_iter().take(top_k as usize).collect())
    }

    async fn search_filtered(&self, _query: &[f32], query_text: &str, top_k: u32, ids: &[Uuid]) -> Result<Vec<SemanticHit>> {
        Ok(ids
            .iter()
            .enumerate()
            .map(|(i, id)| SemanticHit {
                poi_id: *id,
                similarity: 1.0 - (i as f64 * 0.01),
                assigned_category: query_text.to_string(),
            })
            .take(top_k as usize)
            .collect())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

pub fn always_open() -> Vec<OpeningHoursEntry> {
    let all_day = TimeRange {
        start: "00:00".to_string(),
        end: "23:59".to_string(),
    };
    [
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
    ]
    .into_iter()
    .map(|day| OpeningHoursEntry {
        day: day.to_string(),
        ranges: vec![all_day.clone()],
    })
    .collect()
}

pub fn make_poi(name: &str, category: &str, lat: f64, lng: f64) -> Poi {
    Poi {
        id: Uuid::new_v4(),
        name: name.to_string(),
        address: None,
        coordinates: poi_router::models::Coordinates::new(lat, lng).unwrap(),
        poi_type: category.to_string(),
        poi_type_clean: Some(category.to_string()),
        main_subcategory: Some(category.to_string()),
        specialization: None,
        popularity_score: Some(0.7),
        stay_time_minutes: Some(30),
        opening_hours: always_open(),
        deleted_at: None,
    }
}

fn test_config() -> poi_router::config::Config {
    poi_router::config::Config {
        host: "0.0.0.0".to_string(),
        port: 3000,
        database_url: "postgres://test".to_string(),
        redis_url: None,
        redis_cache_ttl: 3600,
        h3_cache_ttl: 3600,
        poi_cache_ttl: 3600,
        route_cache_ttl: 3600,
        h3_resolution: 9,
        qdrant_url: "http://localhost:6334".to_string(),
        qdrant_api_key: None,
        qdrant_collection_name: "pois".to_string(),
        vector_dimension: 384,
        embedding_model: "test-model".to_string(),
        embedding_service_url: "http://localhost:9000".to_string(),
        memory_cache_max_entries: 1000,
    }
}

/// Builds a fully wired `AppState` with fake repository/embedding/vector
/// backends and a real in-memory cache, so the HTTP layer can be exercised
/// end to end without a database, Redis, or Qdrant.
pub fn build_test_state(pois: Vec<Poi>) -> Arc<AppState> {
    let poi_repo: Arc<dyn PoiRepository> = Arc::new(FakePoiRepository::new(pois));
    let cache = Arc::new(MemoryCacheService::new(3600, 1000));
    let h3_index = Arc::new(H3Index::new(poi_repo.clone(), cache.clone(), 9, 3600).unwrap());
    let poi_store = Arc::new(PoiInfoStore::new(poi_repo.clone(), cache.clone(), 3600));
    let embeddings = Arc::new(FakeEmbeddingClient);
    let vectors = Arc::new(FakeVectorStore);
    let semantic = Arc::new(SemanticSearchClient::new(embeddings, vectors));
    let orchestrator = Arc::new(MultiQueryOrchestrator::new(h3_index.clone(), semantic.clone()));
    let replacement_service = Arc::new(ReplacementService::new(cache.clone(), poi_store.clone(), 3600));

    Arc::new(AppState {
        poi_repo,
        cache,
        h3_index,
        poi_store,
        semantic,
        orchestrator,
        replacement_service,
        config: Arc::new(test_config()),
    })
}
