use crate::error::{AppError, Result};
use crate::h3_index::H3Index;
use crate::models::{Coordinates, Poi, SemanticHit, TransportMode};
use crate::services::SemanticSearchClient;
use crate::time_utils::overlaps_with_window;
use std::collections::HashMap;
use std::sync::Arc;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

const FOOD_LOCAL_FLAVOURS: &str = "Food & Local Flavours";
const CAFE_AND_BAKERY: &str = "Cafe & Bakery";
const RESTAURANT: &str = "Restaurant";
const CULTURE_HERITAGE: &str = "Culture & heritage";

/// One POI annotated with the semantic query that won it and that query's
/// similarity score.
pub struct RankedPoi {
    pub poi: Poi,
    pub similarity: f64,
    pub category: String,
}

pub struct MultiQueryOrchestrator {
    h3_index: Arc<H3Index>,
    semantic: Arc<SemanticSearchClient>,
}

impl MultiQueryOrchestrator {
    pub fn new(h3_index: Arc<H3Index>, semantic: Arc<SemanticSearchClient>) -> Self {
        MultiQueryOrchestrator { h3_index, semantic }
    }

    /// Splits and expands the intent string per the category-expansion rules.
    pub fn expand_queries(
        semantic_query: &str,
        customer_like: bool,
        current_time: Option<OffsetDateTime>,
        max_time_minutes: u32,
    ) -> Vec<String> {
        let original: Vec<String> = semantic_query
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let requested_food_local_flavours_only =
            original.len() == 1 && original[0] == FOOD_LOCAL_FLAVOURS;

        let mut expanded: Vec<String> = Vec::new();
        let mut requested_food_local_flavours = false;
        for q in &original {
            if q == FOOD_LOCAL_FLAVOURS {
                requested_food_local_flavours = true;
                expanded.push(CAFE_AND_BAKERY.to_string());
                expanded.push(RESTAURANT.to_string());
            } else {
                expanded.push(q.clone());
            }
        }

        if customer_like && requested_food_local_flavours_only {
            expanded.push(CULTURE_HERITAGE.to_string());
        }

        if !requested_food_local_flavours && !expanded.contains(&RESTAURANT.to_string()) {
            if let Some(current_time) = current_time {
                if crate::time_utils::needs_restaurant_for_window(current_time, max_time_minutes) {
                    expanded.push(RESTAURANT.to_string());
                }
            }
        }

        expanded
    }

    pub async fn run(
        &self,
        point: Coordinates,
        mode: TransportMode,
        semantic_query: &str,
        top_k: u32,
        customer_like: bool,
        current_time: Option<OffsetDateTime>,
        max_time_minutes: u32,
    ) -> Result<Vec<RankedPoi>> {
        let queries = Self::expand_queries(semantic_query, customer_like, current_time, max_time_minutes);
        if queries.is_empty() {
            return Err(AppError::InvalidRequest("semantic_query produced no query terms".to_string()));
        }

        let shortlist = self.h3_index.search(point, mode).await?;
        let mut pois = shortlist.pois;
        if let Some(current_time) = current_time {
            let window_end = current_time + Duration::minutes(max_time_minutes as i64);
            pois.retain(|p| overlaps_with_window(&p.opening_hours, current_time, window_end));
        }

        if pois.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = pois.iter().map(|p| p.id).collect();
        let by_id: HashMap<Uuid, Poi> = pois.into_iter().map(|p| (p.id, p)).collect();

        let mut winners: HashMap<Uuid, SemanticHit> = HashMap::new();
        for query in &queries {
            let hits = self.semantic.search_filtered(query, top_k, &ids).await?;
            for hit in hits {
                let better = winners
                    .get(&hit.poi_id)
                    .map(|existing| hit.similarity > existing.similarity)
                    .unwrap_or(true);
                if better {
                    winners.insert(hit.poi_id, hit);
                }
            }
        }

        let mut ranked: Vec<RankedPoi> = winners
            .into_values()
            .filter_map(|hit| {
                by_id.get(&hit.poi_id).map(|poi| RankedPoi {
                    poi: poi.clone(),
                    similarity: hit.similarity,
                    category: hit.assigned_category,
                })
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.poi.id.cmp(&b.poi.id))
        });

        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCacheService;
    use crate::db::PoiRepository;
    use crate::h3_index::H3Index;
    use crate::services::{EmbeddingClient, SemanticSearchClient, VectorStore};
    use async_trait::async_trait;
    use time::macros::datetime;

    struct FakeRepo {
        pois: Vec<Poi>,
    }

    #[async_trait]
    impl PoiRepository for FakeRepo {
        async fn find_in_bbox(&self, _: f64, _: f64, _: f64, _: f64) -> Result<Vec<Poi>> {
            Ok(self.pois.clone())
        }
        async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Poi>> {
            Ok(self.pois.iter().filter(|p| ids.contains(&p.id)).cloned().collect())
        }
        async fn count(&self) -> Result<i64> {
            Ok(self.pois.len() as i64)
        }
    }

    struct FakeEmbeddings;
    #[async_trait]
    impl EmbeddingClient for FakeEmbeddings {
        async fn embed(&self, text: &str) -> Result<Vec<f32>> {
            Ok(vec![text.len() as f32])
        }
    }

    /// Mirrors `QdrantVectorStore::run_search`: every hit's category is the
    /// query text that won it, never a field read off the POI's own payload.
    struct FakeVectorStore;
    #[async_trait]
    impl VectorStore for FakeVectorStore {
        async fn search(&self, _query: &[f32], _query_text: &str, _top_k: u32) -> Result<Vec<SemanticHit>> {
            Ok(Vec::new())
        }
        async fn search_filtered(&self, _query: &[f32], query_text: &str, top_k: u32, ids: &[Uuid]) -> Result<Vec<SemanticHit>> {
            Ok(ids
                .iter()
                .map(|id| SemanticHit {
                    poi_id: *id,
                    similarity: 0.5,
                    assigned_category: query_text.to_string(),
                })
                .take(top_k as usize)
                .collect())
        }
        async fn health_check(&self) -> bool {
            true
        }
    }

    fn poi(lat: f64, lng: f64) -> Poi {
        Poi {
            id: Uuid::new_v4(),
            name: "Place".to_string(),
            address: None,
            coordinates: Coordinates::new(lat, lng).unwrap(),
            poi_type: "Restaurant".to_string(),
            poi_type_clean: Some("Restaurant".to_string()),
            main_subcategory: Some("Restaurant".to_string()),
            specialization: None,
            popularity_score: Some(0.5),
            stay_time_minutes: Some(30),
            opening_hours: Vec::new(),
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn run_assigns_the_winning_query_text_as_category_not_a_payload_field() {
        let p = poi(48.8566, 2.3522);
        let repo: Arc<dyn PoiRepository> = Arc::new(FakeRepo { pois: vec![p.clone()] });
        let cache = Arc::new(MemoryCacheService::new(3600, 1000));
        let h3_index = Arc::new(H3Index::new(repo, cache, 9, 3600).unwrap());
        let semantic = Arc::new(SemanticSearchClient::new(Arc::new(FakeEmbeddings), Arc::new(FakeVectorStore)));
        let orchestrator = MultiQueryOrchestrator::new(h3_index, semantic);

        let ranked = orchestrator
            .run(Coordinates::new(48.8566, 2.3522).unwrap(), TransportMode::Walking, "Nature & View", 5, false, None, 120)
            .await
            .unwrap();

        assert_eq!(ranked.len(), 1);
        // The fake's payload-equivalent fields (`poi_type`/`poi_type_clean`/
        // `main_subcategory`) all say "Restaurant" — the assigned category
        // must come from the query text instead.
        assert_eq!(ranked[0].category, "Nature & View");
    }

    #[test]
    fn expands_food_local_flavours() {
        let expanded = MultiQueryOrchestrator::expand_queries("Food & Local Flavours", false, None, 180);
        assert_eq!(expanded, vec!["Cafe & Bakery".to_string(), "Restaurant".to_string()]);
    }

    #[test]
    fn customer_like_adds_culture_heritage_only_when_sole_query() {
        let expanded = MultiQueryOrchestrator::expand_queries("Food & Local Flavours", true, None, 180);
        assert!(expanded.contains(&"Culture & heritage".to_string()));

        let expanded = MultiQueryOrchestrator::expand_queries("Food & Local Flavours,Nature & View", true, None, 180);
        assert!(!expanded.contains(&"Culture & heritage".to_string()));
    }

    #[test]
    fn meal_overlap_adds_restaurant_unless_already_requested() {
        let start = datetime!(2026-01-15 12:00:00 UTC);
        let expanded = MultiQueryOrchestrator::expand_queries("Nature & View", false, Some(start), 180);
        assert!(expanded.contains(&"Restaurant".to_string()));

        let expanded = MultiQueryOrchestrator::expand_queries("Food & Local Flavours", false, Some(start), 180);
        assert_eq!(expanded.iter().filter(|q| *q == "Restaurant").count(), 1);
    }

    #[test]
    fn meal_overlap_does_not_duplicate_an_explicitly_requested_restaurant() {
        let start = datetime!(2026-01-15 12:00:00 UTC);
        let expanded = MultiQueryOrchestrator::expand_queries("Restaurant,Nature & View", false, Some(start), 180);
        assert_eq!(expanded.iter().filter(|q| *q == "Restaurant").count(), 1);
    }
}
