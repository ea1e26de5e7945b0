use crate::cache::{JsonCacheExt, KeyValueCache};
use crate::constants::MAX_REPLACEMENT_CANDIDATES;
use crate::error::{AppError, Result};
use crate::models::{CachedRoutePoi, ConfirmReplacePoiResponse, Route, RouteCacheEntry, RouteVisit, TransportMode};
use crate::services::poi_store::PoiInfoStore;
use crate::time_utils::day_entry;
use std::collections::HashSet;
use std::sync::Arc;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

fn route_cache_key(user_id: Uuid) -> String {
    format!("route_metadata:{user_id}")
}

/// Backs `replace_poi`/`confirm_replace_poi`/`replace_route` against the
/// per-user route cache entry. `replace_route`'s re-planning step lives with
/// the caller (it needs the full shortlist pipeline); this service only
/// owns the cache read-modify-write and the id-reset-to-1 fallback rule.
pub struct ReplacementService {
    cache: Arc<dyn KeyValueCache>,
    poi_store: Arc<PoiInfoStore>,
    cache_ttl_seconds: u64,
}

impl ReplacementService {
    pub fn new(cache: Arc<dyn KeyValueCache>, poi_store: Arc<PoiInfoStore>, cache_ttl_seconds: u64) -> Self {
        ReplacementService {
            cache,
            poi_store,
            cache_ttl_seconds,
        }
    }

    async fn load_entry(&self, user_id: Uuid) -> Result<RouteCacheEntry> {
        self.cache
            .get_json::<RouteCacheEntry>(&route_cache_key(user_id))
            .await
            .ok_or_else(|| AppError::NotFound(format!("no cached route state for user {user_id}")))
    }

    async fn persist_entry(&self, user_id: Uuid, entry: &RouteCacheEntry) {
        self.cache
            .set_json(&route_cache_key(user_id), entry, self.cache_ttl_seconds)
            .await;
    }

    pub async fn replace_poi(
        &self,
        user_id: Uuid,
        route_id: u32,
        poi_id_to_replace: Uuid,
        current_time: Option<OffsetDateTime>,
    ) -> Result<Vec<RouteVisit>> {
        let mut entry = self.load_entry(user_id).await?;
        let route = entry
            .routes
            .get(&route_id)
            .ok_or_else(|| AppError::NotFound(format!("route {route_id} not found for user {user_id}")))?
            .clone();

        let slot = route
            .pois
            .iter()
            .position(|p| p.poi_id == poi_id_to_replace)
            .ok_or_else(|| AppError::NotFound(format!("poi {poi_id_to_replace} not in route {route_id}")))?;
        let category = route.pois[slot].category.clone();

        let in_route: HashSet<Uuid> = route.pois.iter().map(|p| p.poi_id).collect();
        let pool = entry.available_pois_by_category.get(&category).cloned().unwrap_or_default();

        let mut candidate_ids = self.unoffered_candidates(&entry, &category, &pool, &in_route);
        if candidate_ids.is_empty() {
            entry.replaced_pois_by_category.remove(&category);
            candidate_ids = self.unoffered_candidates(&entry, &category, &pool, &in_route);
            if candidate_ids.is_empty() {
                self.persist_entry(user_id, &entry).await;
                return Ok(Vec::new());
            }
        }
        candidate_ids.truncate(MAX_REPLACEMENT_CANDIDATES);

        let neighbor_id = if slot > 0 {
            route.pois.get(slot - 1)
        } else {
            route.pois.get(slot + 1)
        }
        .map(|p| p.poi_id);
        let neighbor = match neighbor_id {
            Some(id) => self.poi_store.get_by_id(id).await?,
            None => None,
        };

        let mode = entry.transportation_mode.unwrap_or(TransportMode::Walking);
        let candidates = self.poi_store.get_by_ids(&candidate_ids).await?;

        let mut visits = Vec::with_capacity(candidates.len());
        for poi in candidates {
            let travel_time_minutes = match &neighbor {
                Some(n) => mode.travel_minutes(n.coordinates.distance_to(&poi.coordinates)),
                None => 0.0,
            };
            let arrival_time = current_time.map(|t| t + Duration::minutes(travel_time_minutes.round() as i64));
            let opening_hours_today = arrival_time.and_then(|a| day_entry(&poi.opening_hours, a));

            visits.push(RouteVisit {
                poi_id: poi.id,
                name: poi.name.clone(),
                category: category.clone(),
                combined_score: 0.0,
                travel_time_minutes,
                stay_time_minutes: poi.stay_time(),
                arrival_time,
                opening_hours_today,
            });
        }

        let offered: Vec<Uuid> = visits.iter().map(|v| v.poi_id).collect();
        entry
            .replaced_pois_by_category
            .entry(category)
            .or_default()
            .extend(offered);
        self.persist_entry(user_id, &entry).await;

        Ok(visits)
    }

    fn unoffered_candidates(
        &self,
        entry: &RouteCacheEntry,
        category: &str,
        pool: &[Uuid],
        in_route: &HashSet<Uuid>,
    ) -> Vec<Uuid> {
        let replaced = entry.replaced_pois_by_category.get(category).cloned().unwrap_or_default();
        pool.iter()
            .filter(|id| !in_route.contains(id) && !replaced.contains(id))
            .cloned()
            .collect()
    }

    /// Rewrites the slot and persists; the returned `Route` reflects the
    /// cached POI ids/categories with stay times but, since the cache entry
    /// does not retain the user's coordinates or the original scoring
    /// context, does not recompute travel times, bearings, or scores for
    /// the unaffected stops.
    pub async fn confirm_replace_poi(
        &self,
        user_id: Uuid,
        route_id: u32,
        old_poi_id: Uuid,
        new_poi_id: Uuid,
    ) -> Result<ConfirmReplacePoiResponse> {
        let mut entry = self.load_entry(user_id).await?;
        let route = entry
            .routes
            .get_mut(&route_id)
            .ok_or_else(|| AppError::NotFound(format!("route {route_id} not found for user {user_id}")))?;

        let slot = route
            .pois
            .iter()
            .position(|p| p.poi_id == old_poi_id)
            .ok_or_else(|| AppError::NotFound(format!("poi {old_poi_id} not in route {route_id}")))?;
        let category = route.pois[slot].category.clone();
        route.pois[slot] = CachedRoutePoi {
            poi_id: new_poi_id,
            category: category.clone(),
        };
        let pois = route.pois.clone();

        entry
            .replaced_pois_by_category
            .entry(category.clone())
            .or_default()
            .push(new_poi_id);
        self.persist_entry(user_id, &entry).await;

        let ids: Vec<Uuid> = pois.iter().map(|p| p.poi_id).collect();
        let hydrated = self.poi_store.get_by_ids(&ids).await?;
        let visits: Vec<RouteVisit> = pois
            .iter()
            .filter_map(|p| {
                hydrated.iter().find(|poi| poi.id == p.poi_id).map(|poi| RouteVisit {
                    poi_id: poi.id,
                    name: poi.name.clone(),
                    category: p.category.clone(),
                    combined_score: 0.0,
                    travel_time_minutes: 0.0,
                    stay_time_minutes: poi.stay_time(),
                    arrival_time: None,
                    opening_hours_today: None,
                })
            })
            .collect();
        let stay_minutes: f64 = visits.iter().map(|v| v.stay_time_minutes as f64).sum();

        Ok(ConfirmReplacePoiResponse {
            route: Route::from_visits(route_id, visits, 0.0, stay_minutes),
        })
    }

    /// Applies the success-or-fallback rule from a freshly re-planned
    /// candidate set: if the planner produced `route_id_to_replace + 1`
    /// routes, the last one is kept under its own id; otherwise the
    /// fallback single route is kept, silently renumbered to `1`. This
    /// reproduces the upstream id-reset quirk rather than hiding it.
    pub fn finalize_replace_route(route_id_to_replace: u32, candidates: Vec<Route>, fallback: Option<Route>) -> Option<Route> {
        if candidates.len() as u32 == route_id_to_replace + 1 {
            candidates.into_iter().next_back()
        } else {
            fallback.map(|mut r| {
                r.route_id = 1;
                r
            })
        }
    }

    /// Overwrites the user's cached route state with exactly `routes`,
    /// keyed by their own `route_id`s, alongside the replacement candidate
    /// pool for every category present in the shortlist.
    pub async fn store_routes_result(
        &self,
        user_id: Uuid,
        mode: TransportMode,
        routes: &[Route],
        available_pois_by_category: std::collections::HashMap<String, Vec<Uuid>>,
    ) {
        let cached = routes
            .iter()
            .map(|route| {
                (
                    route.route_id,
                    crate::models::CachedRoute {
                        pois: route
                            .visits
                            .iter()
                            .map(|v| CachedRoutePoi {
                                poi_id: v.poi_id,
                                category: v.category.clone(),
                            })
                            .collect(),
                    },
                )
            })
            .collect();
        let entry = RouteCacheEntry {
            transportation_mode: Some(mode),
            routes: cached,
            available_pois_by_category,
            replaced_pois_by_category: std::collections::HashMap::new(),
        };
        self.persist_entry(user_id, &entry).await;
    }

    pub async fn delete_cache(&self, user_id: Uuid) {
        self.cache.delete(&route_cache_key(user_id)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCacheService;
    use crate::db::PoiRepository;
    use crate::models::{Coordinates, Poi};
    use async_trait::async_trait;
    use std::collections::HashMap;

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

    fn poi(id: Uuid, name: &str) -> Poi {
        Poi {
            id,
            name: name.to_string(),
            address: None,
            coordinates: Coordinates::new(48.8566, 2.3522).unwrap(),
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

    fn service(pois: Vec<Poi>) -> ReplacementService {
        let repo: Arc<dyn PoiRepository> = Arc::new(FakeRepo { pois });
        let cache = Arc::new(MemoryCacheService::new(3600, 1000));
        let poi_store = Arc::new(PoiInfoStore::new(repo, cache.clone(), 3600));
        ReplacementService::new(cache, poi_store, 3600)
    }

    #[tokio::test]
    async fn replace_poi_offers_unoffered_pool_candidates_excluding_the_route() {
        let user_id = Uuid::new_v4();
        let in_route_id = Uuid::new_v4();
        let candidate_id = Uuid::new_v4();
        let pool = vec![in_route_id, candidate_id];

        let svc = service(vec![poi(in_route_id, "In route"), poi(candidate_id, "Candidate")]);

        let mut routes = HashMap::new();
        routes.insert(
            0,
            crate::models::CachedRoute {
                pois: vec![CachedRoutePoi {
                    poi_id: in_route_id,
                    category: "Restaurant".to_string(),
                }],
            },
        );
        let mut available = HashMap::new();
        available.insert("Restaurant".to_string(), pool);
        let entry = RouteCacheEntry {
            transportation_mode: Some(TransportMode::Walking),
            routes,
            available_pois_by_category: available,
            replaced_pois_by_category: HashMap::new(),
        };
        svc.persist_entry(user_id, &entry).await;

        let visits = svc.replace_poi(user_id, 0, in_route_id, None).await.unwrap();
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].poi_id, candidate_id);

        // The candidate already offered once must not be re-offered.
        let reloaded = svc.load_entry(user_id).await.unwrap();
        assert_eq!(reloaded.replaced_pois_by_category["Restaurant"], vec![candidate_id]);
    }

    #[tokio::test]
    async fn replace_poi_missing_route_is_not_found() {
        let svc = service(Vec::new());
        let err = svc.replace_poi(Uuid::new_v4(), 0, Uuid::new_v4(), None).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn confirm_replace_poi_rewrites_the_slot_and_records_the_new_poi() {
        let user_id = Uuid::new_v4();
        let old_id = Uuid::new_v4();
        let new_id = Uuid::new_v4();

        let svc = service(vec![poi(old_id, "Old"), poi(new_id, "New")]);

        let mut routes = HashMap::new();
        routes.insert(
            0,
            crate::models::CachedRoute {
                pois: vec![CachedRoutePoi {
                    poi_id: old_id,
                    category: "Restaurant".to_string(),
                }],
            },
        );
        let entry = RouteCacheEntry {
            transportation_mode: Some(TransportMode::Walking),
            routes,
            available_pois_by_category: HashMap::new(),
            replaced_pois_by_category: HashMap::new(),
        };
        svc.persist_entry(user_id, &entry).await;

        let response = svc.confirm_replace_poi(user_id, 0, old_id, new_id).await.unwrap();
        assert_eq!(response.route.visits.len(), 1);
        assert_eq!(response.route.visits[0].poi_id, new_id);
        assert_eq!(response.route.visits[0].name, "New");

        let reloaded = svc.load_entry(user_id).await.unwrap();
        assert_eq!(reloaded.routes[&0].pois[0].poi_id, new_id);
        assert_eq!(reloaded.replaced_pois_by_category["Restaurant"], vec![new_id]);
    }

    #[test]
    fn finalize_replace_route_keeps_the_matching_candidate_by_id() {
        let candidates = vec![
            Route::from_visits(1, Vec::new(), 0.0, 0.0),
            Route::from_visits(2, Vec::new(), 0.0, 0.0),
        ];
        let kept = ReplacementService::finalize_replace_route(1, candidates, None).unwrap();
        assert_eq!(kept.route_id, 2);
    }

    #[test]
    fn finalize_replace_route_falls_back_and_renumbers_to_one() {
        let fallback = Route::from_visits(7, Vec::new(), 0.0, 0.0);
        let kept = ReplacementService::finalize_replace_route(1, Vec::new(), Some(fallback)).unwrap();
        assert_eq!(kept.route_id, 1);
    }
}
