use crate::models::TransportMode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedRoutePoi {
    pub poi_id: Uuid,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedRoute {
    pub pois: Vec<CachedRoutePoi>,
}

/// Per-user cache value stored under `route_metadata:{user_id}`: the routes
/// last handed to the client, plus the replacement candidate pools the
/// replacement service draws from and records against.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RouteCacheEntry {
    pub transportation_mode: Option<TransportMode>,
    pub routes: HashMap<u32, CachedRoute>,
    pub available_pois_by_category: HashMap<String, Vec<Uuid>>,
    pub replaced_pois_by_category: HashMap<String, Vec<Uuid>>,
}

impl RouteCacheEntry {
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
