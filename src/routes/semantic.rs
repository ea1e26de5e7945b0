use crate::error::{AppError, Result};
use crate::models::{Coordinates, Poi, TransportMode};
use crate::routes::timing::{Stopwatch, Timing};
use crate::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

fn default_top_k() -> u32 {
    crate::constants::DEFAULT_TOP_K_SEMANTIC
}

#[derive(Debug, Deserialize)]
pub struct SemanticSearchRequest {
    pub query: String,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
}

#[derive(Debug, Serialize)]
pub struct SemanticHitResponse {
    pub poi_id: Uuid,
    pub similarity: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poi: Option<Poi>,
}

#[derive(Debug, Serialize)]
pub struct SemanticSearchResponse {
    pub status: &'static str,
    pub results: Vec<SemanticHitResponse>,
    pub timing: Timing,
}

/// `POST /api/v1/semantic/search` — unfiltered nearest-neighbor search.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SemanticSearchRequest>,
) -> Result<Json<SemanticSearchResponse>> {
    if req.query.trim().is_empty() {
        return Err(AppError::InvalidRequest("query must not be empty".to_string()));
    }

    let sw = Stopwatch::start();
    let hits = state.semantic.search(&req.query, req.top_k).await?;
    let vector_search_ms = sw.elapsed_ms();

    let ids: Vec<Uuid> = hits.iter().map(|h| h.poi_id).collect();
    let sw = Stopwatch::start();
    let pois = state.poi_store.get_by_ids(&ids).await?;
    let hydration_ms = sw.elapsed_ms();

    let results = hits
        .into_iter()
        .map(|hit| SemanticHitResponse {
            poi_id: hit.poi_id,
            similarity: hit.similarity,
            category: hit.assigned_category,
            poi: pois.iter().find(|p| p.id == hit.poi_id).cloned(),
        })
        .collect();

    Ok(Json(SemanticSearchResponse {
        status: "success",
        results,
        timing: Timing {
            vector_search_ms,
            hydration_ms,
            ..Default::default()
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct CombinedSearchRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub transportation_mode: TransportMode,
    pub semantic_query: String,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
}

/// `POST /api/v1/semantic/combined` — the spatial step feeding the
/// id-filtered semantic step, without route building.
pub async fn combined(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CombinedSearchRequest>,
) -> Result<Json<SemanticSearchResponse>> {
    let point = Coordinates::new(req.latitude, req.longitude).map_err(AppError::InvalidRequest)?;

    let sw = Stopwatch::start();
    let ranked = state
        .orchestrator
        .run(
            point,
            req.transportation_mode,
            &req.semantic_query,
            req.top_k,
            false,
            None,
            crate::constants::DEFAULT_MAX_TIME_MINUTES,
        )
        .await?;
    let combined_ms = sw.elapsed_ms();

    let results = ranked
        .into_iter()
        .map(|r| SemanticHitResponse {
            poi_id: r.poi.id,
            similarity: r.similarity,
            category: r.category,
            poi: Some(r.poi),
        })
        .collect();

    Ok(Json(SemanticSearchResponse {
        status: "success",
        results,
        timing: Timing {
            vector_search_ms: combined_ms,
            ..Default::default()
        },
    }))
}
