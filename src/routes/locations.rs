use crate::error::{AppError, Result};
use crate::models::{Coordinates, Poi, TransportMode};
use crate::routes::timing::{Stopwatch, Timing};
use crate::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct LocationSearchRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub transportation_mode: TransportMode,
}

#[derive(Debug, Serialize)]
pub struct LocationHit {
    #[serde(flatten)]
    pub poi: Poi,
    pub distance_m: f64,
}

#[derive(Debug, Serialize)]
pub struct LocationSearchResponse {
    pub status: &'static str,
    pub pois: Vec<LocationHit>,
    pub coverage_radius_m: f64,
    pub timing: Timing,
}

/// `POST /api/v1/locations/search` — the spatial shortlist alone, with
/// per-POI distance and the coverage radius the H3 search used.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LocationSearchRequest>,
) -> Result<Json<LocationSearchResponse>> {
    let point = Coordinates::new(req.latitude, req.longitude).map_err(AppError::InvalidRequest)?;

    let sw = Stopwatch::start();
    let shortlist = state.h3_index.search(point, req.transportation_mode).await?;
    let spatial_ms = sw.elapsed_ms();

    let pois = shortlist
        .pois
        .into_iter()
        .map(|poi| {
            let distance_m = poi.coordinates.distance_to(&point) * 1000.0;
            LocationHit { poi, distance_m }
        })
        .collect();

    Ok(Json(LocationSearchResponse {
        status: "success",
        pois,
        coverage_radius_m: shortlist.coverage_radius_m,
        timing: Timing {
            spatial_ms,
            ..Default::default()
        },
    }))
}
