use crate::error::{AppError, Result};
use crate::models::{ConfirmReplacePoiRequest, ConfirmReplacePoiResponse, Coordinates, ReplacePoiRequest, ReplacePoiResponse, Route, RouteRequest};
use crate::routes::timing::{Stopwatch, Timing};
use crate::services::route_builder::{self, DurationModeStrategy, MiddleLoopStrategy, ShortlistPoi, TargetModeStrategy};
use crate::services::ReplacementService;
use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct RouteRoutesResponse {
    pub status: &'static str,
    pub routes: Vec<Route>,
    pub timing: Timing,
}

fn group_by_category(shortlist: &[ShortlistPoi]) -> HashMap<String, Vec<Uuid>> {
    let mut grouped: HashMap<String, Vec<Uuid>> = HashMap::new();
    for entry in shortlist {
        grouped.entry(entry.category.clone()).or_default().push(entry.poi.id);
    }
    grouped
}

/// `POST /api/v1/route/routes`.
pub async fn create_routes(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RouteRequest>,
) -> Result<Json<RouteRoutesResponse>> {
    let point = Coordinates::new(req.latitude, req.longitude).map_err(AppError::InvalidRequest)?;

    if req.delete_cache {
        if let Some(user_id) = req.user_id {
            state.replacement_service.delete_cache(user_id).await;
        }
    }

    let sw = Stopwatch::start();
    let ranked = state
        .orchestrator
        .run(
            point,
            req.transportation_mode,
            &req.semantic_query,
            req.top_k_semantic,
            req.customer_like,
            req.current_time,
            req.max_time_minutes,
        )
        .await?;
    let vector_search_ms = sw.elapsed_ms();

    let shortlist: Vec<ShortlistPoi> = ranked.into_iter().map(ShortlistPoi::from).collect();
    let available_pois_by_category = group_by_category(&shortlist);

    let is_duration_mode = req.duration.unwrap_or(false);
    let circular_routing = req.circular_routing;

    let sw = Stopwatch::start();
    let routes = if let Some(route_id_to_replace) = req.replace_route {
        build_replacement(&state, &req, &shortlist, point, route_id_to_replace, is_duration_mode, circular_routing, &available_pois_by_category).await?
    } else {
        let routes = build_with_strategy(&shortlist, point, &req, req.max_routes, is_duration_mode, circular_routing);
        if let Some(user_id) = req.user_id {
            state
                .replacement_service
                .store_routes_result(user_id, req.transportation_mode, &routes, available_pois_by_category)
                .await;
        }
        routes
    };
    let route_building_ms = sw.elapsed_ms();

    Ok(Json(RouteRoutesResponse {
        status: "success",
        routes,
        timing: Timing {
            vector_search_ms,
            route_building_ms,
            ..Default::default()
        },
    }))
}

fn build_with_strategy(
    shortlist: &[ShortlistPoi],
    point: Coordinates,
    req: &RouteRequest,
    max_routes: u32,
    is_duration_mode: bool,
    circular_routing: bool,
) -> Vec<Route> {
    if is_duration_mode {
        let strategy = DurationModeStrategy::new(req.max_time_minutes);
        run_build(shortlist, point, req, max_routes, circular_routing, &strategy)
    } else {
        let strategy = TargetModeStrategy::new(req.target_places);
        run_build(shortlist, point, req, max_routes, circular_routing, &strategy)
    }
}

fn run_build(
    shortlist: &[ShortlistPoi],
    point: Coordinates,
    req: &RouteRequest,
    max_routes: u32,
    circular_routing: bool,
    strategy: &dyn MiddleLoopStrategy,
) -> Vec<Route> {
    route_builder::build_routes(
        shortlist,
        point,
        req.transportation_mode,
        req.max_time_minutes,
        max_routes,
        req.current_time,
        circular_routing,
        strategy,
    )
}

#[allow(clippy::too_many_arguments)]
async fn build_replacement(
    state: &AppState,
    req: &RouteRequest,
    shortlist: &[ShortlistPoi],
    point: Coordinates,
    route_id_to_replace: u32,
    is_duration_mode: bool,
    circular_routing: bool,
    available_pois_by_category: &HashMap<String, Vec<Uuid>>,
) -> Result<Vec<Route>> {
    let requested = route_id_to_replace + 1;
    let candidates = build_with_strategy(shortlist, point, req, requested, is_duration_mode, circular_routing);

    let fallback = if candidates.len() as u32 != requested {
        build_with_strategy(shortlist, point, req, 1, is_duration_mode, circular_routing)
            .into_iter()
            .next()
    } else {
        None
    };

    let final_route = ReplacementService::finalize_replace_route(route_id_to_replace, candidates, fallback);

    match final_route {
        Some(route) => {
            if let Some(user_id) = req.user_id {
                state
                    .replacement_service
                    .store_routes_result(user_id, req.transportation_mode, std::slice::from_ref(&route), available_pois_by_category.clone())
                    .await;
            }
            Ok(vec![route])
        }
        None => Ok(Vec::new()),
    }
}

/// `POST /api/v1/route/replace-poi`.
pub async fn replace_poi(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReplacePoiRequest>,
) -> Result<Json<ReplacePoiResponse>> {
    let candidates = state
        .replacement_service
        .replace_poi(req.user_id, req.route_id, req.poi_id_to_replace, req.current_time)
        .await?;
    Ok(Json(ReplacePoiResponse { candidates }))
}

/// `POST /api/v1/route/confirm-replace-poi`.
pub async fn confirm_replace_poi(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConfirmReplacePoiRequest>,
) -> Result<Json<ConfirmReplacePoiResponse>> {
    let response = state
        .replacement_service
        .confirm_replace_poi(req.user_id, req.route_id, req.old_poi_id, req.new_poi_id)
        .await?;
    Ok(Json(response))
}
