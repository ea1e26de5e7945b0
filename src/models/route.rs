use crate::models::poi::OpeningHoursEntry;
use crate::models::TransportMode;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// One stop in a built route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteVisit {
    pub poi_id: Uuid,
    pub name: String,
    pub category: String,
    pub combined_score: f64,
    /// Minutes of travel from the previous stop (the user's location for the first stop).
    pub travel_time_minutes: f64,
    pub stay_time_minutes: u32,
    /// Present only when the request supplied a starting datetime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<OffsetDateTime>,
    /// That weekday's opening-hours entry, echoed back for the caller's convenience.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours_today: Option<OpeningHoursEntry>,
}

/// One complete greedy-built route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub route_id: u32,
    pub visits: Vec<RouteVisit>,
    pub total_time_minutes: f64,
    pub travel_time_minutes: f64,
    pub stay_time_minutes: f64,
    pub total_score: f64,
    pub avg_score: f64,
    pub efficiency: f64,
}

impl Route {
    /// Builds the aggregate fields from a finished visit list, per the
    /// `total_score`/`avg_score`/`efficiency` formula set: sum of per-POI
    /// similarity, its mean, and score-per-minute scaled by 100.
    pub fn from_visits(route_id: u32, visits: Vec<RouteVisit>, travel_time_minutes: f64, stay_time_minutes: f64) -> Self {
        let total_time_minutes = travel_time_minutes + stay_time_minutes;
        let total_score: f64 = visits.iter().map(|v| v.combined_score).sum();
        let avg_score = if visits.is_empty() {
            0.0
        } else {
            total_score / visits.len() as f64
        };
        let efficiency = if total_time_minutes > 0.0 {
            total_score / total_time_minutes * 100.0
        } else {
            0.0
        };

        Route {
            route_id,
            visits,
            total_time_minutes: round2(total_time_minutes),
            travel_time_minutes: round2(travel_time_minutes),
            stay_time_minutes: round2(stay_time_minutes),
            total_score: round2(total_score),
            avg_score: round2(avg_score),
            efficiency: round2(efficiency),
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Body of `POST /api/v1/route/routes`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRequest {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub latitude: f64,
    pub longitude: f64,
    pub transportation_mode: TransportMode,
    #[serde(default)]
    pub transportation_type: Option<String>,
    pub semantic_query: String,
    #[serde(default)]
    pub customer_like: bool,
    #[serde(default)]
    pub current_time: Option<OffsetDateTime>,
    #[serde(default = "default_max_time_minutes")]
    pub max_time_minutes: u32,
    #[serde(default = "default_target_places")]
    pub target_places: u32,
    #[serde(default = "default_max_routes")]
    pub max_routes: u32,
    #[serde(default = "default_top_k_semantic")]
    pub top_k_semantic: u32,
    #[serde(default)]
    pub replace_route: Option<u32>,
    #[serde(default)]
    pub delete_cache: bool,
    /// Selects the `duration` planner mode instead of `target`.
    #[serde(default)]
    pub duration: Option<bool>,
    #[serde(default)]
    pub circular_routing: bool,
}

fn default_max_time_minutes() -> u32 {
    crate::constants::DEFAULT_MAX_TIME_MINUTES
}
fn default_target_places() -> u32 {
    crate::constants::DEFAULT_TARGET_PLACES
}
fn default_max_routes() -> u32 {
    crate::constants::DEFAULT_MAX_ROUTES
}
fn default_top_k_semantic() -> u32 {
    crate::constants::DEFAULT_TOP_K_SEMANTIC
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
pub struct ReplacePoiRequest {
    pub user_id: Uuid,
    pub route_id: u32,
    pub poi_id_to_replace: Uuid,
    #[serde(default)]
    pub current_time: Option<OffsetDateTime>,
}

#[derive(Debug, Serialize)]
pub struct ReplacePoiResponse {
    pub candidates: Vec<RouteVisit>,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmReplacePoiRequest {
    pub user_id: Uuid,
    pub route_id: u32,
    pub old_poi_id: Uuid,
    pub new_poi_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ConfirmReplacePoiResponse {
    pub route: Route,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit(score: f64) -> RouteVisit {
        RouteVisit {
            poi_id: Uuid::new_v4(),
            name: "Place".to_string(),
            category: "Museum".to_string(),
            combined_score: score,
            travel_time_minutes: 5.0,
            stay_time_minutes: 30,
            arrival_time: None,
            opening_hours_today: None,
        }
    }

    #[test]
    fn aggregate_formulas_match_the_pinned_definitions() {
        let visits = vec![visit(0.8), visit(0.6)];
        let route = Route::from_visits(1, visits, 20.0, 60.0);
        assert_eq!(route.total_score, 1.4);
        assert_eq!(route.avg_score, 0.7);
        assert_eq!(route.total_time_minutes, 80.0);
        // efficiency = total_score / total_time * 100 = 1.4 / 80 * 100 = 1.75
        assert_eq!(route.efficiency, 1.75);
    }

    #[test]
    fn empty_route_has_zeroed_aggregates() {
        let route = Route::from_visits(1, vec![], 0.0, 0.0);
        assert_eq!(route.avg_score, 0.0);
        assert_eq!(route.efficiency, 0.0);
    }
}
