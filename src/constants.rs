// Application-wide constants
// This module centralizes all magic numbers and hardcoded values for better maintainability,
// pinned from the reference route-planner's configuration so they live in exactly one place.

// Server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "8080";

// Cache TTL values (in seconds)
pub const DEFAULT_H3_CACHE_TTL_SECONDS: u64 = 604_800; // 7 days
pub const DEFAULT_POI_CACHE_TTL_SECONDS: u64 = 604_800; // 7 days
pub const DEFAULT_ROUTE_CACHE_TTL_SECONDS: u64 = 3_600; // 1 hour, per-user route cache entry

// H3 spatial index
pub const DEFAULT_H3_RESOLUTION: u8 = 9;

// In-memory cache defaults
pub const DEFAULT_MEMORY_CACHE_MAX_ENTRIES: u64 = 10_000;

// POI defaults
pub const DEFAULT_STAY_TIME_MINUTES: u32 = 30;
pub const DEFAULT_RATING: f64 = 0.5;
pub const DEFAULT_BEARING_SCORE: f64 = 0.5;

pub const SIMILARITY_THRESHOLD: f64 = 0.8;

pub const FOOD_CATEGORIES: [&str; 3] = ["Restaurant", "Bar", "Cafe & Bakery"];

pub const LAST_POI_RADIUS_THRESHOLDS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// One weighted-sum scoring profile for a route-builder position (first / middle / last).
pub struct ScoreWeights {
    pub distance: f64,
    pub similarity: f64,
    pub rating: f64,
    pub bearing: f64,
}

pub const FIRST_POI_WEIGHTS: ScoreWeights = ScoreWeights {
    distance: 0.5,
    similarity: 0.1,
    rating: 0.4,
    bearing: 0.0,
};

pub const LAST_POI_WEIGHTS_ZIGZAG: ScoreWeights = ScoreWeights {
    distance: 0.6,
    similarity: 0.1,
    rating: 0.3,
    bearing: 0.0,
};

pub const LAST_POI_WEIGHTS_CIRCULAR: ScoreWeights = ScoreWeights {
    distance: 0.4,
    similarity: 0.1,
    rating: 0.2,
    bearing: 0.3,
};

pub const MIDDLE_POI_WEIGHTS_ZIGZAG: ScoreWeights = ScoreWeights {
    distance: 0.4,
    similarity: 0.1,
    rating: 0.25,
    bearing: 0.25,
};

pub const MIDDLE_POI_WEIGHTS_CIRCULAR: ScoreWeights = ScoreWeights {
    distance: 0.3,
    similarity: 0.1,
    rating: 0.2,
    bearing: 0.4,
};

// Meal windows: fixed clock windows, independent of weekday.
pub const LUNCH_START_MINUTE: u32 = 11 * 60;
pub const LUNCH_END_MINUTE: u32 = 14 * 60;
pub const DINNER_START_MINUTE: u32 = 17 * 60;
pub const DINNER_END_MINUTE: u32 = 20 * 60;

/// Minimum overlap (minutes) between a route's time span and a meal window
/// before the planner is required to insert a Restaurant.
pub const MEAL_OVERLAP_THRESHOLD_MINUTES: i64 = 60;

/// Duration-mode middle loop stops inserting once remaining budget drops
/// below this fraction of the total budget.
pub const DURATION_MODE_REMAINING_BUDGET_FLOOR: f64 = 0.3;

pub const DEFAULT_MAX_TIME_MINUTES: u32 = 180;
pub const DEFAULT_TARGET_PLACES: u32 = 5;
pub const DEFAULT_MAX_ROUTES: u32 = 3;
pub const DEFAULT_TOP_K_SEMANTIC: u32 = 10;

/// Minimum POI-id-set symmetric difference required for an alternative route
/// to be accepted alongside an already-kept one.
pub const MIN_ROUTE_DIVERSITY: usize = 2;

pub const MAX_REPLACEMENT_CANDIDATES: usize = 3;
