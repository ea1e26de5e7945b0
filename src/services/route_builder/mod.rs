pub mod duration;
pub mod target;

use crate::constants::{
    FIRST_POI_WEIGHTS, FOOD_CATEGORIES, LAST_POI_RADIUS_THRESHOLDS, LAST_POI_WEIGHTS_CIRCULAR,
    LAST_POI_WEIGHTS_ZIGZAG, MIDDLE_POI_WEIGHTS_CIRCULAR, MIDDLE_POI_WEIGHTS_ZIGZAG, MIN_ROUTE_DIVERSITY,
    ScoreWeights,
};
use crate::models::{bearing_difference, build_distance_matrix, Coordinates, Poi, Route, RouteVisit, TransportMode};
use crate::services::orchestrator::RankedPoi;
use crate::time_utils::{has_enough_time_to_stay, is_open_at};
use std::collections::HashSet;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

pub use duration::DurationModeStrategy;
pub use target::TargetModeStrategy;

/// A shortlist entry carrying the semantic category the orchestrator assigned it.
#[derive(Clone)]
pub struct ShortlistPoi {
    pub poi: Poi,
    pub similarity: f64,
    pub category: String,
}

impl From<RankedPoi> for ShortlistPoi {
    fn from(r: RankedPoi) -> Self {
        ShortlistPoi {
            poi: r.poi,
            similarity: r.similarity,
            category: r.category,
        }
    }
}

fn is_food(category: &str) -> bool {
    FOOD_CATEGORIES.iter().any(|c| c.eq_ignore_ascii_case(category))
}

fn is_restaurant(category: &str) -> bool {
    category.eq_ignore_ascii_case("Restaurant")
}

/// Whether the previous and candidate stop are both food and match on all
/// three category tiers — `None == None` counts as a match, matching the
/// conservative upstream rule.
fn is_food_duplicate(prev: &Poi, prev_category: &str, candidate: &Poi, candidate_category: &str) -> bool {
    if !is_food(prev_category) || !is_food(candidate_category) {
        return false;
    }
    prev.poi_type_clean == candidate.poi_type_clean
        && prev.main_subcategory == candidate.main_subcategory
        && prev.specialization == candidate.specialization
}

pub struct MealWindows {
    pub lunch: Option<(OffsetDateTime, OffsetDateTime)>,
    pub dinner: Option<(OffsetDateTime, OffsetDateTime)>,
}

pub struct MealAnalysis {
    pub has_cafe_and_bakery: bool,
    pub has_restaurant: bool,
    pub needs_lunch_restaurant: bool,
    pub needs_dinner_restaurant: bool,
    pub should_insert_restaurant_for_meal: bool,
    pub windows: MealWindows,
}

impl MealAnalysis {
    pub fn compute(shortlist: &[ShortlistPoi], current_time: Option<OffsetDateTime>, max_time_minutes: u32) -> Self {
        let has_cafe_and_bakery = shortlist.iter().any(|p| p.category.eq_ignore_ascii_case("Cafe & Bakery"));
        let has_restaurant = shortlist.iter().any(|p| is_restaurant(&p.category));

        let (needs_lunch_restaurant, needs_dinner_restaurant, windows) = match current_time {
            Some(start) => {
                let needs_lunch = crate::time_utils::needs_restaurant_for_window(start, max_time_minutes)
                    && window_overlap_minutes(start, max_time_minutes, crate::constants::LUNCH_START_MINUTE, crate::constants::LUNCH_END_MINUTE) >= crate::constants::MEAL_OVERLAP_THRESHOLD_MINUTES;
                let needs_dinner = window_overlap_minutes(start, max_time_minutes, crate::constants::DINNER_START_MINUTE, crate::constants::DINNER_END_MINUTE) >= crate::constants::MEAL_OVERLAP_THRESHOLD_MINUTES;

                let day_start = start.replace_hour(0).unwrap().replace_minute(0).unwrap().replace_second(0).unwrap();
                let lunch = needs_lunch.then(|| {
                    (
                        day_start + Duration::minutes(crate::constants::LUNCH_START_MINUTE as i64),
                        day_start + Duration::minutes(crate::constants::LUNCH_END_MINUTE as i64),
                    )
                });
                let dinner = needs_dinner.then(|| {
                    (
                        day_start + Duration::minutes(crate::constants::DINNER_START_MINUTE as i64),
                        day_start + Duration::minutes(crate::constants::DINNER_END_MINUTE as i64),
                    )
                });
                (needs_lunch, needs_dinner, MealWindows { lunch, dinner })
            }
            None => (
                false,
                false,
                MealWindows {
                    lunch: None,
                    dinner: None,
                },
            ),
        };

        let should_insert_restaurant_for_meal =
            has_restaurant && !has_cafe_and_bakery && (needs_lunch_restaurant || needs_dinner_restaurant);

        MealAnalysis {
            has_cafe_and_bakery,
            has_restaurant,
            needs_lunch_restaurant,
            needs_dinner_restaurant,
            should_insert_restaurant_for_meal,
            windows,
        }
    }
}

fn window_overlap_minutes(start: OffsetDateTime, budget_minutes: u32, window_start_minute: u32, window_end_minute: u32) -> i64 {
    let day_start = start.replace_hour(0).unwrap().replace_minute(0).unwrap().replace_second(0).unwrap();
    let window_start = day_start + Duration::minutes(window_start_minute as i64);
    let window_end = day_start + Duration::minutes(window_end_minute as i64);
    let budget_end = start + Duration::minutes(budget_minutes as i64);
    let overlap_start = start.max(window_start);
    let overlap_end = budget_end.min(window_end);
    (overlap_end - overlap_start).whole_minutes().max(0)
}

fn distance_score(distance_km: f64, max_distance: f64) -> f64 {
    if max_distance > 0.0 {
        1.0 - distance_km / max_distance
    } else {
        0.0
    }
}

fn bearing_score(bearing_diff: f64, circular: bool) -> f64 {
    if circular {
        (1.0 - (bearing_diff - 90.0).abs() / 90.0).max(0.0)
    } else {
        1.0 - bearing_diff / 180.0
    }
}

fn combined_score(
    weights: &ScoreWeights,
    distance_km: f64,
    max_distance: f64,
    similarity: f64,
    rating: f64,
    bearing_diff: Option<f64>,
    circular: bool,
) -> f64 {
    let bearing_component = bearing_diff
        .map(|d| bearing_score(d, circular))
        .unwrap_or(crate::constants::DEFAULT_BEARING_SCORE);
    weights.distance * distance_score(distance_km, max_distance)
        + weights.similarity * similarity
        + weights.rating * rating
        + weights.bearing * bearing_component
}

/// Current slot's required category, honoring meal forcing.
enum RequiredCategory {
    Any,
    Only(String),
    ExcludeRestaurant,
}

pub(crate) struct BuildState<'a> {
    shortlist: &'a [ShortlistPoi],
    dm: &'a [Vec<f64>],
    user: Coordinates,
    mode: TransportMode,
    max_time_minutes: u32,
    current_time: Option<OffsetDateTime>,
    circular_routing: bool,
    max_distance: f64,
    meal: &'a MealAnalysis,
    all_categories: Vec<String>,

    visited: HashSet<usize>,
    route: Vec<(usize, f64)>,
    category_sequence: Vec<String>,
    current_pos_idx: usize, // 0 = user, j+1 = shortlist[j]
    prev_bearing: Option<f64>,
    total_travel_minutes: f64,
    total_stay_minutes: f64,
    lunch_filled: bool,
    dinner_filled: bool,
}

impl<'a> BuildState<'a> {
    fn current_coords(&self) -> Coordinates {
        if self.current_pos_idx == 0 {
            self.user
        } else {
            self.shortlist[self.current_pos_idx - 1].poi.coordinates
        }
    }

    fn elapsed_minutes(&self) -> f64 {
        self.total_travel_minutes + self.total_stay_minutes
    }

    fn running_clock(&self) -> Option<OffsetDateTime> {
        self.current_time.map(|t| t + Duration::minutes(self.elapsed_minutes().round() as i64))
    }

    fn required_category(&self) -> RequiredCategory {
        if self.meal.should_insert_restaurant_for_meal {
            if self.lunch_filled && self.dinner_filled {
                return RequiredCategory::ExcludeRestaurant;
            }
            if let Some(clock) = self.running_clock() {
                let in_lunch = !self.lunch_filled
                    && self.meal.windows.lunch.map(|(s, e)| clock >= s && clock <= e).unwrap_or(false);
                let in_dinner = !self.dinner_filled
                    && self.meal.windows.dinner.map(|(s, e)| clock >= s && clock <= e).unwrap_or(false);
                if in_lunch || in_dinner {
                    return RequiredCategory::Only("Restaurant".to_string());
                }
            }
        }

        if let Some(last) = self.category_sequence.last() {
            let pos = self.all_categories.iter().position(|c| c == last).unwrap_or(usize::MAX);
            let next_idx = if pos == usize::MAX || self.all_categories.is_empty() {
                0
            } else {
                (pos + 1) % self.all_categories.len()
            };
            self.all_categories.get(next_idx).map(|c| RequiredCategory::Only(c.clone())).unwrap_or(RequiredCategory::Any)
        } else {
            RequiredCategory::Any
        }
    }

    fn mark_meal_filled(&mut self, arrival: Option<OffsetDateTime>) {
        if let Some(arrival) = arrival {
            if self.meal.windows.lunch.map(|(s, e)| arrival >= s && arrival <= e).unwrap_or(false) {
                self.lunch_filled = true;
            }
            if self.meal.windows.dinner.map(|(s, e)| arrival >= s && arrival <= e).unwrap_or(false) {
                self.dinner_filled = true;
            }
        }
    }

    /// Evaluate one candidate: returns `(score, arrival, travel_minutes)` if
    /// feasible, i.e. visiting it and still returning to `user` fits the
    /// remaining time budget.
    fn evaluate_candidate(&self, j: usize, weights: &ScoreWeights) -> Option<(f64, Option<OffsetDateTime>, f64)> {
        if self.visited.contains(&j) {
            return None;
        }
        let candidate = &self.shortlist[j];
        let from = self.current_coords();
        let distance_km = self.dm[self.current_pos_idx][j + 1];
        let travel_minutes = self.mode.travel_minutes(distance_km);
        let stay_minutes = candidate.poi.stay_time() as f64;
        let return_distance_km = self.dm[0][j + 1];
        let return_minutes = self.mode.travel_minutes(return_distance_km);

        let total_if_added = self.total_travel_minutes + travel_minutes + self.total_stay_minutes + stay_minutes + return_minutes;
        if total_if_added > self.max_time_minutes as f64 {
            return None;
        }

        let arrival = self
            .current_time
            .map(|t| t + Duration::minutes((self.elapsed_minutes() + travel_minutes).round() as i64));

        if let Some(arrival) = arrival {
            if !is_open_at(&candidate.poi.opening_hours, arrival) {
                return None;
            }
            if !has_enough_time_to_stay(&candidate.poi.opening_hours, arrival, candidate.poi.stay_time()) {
                return None;
            }
        }

        let bearing_diff = self.prev_bearing.map(|prev_bearing| {
            let candidate_bearing = from.bearing_to(&candidate.poi.coordinates);
            bearing_difference(prev_bearing, candidate_bearing)
        });

        let score = combined_score(
            weights,
            distance_km,
            self.max_distance,
            candidate.similarity,
            candidate.poi.rating(),
            bearing_diff,
            self.circular_routing,
        );

        Some((score, arrival, travel_minutes))
    }

    fn push_stop(&mut self, j: usize, score: f64, arrival: Option<OffsetDateTime>, travel_minutes: f64) {
        let candidate = &self.shortlist[j];
        self.mark_meal_filled(arrival);
        self.visited.insert(j);
        self.category_sequence.push(candidate.category.clone());
        self.total_travel_minutes += travel_minutes;
        self.total_stay_minutes += candidate.poi.stay_time() as f64;
        let from = self.current_coords();
        self.prev_bearing = Some(from.bearing_to(&candidate.poi.coordinates));
        self.current_pos_idx = j + 1;
        self.route.push((j, score));
    }
}

/// Selects the one-at-a-time middle stop: pass one restricted to the
/// required category, pass two (fallback) considering any category.
fn select_middle(state: &BuildState, weights: &ScoreWeights) -> Option<(usize, f64, Option<OffsetDateTime>, f64)> {
    let required = state.required_category();

    let candidate_allowed = |j: usize| -> bool {
        let cat = &state.shortlist[j].category;
        match &required {
            RequiredCategory::Only(c) => cat.eq_ignore_ascii_case(c),
            RequiredCategory::ExcludeRestaurant => !is_restaurant(cat),
            RequiredCategory::Any => true,
        }
    };

    let food_ok = |j: usize| -> bool {
        match state.route.last() {
            Some((prev_idx, _)) => {
                let prev = &state.shortlist[*prev_idx];
                !is_food_duplicate(&prev.poi, &prev.category, &state.shortlist[j].poi, &state.shortlist[j].category)
            }
            None => true,
        }
    };

    let mut best: Option<(usize, f64, Option<OffsetDateTime>, f64)> = None;
    for j in 0..state.shortlist.len() {
        if state.visited.contains(&j) || !candidate_allowed(j) || !food_ok(j) {
            continue;
        }
        if let Some((score, arrival, travel)) = state.evaluate_candidate(j, weights) {
            if best.as_ref().map(|(_, best_score, _, _)| score > *best_score).unwrap_or(true) {
                best = Some((j, score, arrival, travel));
            }
        }
    }

    if best.is_some() {
        return best;
    }

    // Pass two: ignore category requirement, still honor food-duplicate and
    // restaurant-exclusion.
    for j in 0..state.shortlist.len() {
        if state.visited.contains(&j) || !food_ok(j) {
            continue;
        }
        if matches!(required, RequiredCategory::ExcludeRestaurant) && is_restaurant(&state.shortlist[j].category) {
            continue;
        }
        if let Some((score, arrival, travel)) = state.evaluate_candidate(j, weights) {
            if best.as_ref().map(|(_, best_score, _, _)| score > *best_score).unwrap_or(true) {
                best = Some((j, score, arrival, travel));
            }
        }
    }

    best
}

fn middle_weights(circular: bool) -> &'static ScoreWeights {
    if circular {
        &MIDDLE_POI_WEIGHTS_CIRCULAR
    } else {
        &MIDDLE_POI_WEIGHTS_ZIGZAG
    }
}

fn last_weights(circular: bool) -> &'static ScoreWeights {
    if circular {
        &LAST_POI_WEIGHTS_CIRCULAR
    } else {
        &LAST_POI_WEIGHTS_ZIGZAG
    }
}

/// Decides, after each middle-loop iteration, whether to attempt another one.
pub trait MiddleLoopStrategy {
    fn should_continue(&self, state: &BuildState, iterations_done: u32) -> bool;

    /// Pre-build gate checked once per shortlist, before any route is
    /// attempted. Target mode has no such gate; duration mode refuses to
    /// build when every category has at most one POI, since it can't
    /// alternate categories long enough to justify an open-ended loop.
    fn can_build(&self, _shortlist: &[ShortlistPoi]) -> bool {
        true
    }
}

struct BuildResult {
    visits: Vec<RouteVisit>,
    travel_minutes: f64,
    stay_minutes: f64,
}

fn select_first(
    shortlist: &[ShortlistPoi],
    dm: &[Vec<f64>],
    _user: Coordinates,
    max_distance: f64,
    current_time: Option<OffsetDateTime>,
    meal: &MealAnalysis,
) -> Vec<(usize, f64)> {
    let mut scored: Vec<(usize, f64)> = Vec::new();
    for (j, candidate) in shortlist.iter().enumerate() {
        let distance_km = dm[0][j + 1];

        if let Some(t) = current_time {
            if !is_open_at(&candidate.poi.opening_hours, t) {
                continue;
            }
        }

        if meal.should_insert_restaurant_for_meal {
            if let Some(t) = current_time {
                let in_lunch = meal.windows.lunch.map(|(s, e)| t >= s && t <= e).unwrap_or(false);
                let in_dinner = meal.windows.dinner.map(|(s, e)| t >= s && t <= e).unwrap_or(false);
                let overlapping_not_entered = meal
                    .windows
                    .lunch
                    .map(|(s, _)| t < s)
                    .unwrap_or(false)
                    || meal.windows.dinner.map(|(s, _)| t < s).unwrap_or(false);

                if (in_lunch || in_dinner) && !is_restaurant(&candidate.category) {
                    continue;
                }
                if !in_lunch && !in_dinner && overlapping_not_entered && is_restaurant(&candidate.category) {
                    continue;
                }
            }
        }

        let score = combined_score(
            &FIRST_POI_WEIGHTS,
            distance_km,
            max_distance,
            candidate.similarity,
            candidate.poi.rating(),
            None,
            false,
        );
        scored.push((j, score));
    }

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then_with(|| a.0.cmp(&b.0))
    });
    scored
}

fn select_last(state: &BuildState, max_radius: f64) -> Option<(usize, f64, Option<OffsetDateTime>, f64)> {
    for threshold in LAST_POI_RADIUS_THRESHOLDS {
        let radius = threshold * max_radius;
        let mut best: Option<(usize, f64, Option<OffsetDateTime>, f64)> = None;

        for j in 0..state.shortlist.len() {
            if state.visited.contains(&j) {
                continue;
            }
            if state.dm[0][j + 1] > radius {
                continue;
            }

            let cat = &state.shortlist[j].category;
            if is_restaurant(cat) {
                if let Some(clock) = state.running_clock() {
                    let in_lunch = !state.lunch_filled
                        && state.meal.windows.lunch.map(|(s, e)| clock >= s && clock <= e).unwrap_or(false);
                    let in_dinner = !state.dinner_filled
                        && state.meal.windows.dinner.map(|(s, e)| clock >= s && clock <= e).unwrap_or(false);
                    if state.meal.should_insert_restaurant_for_meal && !in_lunch && !in_dinner {
                        continue;
                    }
                } else if state.meal.should_insert_restaurant_for_meal {
                    continue;
                }
            }

            if let Some((score, arrival, travel)) = state.evaluate_candidate(j, last_weights(state.circular_routing)) {
                if best.as_ref().map(|(_, best_score, _, _)| score > *best_score).unwrap_or(true) {
                    best = Some((j, score, arrival, travel));
                }
            }
        }

        if best.is_some() {
            return best;
        }
    }
    None
}

/// Builds a single route seeded at `first_idx`, or `None` if infeasible.
fn build_one_route(
    shortlist: &[ShortlistPoi],
    dm: &[Vec<f64>],
    user: Coordinates,
    mode: TransportMode,
    max_time_minutes: u32,
    current_time: Option<OffsetDateTime>,
    circular_routing: bool,
    meal: &MealAnalysis,
    all_categories: &[String],
    max_distance: f64,
    max_radius: f64,
    first_idx: usize,
    strategy: &dyn MiddleLoopStrategy,
) -> Option<BuildResult> {
    let first = &shortlist[first_idx];
    let travel_minutes = mode.travel_minutes(dm[0][first_idx + 1]);
    let arrival = current_time.map(|t| t + Duration::minutes(travel_minutes.round() as i64));
    if let Some(arrival) = arrival {
        if !has_enough_time_to_stay(&first.poi.opening_hours, arrival, first.poi.stay_time()) {
            return None;
        }
    }

    let mut state = BuildState {
        shortlist,
        dm,
        user,
        mode,
        max_time_minutes,
        current_time,
        circular_routing,
        max_distance,
        meal,
        all_categories: all_categories.to_vec(),
        visited: HashSet::new(),
        route: Vec::new(),
        category_sequence: Vec::new(),
        current_pos_idx: 0,
        prev_bearing: None,
        total_travel_minutes: 0.0,
        total_stay_minutes: 0.0,
        lunch_filled: false,
        dinner_filled: false,
    };

    let first_score = combined_score(&FIRST_POI_WEIGHTS, dm[0][first_idx + 1], max_distance, first.similarity, first.poi.rating(), None, false);
    state.push_stop(first_idx, first_score, arrival, travel_minutes);

    let mut iterations = 0;
    while strategy.should_continue(&state, iterations) {
        let weights = middle_weights(circular_routing);
        match select_middle(&state, weights) {
            Some((j, score, arrival, travel)) => {
                state.push_stop(j, score, arrival, travel);
                iterations += 1;
            }
            None => break,
        }
    }

    let last = select_last(&state, max_radius)?;
    state.push_stop(last.0, last.1, last.2, last.3);

    let return_minutes = mode.travel_minutes(dm[0][state.current_pos_idx]);
    if state.total_travel_minutes + return_minutes + state.total_stay_minutes > max_time_minutes as f64 {
        return None;
    }
    state.total_travel_minutes += return_minutes;

    let visits = state
        .route
        .iter()
        .map(|(j, score)| {
            let candidate = &shortlist[*j];
            RouteVisit {
                poi_id: candidate.poi.id,
                name: candidate.poi.name.clone(),
                category: candidate.category.clone(),
                combined_score: *score,
                travel_time_minutes: 0.0, // filled in post-formatting below
                stay_time_minutes: candidate.poi.stay_time(),
                arrival_time: None,
                opening_hours_today: None,
            }
        })
        .collect();

    Some(BuildResult {
        visits,
        travel_minutes: state.total_travel_minutes,
        stay_minutes: state.total_stay_minutes,
    })
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Builds up to `max_routes` diverse routes.
#[allow(clippy::too_many_arguments)]
pub fn build_routes(
    shortlist: &[ShortlistPoi],
    user: Coordinates,
    mode: TransportMode,
    max_time_minutes: u32,
    max_routes: u32,
    current_time: Option<OffsetDateTime>,
    circular_routing: bool,
    strategy: &dyn MiddleLoopStrategy,
) -> Vec<Route> {
    if shortlist.is_empty() || !strategy.can_build(shortlist) {
        return Vec::new();
    }

    let coords: Vec<Coordinates> = shortlist.iter().map(|p| p.poi.coordinates).collect();
    let dm = build_distance_matrix(&user, &coords);
    let max_distance = dm[0][1..].iter().cloned().fold(0.0_f64, f64::max);
    let max_radius = max_distance;

    let mut all_categories: Vec<String> = Vec::new();
    for p in shortlist {
        if !all_categories.contains(&p.category) {
            all_categories.push(p.category.clone());
        }
    }

    let meal = MealAnalysis::compute(shortlist, current_time, max_time_minutes);
    let first_candidates = select_first(shortlist, &dm, user, max_distance, current_time, &meal);

    let mut accepted: Vec<HashSet<Uuid>> = Vec::new();
    let mut routes = Vec::new();
    let mut route_id = 1;

    for (first_idx, _score) in first_candidates {
        if routes.len() as u32 >= max_routes {
            break;
        }
        if let Some(result) = build_one_route(
            shortlist,
            &dm,
            user,
            mode,
            max_time_minutes,
            current_time,
            circular_routing,
            &meal,
            &all_categories,
            max_distance,
            max_radius,
            first_idx,
            strategy,
        ) {
            let ids: HashSet<Uuid> = result.visits.iter().map(|v| v.poi_id).collect();
            let diverse = accepted.iter().all(|prev| prev.symmetric_difference(&ids).count() >= MIN_ROUTE_DIVERSITY);
            if diverse {
                accepted.push(ids);
                routes.push(Route::from_visits(route_id, attach_timing(result.visits, current_time, mode, &dm, shortlist), result.travel_minutes, result.stay_minutes));
                route_id += 1;
            }
        }
    }

    routes
}

/// Post-formatting pass: attaches per-stop travel time and, when a starting
/// datetime was supplied, arrival time and that weekday's opening hours.
fn attach_timing(
    mut visits: Vec<RouteVisit>,
    current_time: Option<OffsetDateTime>,
    mode: TransportMode,
    dm: &[Vec<f64>],
    shortlist: &[ShortlistPoi],
) -> Vec<RouteVisit> {
    let index_of = |poi_id: Uuid| shortlist.iter().position(|p| p.poi.id == poi_id).expect("visit poi present in shortlist");

    let mut clock = current_time;
    let mut prev_idx = 0usize; // 0 = user
    for visit in visits.iter_mut() {
        let j = index_of(visit.poi_id);
        let travel_km = dm[prev_idx][j + 1];
        let travel_minutes = mode.travel_minutes(travel_km);
        visit.travel_time_minutes = round1(travel_minutes);

        if let Some(t) = clock {
            let arrival = t + Duration::minutes(travel_minutes.round() as i64);
            visit.opening_hours_today = crate::time_utils::day_entry(&shortlist[j].poi.opening_hours, arrival);
            visit.arrival_time = Some(arrival);
            clock = Some(arrival + Duration::minutes(visit.stay_time_minutes as i64));
        }
        prev_idx = j + 1;
    }
    visits
}
