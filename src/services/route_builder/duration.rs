use super::{BuildState, MiddleLoopStrategy, ShortlistPoi};
use crate::constants::DURATION_MODE_REMAINING_BUDGET_FLOOR;
use std::collections::HashMap;

/// Time-budget planner: keeps inserting middle stops until the fraction of
/// the time budget still remaining drops below
/// [`DURATION_MODE_REMAINING_BUDGET_FLOOR`], reserving that slice for the
/// last stop and the return leg.
pub struct DurationModeStrategy {
    pub max_time_minutes: u32,
}

impl DurationModeStrategy {
    pub fn new(max_time_minutes: u32) -> Self {
        DurationModeStrategy { max_time_minutes }
    }
}

impl MiddleLoopStrategy for DurationModeStrategy {
    fn should_continue(&self, state: &BuildState, _iterations_done: u32) -> bool {
        if self.max_time_minutes == 0 {
            return false;
        }
        let remaining_fraction = 1.0 - state.elapsed_minutes() / self.max_time_minutes as f64;
        remaining_fraction > DURATION_MODE_REMAINING_BUDGET_FLOOR
    }

    /// Refuses to build when no category has more than one POI in the
    /// shortlist — there isn't enough diversity to sustain the open-ended
    /// category-alternation loop duration mode relies on.
    fn can_build(&self, shortlist: &[ShortlistPoi]) -> bool {
        let mut category_counts: HashMap<&str, usize> = HashMap::new();
        for p in shortlist {
            *category_counts.entry(p.category.as_str()).or_insert(0) += 1;
        }
        category_counts.values().copied().max().unwrap_or(0) > 1
    }
}
