use super::{BuildState, MiddleLoopStrategy};

/// Fixed-count planner: inserts exactly `target_places - 2` middle stops
/// (the first and last stops are selected separately), regardless of
/// remaining time budget — infeasible candidates simply end the loop early
/// via [`select_middle`](super::select_middle) returning `None`.
pub struct TargetModeStrategy {
    pub middle_stops: u32,
}

impl TargetModeStrategy {
    pub fn new(target_places: u32) -> Self {
        TargetModeStrategy {
            middle_stops: target_places.saturating_sub(2),
        }
    }
}

impl MiddleLoopStrategy for TargetModeStrategy {
    fn should_continue(&self, _state: &BuildState, iterations_done: u32) -> bool {
        iterations_done < self.middle_stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_after_target_minus_two_middle_inserts() {
        let strategy = TargetModeStrategy::new(5);
        assert_eq!(strategy.middle_stops, 3);
    }

    #[test]
    fn target_of_two_has_no_middle_stops() {
        let strategy = TargetModeStrategy::new(2);
        assert_eq!(strategy.middle_stops, 0);
    }
}
