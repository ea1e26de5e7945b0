use serde::Serialize;
use std::time::Instant;

/// Per-stage latency breakdown attached to every success response, so a
/// regression in one stage doesn't require extra instrumentation to locate.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Timing {
    pub spatial_ms: u64,
    pub embedding_ms: u64,
    pub vector_search_ms: u64,
    pub hydration_ms: u64,
    pub route_building_ms: u64,
}

pub struct Stopwatch(Instant);

impl Stopwatch {
    pub fn start() -> Self {
        Stopwatch(Instant::now())
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.0.elapsed().as_millis() as u64
    }
}
