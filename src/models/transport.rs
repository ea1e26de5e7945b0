use serde::{Deserialize, Serialize};

/// How the user is getting between POIs. Drives both the H3 k-ring search
/// radius and the travel-time estimate used by the route builder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransportMode {
    Walking,
    Bicycling,
    Transit,
    Flexible,
    Driving,
}

impl TransportMode {
    /// Number of H3 rings to expand around the query cell.
    pub fn k_ring(&self) -> u32 {
        match self {
            TransportMode::Walking => 1,
            TransportMode::Bicycling => 2,
            TransportMode::Transit => 2,
            TransportMode::Flexible => 2,
            TransportMode::Driving => 3,
        }
    }

    /// Assumed average speed in km/h, used to convert distance into travel time.
    pub fn speed_kmh(&self) -> f64 {
        match self {
            TransportMode::Walking => 5.0,
            TransportMode::Bicycling => 15.0,
            TransportMode::Transit => 20.0,
            TransportMode::Flexible => 30.0,
            TransportMode::Driving => 25.0,
        }
    }

    /// Minutes to cover `distance_km` at this mode's assumed speed.
    pub fn travel_minutes(&self, distance_km: f64) -> f64 {
        (distance_km / self.speed_kmh()) * 60.0
    }
}
