pub mod cache_entry;
pub mod coordinates;
pub mod distance;
pub mod geo;
pub mod poi;
pub mod route;
pub mod semantic;
pub mod transport;

pub use cache_entry::{CachedRoute, CachedRoutePoi, RouteCacheEntry};
pub use coordinates::{bearing_difference, build_distance_matrix, Coordinates};
pub use distance::{DistanceKm, DistanceMeters, RadiusMeters};
pub use geo::BoundingBox;
pub use poi::{OpeningHoursEntry, Poi, TimeRange};
pub use route::{
    ConfirmReplacePoiRequest, ConfirmReplacePoiResponse, ReplacePoiRequest, ReplacePoiResponse,
    Route, RouteRequest, RouteResponse, RouteVisit,
};
pub use semantic::SemanticHit;
pub use transport::TransportMode;
