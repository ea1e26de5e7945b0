use crate::models::Coordinates;

/// Axis-aligned bounding box in geographic coordinates.
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Envelope of `points`, padded by `margin_deg` degrees in both axes.
    ///
    /// Used to build the single range query over the miss set of an H3 cache
    /// lookup: the margin is expressed directly in degrees (not meters) so
    /// no latitude correction is applied, matching the source formula
    /// `edge_len(R) * 1.05 / 111` km-per-degree.
    pub fn from_points_with_margin_deg(points: &[Coordinates], margin_deg: f64) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut min_lat = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        let mut min_lng = f64::INFINITY;
        let mut max_lng = f64::NEG_INFINITY;

        for p in points {
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
            min_lng = min_lng.min(p.lng);
            max_lng = max_lng.max(p.lng);
        }

        Some(BoundingBox {
            min_lat: min_lat - margin_deg,
            max_lat: max_lat + margin_deg,
            min_lng: min_lng - margin_deg,
            max_lng: max_lng + margin_deg,
        })
    }
}
