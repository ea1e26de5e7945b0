use crate::cache::{JsonCacheExt, KeyValueCache};
use crate::db::PoiRepository;
use crate::error::Result;
use crate::models::{BoundingBox, Coordinates, Poi, TransportMode};
use h3o::{LatLng, Resolution};
use std::collections::HashMap;
use std::sync::Arc;

/// Spatial shortlist with the search radius that produced it, in meters.
pub struct SpatialShortlist {
    pub pois: Vec<Poi>,
    pub coverage_radius_m: f64,
}

/// Two-tier (cache + database) H3-bucketed spatial index.
pub struct H3Index {
    repo: Arc<dyn PoiRepository>,
    cache: Arc<dyn KeyValueCache>,
    resolution: Resolution,
    cache_ttl_seconds: u64,
}

impl H3Index {
    pub fn new(repo: Arc<dyn PoiRepository>, cache: Arc<dyn KeyValueCache>, resolution: u8, cache_ttl_seconds: u64) -> Result<Self> {
        let resolution = Resolution::try_from(resolution)
            .map_err(|e| crate::error::AppError::InvalidRequest(format!("invalid h3 resolution: {}", e)))?;
        Ok(H3Index {
            repo,
            cache,
            resolution,
            cache_ttl_seconds,
        })
    }

    fn cell_key(cell: h3o::CellIndex) -> String {
        format!("poi:h3:res{}:{}", cell.resolution() as u8, cell)
    }

    pub async fn search(&self, point: Coordinates, mode: TransportMode) -> Result<SpatialShortlist> {
        let edge_km = self.resolution.edge_length_km();
        let k = mode.k_ring();
        let coverage_radius_m = edge_km * k as f64 * 1.5 * 1.1 * 1000.0;

        let origin = LatLng::new(point.lat, point.lng)
            .map_err(|e| crate::error::AppError::InvalidRequest(format!("invalid coordinates: {}", e)))?
            .to_cell(self.resolution);

        let ring: Vec<h3o::CellIndex> = origin.grid_disk::<Vec<_>>(k);

        let mut hit_pois: Vec<Poi> = Vec::new();
        let mut miss_cells: Vec<h3o::CellIndex> = Vec::new();

        for cell in &ring {
            let key = Self::cell_key(*cell);
            match self.cache.get_json::<Vec<Poi>>(&key).await {
                Some(pois) => hit_pois.extend(pois),
                None => miss_cells.push(*cell),
            }
        }

        if !miss_cells.is_empty() {
            let centroids: Vec<Coordinates> = miss_cells
                .iter()
                .map(|c| {
                    let ll = LatLng::from(*c);
                    Coordinates::new(ll.lat(), ll.lng()).expect("h3 centroid is always valid")
                })
                .collect();

            let margin_deg = edge_km * 1.05 / 111.0;
            let bbox = BoundingBox::from_points_with_margin_deg(&centroids, margin_deg)
                .expect("miss_cells is non-empty");

            let queried = self
                .repo
                .find_in_bbox(bbox.min_lat, bbox.max_lat, bbox.min_lng, bbox.max_lng)
                .await?;

            let mut by_cell: HashMap<h3o::CellIndex, Vec<Poi>> =
                miss_cells.iter().map(|c| (*c, Vec::new())).collect();

            for poi in queried {
                if let Ok(ll) = LatLng::new(poi.coordinates.lat, poi.coordinates.lng) {
                    let cell = ll.to_cell(self.resolution);
                    if let Some(bucket) = by_cell.get_mut(&cell) {
                        bucket.push(poi);
                    }
                }
            }

            for (cell, pois) in by_cell {
                let key = Self::cell_key(cell);
                self.cache.set_json(&key, &pois, self.cache_ttl_seconds).await;
                hit_pois.extend(pois);
            }
        }

        let mut seen = std::collections::HashSet::new();
        hit_pois.retain(|p| seen.insert(p.id));

        let coverage_radius_km = coverage_radius_m / 1000.0;
        hit_pois.retain(|p| p.coordinates.distance_to(&point) <= coverage_radius_km);
        hit_pois.sort_by(|a, b| {
            a.coordinates
                .distance_to(&point)
                .partial_cmp(&b.coordinates.distance_to(&point))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(SpatialShortlist {
            pois: hit_pois,
            coverage_radius_m,
        })
    }
}
