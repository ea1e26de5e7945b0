use crate::error::Result;
use crate::models::Poi;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait PoiRepository: Send + Sync {
    async fn find_in_bbox(
        &self,
        min_lat: f64,
        max_lat: f64,
        min_lng: f64,
        max_lng: f64,
    ) -> Result<Vec<Poi>>;

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Poi>>;

    async fn count(&self) -> Result<i64>;
}

pub struct PgPoiRepository {
    pool: sqlx::PgPool,
}

impl PgPoiRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &sqlx::PgPool {
        &self.pool
    }
}

#[async_trait]
impl PoiRepository for PgPoiRepository {
    async fn find_in_bbox(
        &self,
        min_lat: f64,
        max_lat: f64,
        min_lng: f64,
        max_lng: f64,
    ) -> Result<Vec<Poi>> {
        Ok(super::poi_queries::find_pois_in_bbox(&self.pool, min_lat, max_lat, min_lng, max_lng).await?)
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Poi>> {
        Ok(super::poi_queries::find_pois_by_ids(&self.pool, ids).await?)
    }

    async fn count(&self) -> Result<i64> {
        Ok(super::poi_queries::count_pois(&self.pool).await?)
    }
}
