use crate::models::{OpeningHoursEntry, Poi};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct PoiRow {
    id: Uuid,
    name: String,
    address: Option<String>,
    lat: f64,
    lng: f64,
    poi_type: String,
    poi_type_clean: Option<String>,
    main_subcategory: Option<String>,
    specialization: Option<String>,
    normalize_stars_reviews: Option<f64>,
    stay_time: Option<i32>,
    open_hours: Option<serde_json::Value>,
    deleted_at: Option<time::OffsetDateTime>,
}

impl PoiRow {
    fn into_poi(self) -> Result<Poi, sqlx::Error> {
        let opening_hours: Vec<OpeningHoursEntry> = match self.open_hours {
            Some(v) => serde_json::from_value(v).unwrap_or_default(),
            None => Vec::new(),
        };

        Ok(Poi {
            id: self.id,
            name: self.name,
            address: self.address,
            coordinates: crate::models::Coordinates::new(self.lat, self.lng)
                .map_err(|e| sqlx::Error::Decode(e.into()))?,
            poi_type: self.poi_type,
            poi_type_clean: self.poi_type_clean,
            main_subcategory: self.main_subcategory,
            specialization: self.specialization,
            popularity_score: self.normalize_stars_reviews,
            stay_time_minutes: self.stay_time.map(|s| s as u32),
            opening_hours,
            deleted_at: self.deleted_at,
        })
    }
}

const POI_COLUMNS: &str = "id, name, address, ST_Y(location::geometry) as lat, ST_X(location::geometry) as lng,
    poi_type, poi_type_clean, main_subcategory, specialization,
    normalize_stars_reviews, stay_time, open_hours, deleted_at";

/// Backing query for a single H3 cache miss: every live POI whose point
/// falls in the bounding box padded around the miss cells' centroids.
pub async fn find_pois_in_bbox(
    pool: &PgPool,
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
) -> Result<Vec<Poi>, sqlx::Error> {
    let sql = format!(
        "SELECT {POI_COLUMNS}
         FROM pois
         WHERE ST_Y(location::geometry) BETWEEN $1 AND $2
           AND ST_X(location::geometry) BETWEEN $3 AND $4
           AND deleted_at IS NULL"
    );

    let rows: Vec<PoiRow> = sqlx::query_as(&sql)
        .bind(min_lat)
        .bind(max_lat)
        .bind(min_lng)
        .bind(max_lng)
        .fetch_all(pool)
        .await?;

    rows.into_iter().map(PoiRow::into_poi).collect()
}

/// Batched lookup for the POI info store. Malformed or unknown ids are
/// silently dropped, not an error.
pub async fn find_pois_by_ids(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<Poi>, sqlx::Error> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let sql = format!(
        "SELECT {POI_COLUMNS}
         FROM pois
         WHERE id = ANY($1) AND deleted_at IS NULL"
    );

    let rows: Vec<PoiRow> = sqlx::query_as(&sql).bind(ids).fetch_all(pool).await?;
    rows.into_iter().map(PoiRow::into_poi).collect()
}

pub async fn count_pois(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM pois WHERE deleted_at IS NULL")
        .fetch_one(pool)
        .await
}
