use crate::constants::DEFAULT_STAY_TIME_MINUTES;
use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One opening-window on a single day, e.g. `"09:00".."18:00"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

/// Opening hours for one weekday, keyed by English day name (`"Monday"`..`"Sunday"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpeningHoursEntry {
    pub day: String,
    pub ranges: Vec<TimeRange>,
}

/// A point of interest.
///
/// Categories are free-form strings rather than a closed enum: they are
/// produced upstream by an enrichment pipeline this crate does not own, and
/// the orchestrator and route builder only ever compare them for equality or
/// pass them through to the semantic search client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poi {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub coordinates: Coordinates,

    pub poi_type: String,
    pub poi_type_clean: Option<String>,
    pub main_subcategory: Option<String>,
    pub specialization: Option<String>,

    /// Normalized rating in `[0.0, 1.0]`. Absent when the source never rated the place.
    pub popularity_score: Option<f64>,

    pub stay_time_minutes: Option<u32>,
    pub opening_hours: Vec<OpeningHoursEntry>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<time::OffsetDateTime>,
}

impl Poi {
    /// Rating used in scoring: the POI's own score, or the route builder's default.
    pub fn rating(&self) -> f64 {
        self.popularity_score.unwrap_or(crate::constants::DEFAULT_RATING)
    }

    /// Visit duration used in scheduling: the POI's own estimate, or the shared default.
    pub fn stay_time(&self) -> u32 {
        self.stay_time_minutes.unwrap_or(DEFAULT_STAY_TIME_MINUTES)
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Best-effort category label for a POI with no enrichment data at all.
    pub fn category_label(&self) -> &str {
        self.main_subcategory
            .as_deref()
            .or(self.poi_type_clean.as_deref())
            .unwrap_or(self.poi_type.as_str())
    }

    /// True when `category` matches any of this POI's category fields, case-insensitively.
    pub fn matches_category(&self, category: &str) -> bool {
        let category = category.to_lowercase();
        [
            Some(self.poi_type.as_str()),
            self.poi_type_clean.as_deref(),
            self.main_subcategory.as_deref(),
            self.specialization.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|c| c.to_lowercase() == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poi(main_subcategory: Option<&str>) -> Poi {
        Poi {
            id: Uuid::new_v4(),
            name: "Le Petit Bistro".to_string(),
            address: None,
            coordinates: Coordinates::new(48.8566, 2.3522).unwrap(),
            poi_type: "Restaurant".to_string(),
            poi_type_clean: Some("restaurant".to_string()),
            main_subcategory: main_subcategory.map(|s| s.to_string()),
            specialization: None,
            popularity_score: None,
            stay_time_minutes: None,
            opening_hours: vec![],
            deleted_at: None,
        }
    }

    #[test]
    fn defaults_apply_when_fields_absent() {
        let p = poi(None);
        assert_eq!(p.rating(), crate::constants::DEFAULT_RATING);
        assert_eq!(p.stay_time(), DEFAULT_STAY_TIME_MINUTES);
    }

    #[test]
    fn matches_category_is_case_insensitive_across_fields() {
        let p = poi(Some("French Bistro"));
        assert!(p.matches_category("restaurant"));
        assert!(p.matches_category("FRENCH BISTRO"));
        assert!(!p.matches_category("museum"));
    }

    #[test]
    fn category_label_prefers_main_subcategory() {
        assert_eq!(poi(Some("French Bistro")).category_label(), "French Bistro");
        assert_eq!(poi(None).category_label(), "restaurant");
    }
}
