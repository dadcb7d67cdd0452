use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A hospital or clinic returned by the geographic query, annotated with
/// its straight-line distance from the search position.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Facility {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    pub name: Option<String>,
    pub category: Option<String>,
    pub distance_km: f64,
}

/// The most recent completed facility search, kept only for the embedded
/// map page. Never persisted; replaced wholesale on every applied search.
#[derive(Debug, Clone)]
pub struct FacilitySnapshot {
    pub center: (f64, f64),
    pub facilities: Vec<Facility>,
    pub fetched_at: OffsetDateTime,
}
