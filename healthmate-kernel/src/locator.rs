//! Nearby facility search
//!
//! One Overpass query per call: hospitals and clinics within the configured
//! radius of the given position. Rows without coordinates are dropped, the
//! rest are annotated with their haversine distance and sorted ascending.
//! No retry, no caching between calls; an explicit refresh re-fetches.

use crate::models::Facility;
use healthmate_core::geo;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("facility query failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("facility query returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("facility query returned an unreadable payload: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    id: i64,
    lat: Option<f64>,
    lon: Option<f64>,
    #[serde(default)]
    tags: OverpassTags,
}

#[derive(Debug, Default, Deserialize)]
struct OverpassTags {
    name: Option<String>,
    amenity: Option<String>,
}

pub struct FacilityLocator {
    http: reqwest::Client,
    endpoint: String,
    radius_m: u32,
}

impl FacilityLocator {
    pub fn new(http: reqwest::Client, endpoint: String, radius_m: u32) -> Self {
        Self {
            http,
            endpoint,
            radius_m,
        }
    }

    pub async fn search(&self, lat: f64, lon: f64) -> Result<Vec<Facility>, LocatorError> {
        let query = overpass_query(lat, lon, self.radius_m);
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("data", query.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocatorError::Status(status));
        }

        let text = response.text().await?;
        let parsed: OverpassResponse = serde_json::from_str(&text)?;
        let total = parsed.elements.len();

        let mut facilities: Vec<Facility> = parsed
            .elements
            .into_iter()
            .filter_map(|element| {
                let (Some(f_lat), Some(f_lon)) = (element.lat, element.lon) else {
                    return None;
                };
                Some(Facility {
                    id: element.id,
                    lat: f_lat,
                    lon: f_lon,
                    name: element.tags.name,
                    category: element.tags.amenity,
                    distance_km: geo::distance_km(lat, lon, f_lat, f_lon),
                })
            })
            .collect();
        facilities.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        debug!("{} of {total} elements carried coordinates", facilities.len());
        info!(
            "facility search at ({lat:.4}, {lon:.4}) returned {} results",
            facilities.len()
        );
        Ok(facilities)
    }
}

fn overpass_query(lat: f64, lon: f64, radius_m: u32) -> String {
    format!(
        "[out:json];\
         (node[\"amenity\"=\"hospital\"](around:{radius_m},{lat},{lon});\
          node[\"amenity\"=\"clinic\"](around:{radius_m},{lat},{lon}););\
         out center;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthmate_devkit::{SamplePayloads, StubRoute, StubServer};
    use serde_json::json;

    const CENTER: (f64, f64) = (16.8661, 96.1951);

    fn locator_for(stub: &StubServer) -> FacilityLocator {
        FacilityLocator::new(reqwest::Client::new(), stub.url("/api/interpreter"), 10_000)
    }

    #[tokio::test]
    async fn results_are_sorted_ascending_by_distance() {
        let body = SamplePayloads::overpass_body(vec![
            // Deliberately out of order: far, mid, near.
            SamplePayloads::overpass_node(1, Some(16.96), Some(96.1951), Some("Far"), Some("hospital")),
            SamplePayloads::overpass_node(2, Some(16.90), Some(96.1951), Some("Mid"), Some("clinic")),
            SamplePayloads::overpass_node(3, Some(16.87), Some(96.1951), Some("Near"), Some("hospital")),
        ]);
        let stub = StubServer::spawn(vec![StubRoute::json("/api/interpreter", 200, body)])
            .await
            .unwrap();

        let facilities = locator_for(&stub).search(CENTER.0, CENTER.1).await.unwrap();
        let ids: Vec<i64> = facilities.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        for pair in facilities.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
        assert_eq!(facilities[0].name.as_deref(), Some("Near"));
    }

    #[tokio::test]
    async fn rows_without_coordinates_are_dropped() {
        let body = SamplePayloads::overpass_body(vec![
            SamplePayloads::overpass_node(1, Some(16.87), Some(96.1951), Some("Kept"), None),
            SamplePayloads::overpass_node(2, None, Some(96.1951), Some("No lat"), None),
            SamplePayloads::overpass_node(3, Some(16.88), None, Some("No lon"), None),
        ]);
        let stub = StubServer::spawn(vec![StubRoute::json("/api/interpreter", 200, body)])
            .await
            .unwrap();

        let facilities = locator_for(&stub).search(CENTER.0, CENTER.1).await.unwrap();
        assert_eq!(facilities.len(), 1);
        assert_eq!(facilities[0].id, 1);
    }

    #[tokio::test]
    async fn zero_elements_is_an_empty_ok() {
        let stub = StubServer::spawn(vec![StubRoute::json(
            "/api/interpreter",
            200,
            SamplePayloads::overpass_body(vec![]),
        )])
        .await
        .unwrap();

        let facilities = locator_for(&stub).search(CENTER.0, CENTER.1).await.unwrap();
        assert!(facilities.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_a_status_error() {
        let stub = StubServer::spawn(vec![StubRoute::json(
            "/api/interpreter",
            504,
            json!({"remark": "timeout"}),
        )])
        .await
        .unwrap();

        let err = locator_for(&stub).search(CENTER.0, CENTER.1).await.unwrap_err();
        assert!(matches!(err, LocatorError::Status(s) if s.as_u16() == 504));
    }

    #[tokio::test]
    async fn wrong_shape_payload_is_a_payload_error() {
        let stub = StubServer::spawn(vec![StubRoute::json(
            "/api/interpreter",
            200,
            json!(["not", "an", "object"]),
        )])
        .await
        .unwrap();

        let err = locator_for(&stub).search(CENTER.0, CENTER.1).await.unwrap_err();
        assert!(matches!(err, LocatorError::Payload(_)));
    }

    #[tokio::test]
    async fn query_selects_both_amenities_within_radius() {
        let stub = StubServer::spawn(vec![StubRoute::json(
            "/api/interpreter",
            200,
            SamplePayloads::overpass_body(vec![]),
        )])
        .await
        .unwrap();

        locator_for(&stub).search(CENTER.0, CENTER.1).await.unwrap();
        let recorded = stub.recorded();
        assert_eq!(recorded.len(), 1);
        let query = recorded[0].query.as_deref().unwrap_or_default();
        assert!(query.contains("hospital"));
        assert!(query.contains("clinic"));
        assert!(query.contains("10000"));
    }
}
