//! Embedded map page
//!
//! Renders the facility results as a self-contained Leaflet document the
//! client shows in a web view: OSM tile layer, a "you are here" marker, the
//! nearest facility in red with an opened popup, the rest in blue. Pure
//! templating, no I/O.

use crate::models::Facility;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link rel="stylesheet" href="https://unpkg.com/leaflet/dist/leaflet.css" />
    <style>
      #map { height: 97vh; width: 100%; }
    </style>
  </head>
  <body>
    <div id="map"></div>
    <script src="https://unpkg.com/leaflet/dist/leaflet.js"></script>
    <script>
      var map = L.map('map').setView([__CENTER_LAT__, __CENTER_LON__], 13);
      L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', { maxZoom: 19 }).addTo(map);
      L.marker([__CENTER_LAT__, __CENTER_LON__]).addTo(map).bindPopup('You are here').openPopup();
      var facilities = __FACILITIES__;
      if (facilities.length > 0) {
        var nearest = facilities[0];
        L.marker([nearest.lat, nearest.lon], {icon: L.icon({
          iconUrl: 'https://maps.google.com/mapfiles/ms/icons/red-dot.png',
          iconSize: [32, 32]
        })}).addTo(map).bindPopup(nearest.name || 'Nearest Hospital').openPopup();
      }
      for (var i = 1; i < facilities.length; i++) {
        var f = facilities[i];
        L.marker([f.lat, f.lon], {icon: L.icon({
          iconUrl: 'https://maps.google.com/mapfiles/ms/icons/blue-dot.png',
          iconSize: [32, 32]
        })}).addTo(map).bindPopup(f.name || 'Hospital/Clinic');
      }
    </script>
  </body>
</html>
"#;

const EMPTY_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <p>No facility search has completed yet.</p>
  </body>
</html>
"#;

pub fn render_map_page(lat: f64, lon: f64, facilities: &[Facility]) -> String {
    let markers = serde_json::to_string(facilities).unwrap_or_else(|_| "[]".into());
    PAGE_TEMPLATE
        .replace("__CENTER_LAT__", &lat.to_string())
        .replace("__CENTER_LON__", &lon.to_string())
        .replace("__FACILITIES__", &markers)
}

pub fn render_empty_page() -> String {
    EMPTY_TEMPLATE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility(id: i64, lat: f64, lon: f64, name: Option<&str>, distance_km: f64) -> Facility {
        Facility {
            id,
            lat,
            lon,
            name: name.map(str::to_string),
            category: None,
            distance_km,
        }
    }

    #[test]
    fn page_centers_on_position_and_embeds_facilities() {
        let facilities = vec![
            facility(1, 16.87, 96.19, Some("General Hospital"), 0.5),
            facility(2, 16.9, 96.2, None, 3.8),
        ];
        let page = render_map_page(16.8661, 96.1951, &facilities);

        assert!(page.contains("setView([16.8661, 96.1951], 13)"));
        assert!(page.contains("General Hospital"));
        assert!(page.contains("red-dot.png"));
        assert!(page.contains("blue-dot.png"));
        assert!(!page.contains("__FACILITIES__"));
    }

    #[test]
    fn empty_facility_list_still_renders() {
        let page = render_map_page(16.8661, 96.1951, &[]);
        assert!(page.contains("var facilities = []"));
        assert!(page.contains("You are here"));
    }

    #[test]
    fn facility_json_round_trips_from_the_page() {
        let facilities = vec![facility(9, 16.87, 96.19, Some("St. John's Clinic"), 1.2)];
        let page = render_map_page(16.8661, 96.1951, &facilities);
        let start = page.find("var facilities = ").unwrap() + "var facilities = ".len();
        let end = page[start..].find(";\n").unwrap() + start;
        let parsed: Vec<Facility> = serde_json::from_str(&page[start..end]).unwrap();
        assert_eq!(parsed[0].name.as_deref(), Some("St. John's Clinic"));
    }
}
