//! Distance and season calculations
//!
//! Pure helpers shared by the facility locator and the seasonal content
//! selection. No I/O, no clock access: callers pass coordinates and the
//! month index in.

use serde::Serialize;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two lat/lon points
/// (haversine, spherical Earth). Total for any finite input; callers must
/// drop rows with missing coordinates before calling.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// The three Myanmar climate seasons used to pick relevant health content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Cool,
    Hot,
    Monsoon,
}

/// Map a zero-based month index (0 = January) onto a season bucket.
/// Cool/dry: Nov-Feb, hot/dry: Mar-May, monsoon/wet: Jun-Oct.
pub fn season_for_month(month0: u8) -> Season {
    match month0 {
        0 | 1 | 10 | 11 => Season::Cool,
        2..=4 => Season::Hot,
        _ => Season::Monsoon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let d = distance_km(16.8661, 96.1951, 16.8661, 96.1951);
        assert!(d.abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = (16.8661, 96.1951); // Yangon
        let b = (21.9588, 96.0891); // Mandalay
        let ab = distance_km(a.0, a.1, b.0, b.1);
        let ba = distance_km(b.0, b.1, a.0, a.1);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn yangon_mandalay_is_roughly_566_km() {
        let d = distance_km(16.8661, 96.1951, 21.9588, 96.0891);
        assert!((d - 566.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn seasons_partition_the_year() {
        let mut counts = std::collections::HashMap::new();
        for month in 0u8..12 {
            *counts.entry(season_for_month(month)).or_insert(0) += 1;
        }
        assert_eq!(counts[&Season::Cool], 4);
        assert_eq!(counts[&Season::Hot], 3);
        assert_eq!(counts[&Season::Monsoon], 5);
    }

    #[test]
    fn boundary_months() {
        assert_eq!(season_for_month(1), Season::Cool); // February
        assert_eq!(season_for_month(2), Season::Hot); // March
        assert_eq!(season_for_month(4), Season::Hot); // May
        assert_eq!(season_for_month(5), Season::Monsoon); // June
        assert_eq!(season_for_month(9), Season::Monsoon); // October
        assert_eq!(season_for_month(10), Season::Cool); // November
    }
}
