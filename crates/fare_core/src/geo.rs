//! Geographic primitives: validated coordinates and great-circle distance.
//!
//! This module provides:
//!
//! - **GeoPoint**: latitude/longitude pair in degrees, validated on construction
//! - **Distance calculations**: Haversine distance in kilometres, rounded to
//!   two decimals the way fares and ride cards consume it
//!
//! Distances are computed on a sphere of radius [`EARTH_RADIUS_KM`], which is
//! accurate to well under a percent at city scale.

use serde::{Deserialize, Serialize};

use crate::error::{GeoPricingError, Result};

/// Mean Earth radius used by the Haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the globe in degrees.
///
/// Fields are private so every `GeoPoint` in circulation has passed range
/// validation, including ones read through serde.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawGeoPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = GeoPricingError;

    fn try_from(raw: RawGeoPoint) -> Result<Self> {
        GeoPoint::new(raw.latitude, raw.longitude)
    }
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lng_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        if !(lat_ok && lng_ok) {
            log::debug!("rejecting coordinate ({latitude}, {longitude})");
            return Err(GeoPricingError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Rounded great-circle distance to `other`; see [`distance_km`].
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance_km(*self, *other)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Unrounded Haversine distance in kilometres.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lon1) = (a.latitude.to_radians(), a.longitude.to_radians());
    let (lat2, lon2) = (b.latitude.to_radians(), b.longitude.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    // Clamp guards sqrt(1 - h) against h drifting just above 1 for antipodes.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Great-circle distance between two points, rounded to 2 decimal places.
///
/// Never negative; `distance_km(p, p) == 0.0`.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    round_to_hundredths(haversine_km(a, b))
}

/// Raw-coordinate form of [`distance_km`] that validates both points first.
pub fn distance_km_between(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Result<f64> {
    let a = GeoPoint::new(lat1, lng1)?;
    let b = GeoPoint::new(lat2, lng2)?;
    Ok(distance_km(a, b))
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).expect("valid point")
    }

    #[test]
    fn same_point_is_zero_distance() {
        let p = point(12.9716, 77.5946);
        assert_eq!(distance_km(p, p), 0.0);
    }

    #[test]
    fn bengaluru_neighbours_are_a_few_dozen_metres_apart() {
        let driver = point(12.9716, 77.5946);
        let rider = point(12.9719, 77.5942);
        let d = distance_km(driver, rider);
        assert!((0.04..=0.05).contains(&d), "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = point(12.9716, 77.5946);
        let b = point(12.9854, 77.7081);
        assert_eq!(distance_km(a, b), distance_km(b, a));
    }

    #[test]
    fn result_is_rounded_to_two_decimals() {
        let a = point(12.9716, 77.5946);
        let b = point(12.9569, 77.7011);
        let d = distance_km(a, b);
        assert_eq!(d, (d * 100.0).round() / 100.0);
        assert!(d > 11.0 && d < 12.5, "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_the_circumference() {
        let d = distance_km(point(0.0, 0.0), point(0.0, 180.0));
        let expected = round_to_hundredths(std::f64::consts::PI * EARTH_RADIUS_KM);
        assert!((d - expected).abs() < 0.01);
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(matches!(
            GeoPoint::new(90.5, 0.0),
            Err(GeoPricingError::InvalidCoordinate { .. })
        ));
        assert!(GeoPoint::new(0.0, -180.1).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn raw_coordinate_variant_validates() {
        let d = distance_km_between(12.9716, 77.5946, 12.9719, 77.5942).expect("valid input");
        assert!(d > 0.0);
        assert!(distance_km_between(12.9716, 77.5946, 120.0, 77.5942).is_err());
    }

    #[test]
    fn deserialization_goes_through_validation() {
        let ok: GeoPoint =
            serde_json::from_str(r#"{"latitude":12.9716,"longitude":77.5946}"#).expect("parse");
        assert_eq!(ok.latitude(), 12.9716);

        let bad = serde_json::from_str::<GeoPoint>(r#"{"latitude":100.0,"longitude":0.0}"#);
        assert!(bad.is_err());
    }
}
