//! Bengaluru mock data shared by tests, benches and the CLI.
//!
//! The `estimated_*` figures on requests and the `price`/`duration` on recent
//! rides were hand-written for the demo and do not always agree with the
//! formulas. [`audit_request`] puts them side by side instead of treating
//! either as the truth.

use serde::Serialize;

use crate::earnings::DailyEarning;
use crate::error::Result;
use crate::geo::{distance_km, GeoPoint};
use crate::nearby::Located;
use crate::quote::{quote_distance, QuoteConfig};
use crate::vehicle::VehicleClass;

/// Build a fixture point.
///
/// # Panics
///
/// Panics if the literal coordinates are out of range (should never happen).
fn at(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint::new(latitude, longitude).expect("fixture coordinates should be in range")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub point: GeoPoint,
    pub address: String,
}

fn place(latitude: f64, longitude: f64, address: &str) -> Place {
    Place {
        point: at(latitude, longitude),
        address: address.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RideStatus {
    Pending,
    Accepted,
    Started,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockVehicle {
    pub id: String,
    pub class: VehicleClass,
    pub model: String,
    pub registration_number: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockDriver {
    pub id: String,
    pub name: String,
    pub rating: f32,
    pub total_rides: u32,
    pub total_earnings: u64,
    pub is_online: bool,
    pub location: GeoPoint,
    pub vehicle: Option<MockVehicle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockRider {
    pub id: String,
    pub name: String,
    pub rating: f32,
    pub location: GeoPoint,
}

impl Located for MockRider {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockRideRequest {
    pub id: String,
    pub rider_id: String,
    pub pickup: Place,
    pub drop: Place,
    pub estimated_distance_km: f64,
    pub estimated_price: u32,
    pub estimated_duration_min: u32,
    pub status: RideStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockRide {
    pub id: String,
    pub rider_id: String,
    pub driver_id: String,
    pub pickup: Place,
    pub drop: Place,
    pub distance_km: f64,
    pub price: u32,
    pub duration_min: u32,
    pub status: RideStatus,
}

pub fn current_driver() -> MockDriver {
    MockDriver {
        id: "d-001".to_string(),
        name: "Rajesh Kumar".to_string(),
        rating: 4.8,
        total_rides: 856,
        total_earnings: 156_430,
        is_online: true,
        location: at(12.9716, 77.5946),
        vehicle: Some(MockVehicle {
            id: "v-001".to_string(),
            class: VehicleClass::Auto,
            model: "Bajaj RE".to_string(),
            registration_number: "KA 01 AB 1234".to_string(),
            color: Some("Yellow".to_string()),
        }),
    }
}

pub fn nearby_riders() -> Vec<MockRider> {
    let rider = |id: &str, name: &str, rating: f32, lat: f64, lng: f64| MockRider {
        id: id.to_string(),
        name: name.to_string(),
        rating,
        location: at(lat, lng),
    };
    vec![
        rider("r-001", "Amit Sharma", 4.7, 12.9719, 77.5942),
        rider("r-002", "Priya Patel", 4.9, 12.9721, 77.5948),
        rider("r-003", "Suresh Reddy", 4.5, 12.9725, 77.5940),
    ]
}

pub fn pending_requests() -> Vec<MockRideRequest> {
    let request = |id: &str,
                   rider_id: &str,
                   pickup: Place,
                   drop: Place,
                   distance: f64,
                   price: u32,
                   duration: u32| MockRideRequest {
        id: id.to_string(),
        rider_id: rider_id.to_string(),
        pickup,
        drop,
        estimated_distance_km: distance,
        estimated_price: price,
        estimated_duration_min: duration,
        status: RideStatus::Pending,
    };
    vec![
        request(
            "req-001",
            "r-001",
            place(12.9719, 77.5942, "Cubbon Park, Bengaluru"),
            place(12.9780, 77.6080, "Indiranagar, Bengaluru"),
            5.8,
            130,
            22,
        ),
        request(
            "req-002",
            "r-002",
            place(12.9721, 77.5948, "MG Road, Bengaluru"),
            place(12.9766, 77.5993, "Ulsoor Lake, Bengaluru"),
            3.2,
            80,
            15,
        ),
        request(
            "req-003",
            "r-003",
            place(12.9725, 77.5940, "Vidhana Soudha, Bengaluru"),
            place(12.9854, 77.7081, "Whitefield, Bengaluru"),
            15.4,
            320,
            45,
        ),
    ]
}

pub fn recent_rides() -> Vec<MockRide> {
    let ride = |id: &str,
                rider_id: &str,
                pickup: Place,
                drop: Place,
                distance: f64,
                price: u32,
                duration: u32| MockRide {
        id: id.to_string(),
        rider_id: rider_id.to_string(),
        driver_id: "d-001".to_string(),
        pickup,
        drop,
        distance_km: distance,
        price,
        duration_min: duration,
        status: RideStatus::Completed,
    };
    vec![
        ride(
            "ride-001",
            "r-004",
            place(12.9716, 77.5946, "Bengaluru City Railway Station"),
            place(12.9569, 77.7011, "Mahadevapura, Bengaluru"),
            12.7,
            250,
            38,
        ),
        ride(
            "ride-002",
            "r-005",
            place(12.9622, 77.5971, "Lalbagh Botanical Garden, Bengaluru"),
            place(12.9779, 77.5895, "Malleshwaram, Bengaluru"),
            6.3,
            140,
            25,
        ),
        ride(
            "ride-003",
            "r-006",
            place(12.9800, 77.5835, "Mantri Square Mall, Bengaluru"),
            place(12.9698, 77.7499, "Marathahalli, Bengaluru"),
            17.8,
            350,
            55,
        ),
    ]
}

pub fn weekly_earnings() -> Vec<DailyEarning> {
    [
        ("Mon", 950, 8),
        ("Tue", 1200, 10),
        ("Wed", 850, 7),
        ("Thu", 1100, 9),
        ("Fri", 1500, 12),
        ("Sat", 1800, 14),
        ("Sun", 1300, 11),
    ]
    .into_iter()
    .map(|(day, amount, rides)| DailyEarning {
        day: day.to_string(),
        amount,
        rides,
    })
    .collect()
}

/// Mock estimates next to what the formulas produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestAudit {
    pub id: String,
    /// Straight-line pickup-to-drop distance.
    pub straight_line_km: f64,
    pub estimated_distance_km: f64,
    pub mock_price: u32,
    pub formula_price: u32,
    pub mock_duration_min: u32,
    pub formula_duration_min: u32,
}

impl RequestAudit {
    pub fn price_matches(&self) -> bool {
        self.mock_price == self.formula_price
    }

    pub fn duration_matches(&self) -> bool {
        self.mock_duration_min == self.formula_duration_min
    }
}

/// Re-derive price and duration from the request's stated distance.
pub fn audit_request(request: &MockRideRequest, config: &QuoteConfig) -> Result<RequestAudit> {
    let quote = quote_distance(request.estimated_distance_km, config)?;
    Ok(RequestAudit {
        id: request.id.clone(),
        straight_line_km: distance_km(request.pickup.point, request.drop.point),
        estimated_distance_km: request.estimated_distance_km,
        mock_price: request.estimated_price,
        formula_price: quote.total_price(),
        mock_duration_min: request.estimated_duration_min,
        formula_duration_min: quote.eta_minutes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_ids_are_unique() {
        let mut ids: Vec<_> = pending_requests().into_iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn every_request_has_a_known_rider() {
        let riders = nearby_riders();
        for request in pending_requests() {
            assert!(riders.iter().any(|r| r.id == request.rider_id), "{}", request.id);
        }
    }

    #[test]
    fn audit_flags_illustrative_mock_values() {
        let requests = pending_requests();
        let audit = audit_request(&requests[0], &QuoteConfig::default()).expect("valid audit");
        assert_eq!(audit.formula_price, 115);
        assert_eq!(audit.formula_duration_min, 17);
        assert!(!audit.price_matches());
        assert!(!audit.duration_matches());
        assert!(audit.straight_line_km < audit.estimated_distance_km);
    }

    #[test]
    fn driver_operates_an_auto() {
        let driver = current_driver();
        let vehicle = driver.vehicle.expect("driver has a vehicle");
        assert_eq!(vehicle.class, VehicleClass::Auto);
    }
}
