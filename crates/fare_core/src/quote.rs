//! End-to-end trip quote: distance, ETA and fare from two points.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::eta::{check_speed, eta_minutes, DEFAULT_AVG_SPEED_KMH};
use crate::format::{format_currency, format_distance, format_duration};
use crate::geo::{distance_km, GeoPoint};
use crate::pricing::{fare_breakdown, FareBreakdown};
use crate::vehicle::VehicleClass;

/// Inputs to a quote that are not the trip endpoints.
///
/// Missing fields fall back to [`QuoteConfig::default`] when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    /// Average travel speed for ETA, km/h. Must be > 0.
    pub avg_speed_kmh: f64,
    pub vehicle_class: VehicleClass,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            avg_speed_kmh: DEFAULT_AVG_SPEED_KMH,
            vehicle_class: VehicleClass::default(),
        }
    }
}

impl QuoteConfig {
    pub fn with_avg_speed_kmh(mut self, avg_speed_kmh: f64) -> Self {
        self.avg_speed_kmh = avg_speed_kmh;
        self
    }

    pub fn with_vehicle_class(mut self, vehicle_class: VehicleClass) -> Self {
        self.vehicle_class = vehicle_class;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_speed(self.avg_speed_kmh).map(|_| ())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RideQuote {
    pub vehicle_class: VehicleClass,
    pub distance_km: f64,
    pub eta_minutes: u32,
    pub fare: FareBreakdown,
}

/// Display strings shown on a ride-request card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteSummary {
    pub distance: String,
    pub duration: String,
    pub price: String,
}

impl RideQuote {
    pub fn total_price(&self) -> u32 {
        self.fare.total_price
    }

    pub fn summary(&self) -> QuoteSummary {
        QuoteSummary {
            distance: format_distance(self.distance_km),
            duration: format_duration(self.eta_minutes),
            price: format_currency(i64::from(self.fare.total_price)),
        }
    }
}

/// Quote for an already-measured distance.
pub fn quote_distance(distance_km: f64, config: &QuoteConfig) -> Result<RideQuote> {
    config.validate()?;
    let fare = fare_breakdown(distance_km, config.vehicle_class)?;
    let eta_minutes = eta_minutes(distance_km, config.avg_speed_kmh)?;
    log::trace!(
        "quoted {} km on {}: {} min, {} rupees",
        distance_km,
        config.vehicle_class,
        eta_minutes,
        fare.total_price
    );
    Ok(RideQuote {
        vehicle_class: config.vehicle_class,
        distance_km,
        eta_minutes,
        fare,
    })
}

/// Quote for a straight-line trip from `pickup` to `drop`.
pub fn quote_trip(pickup: GeoPoint, drop: GeoPoint, config: &QuoteConfig) -> Result<RideQuote> {
    quote_distance(distance_km(pickup, drop), config)
}
