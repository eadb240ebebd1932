//! Trip-cost and geo-distance estimation for a ride-hailing driver app.
//!
//! Everything here is a pure function of its inputs except [`countdown`],
//! whose timers are plain values owned by the caller.

pub mod countdown;
pub mod earnings;
pub mod error;
pub mod eta;
#[cfg(any(test, feature = "test-helpers"))]
pub mod fixtures;
pub mod format;
pub mod geo;
pub mod nearby;
pub mod pricing;
pub mod quote;
pub mod vehicle;

pub use error::{GeoPricingError, Result};
pub use eta::{eta_minutes, DEFAULT_AVG_SPEED_KMH};
pub use format::{format_countdown, format_currency, format_distance, format_duration};
pub use geo::{distance_km, distance_km_between, GeoPoint};
pub use pricing::{fare, fare_breakdown, FareBreakdown};
pub use quote::{quote_trip, QuoteConfig, RideQuote};
pub use vehicle::{FareRates, VehicleClass};
