//! Fare calculation for a trip of known length.
//!
//! Formula: `fare = max(base + distance_km * per_km, minimum)`, then rounded to
//! the nearest [`FARE_ROUNDING_STEP`] rupees. Rates come from
//! [`VehicleClass::rates`].

use serde::Serialize;

use crate::error::{check_distance, GeoPricingError, Result};
use crate::vehicle::VehicleClass;

/// Fares are quoted in multiples of this many rupees.
pub const FARE_ROUNDING_STEP: u32 = 5;

/// Components of a quoted fare.
///
/// `total_price` already includes the minimum-fare floor and rounding, so it
/// may differ from `base_price + distance_charge`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FareBreakdown {
    pub base_price: u32,
    pub distance_charge: f64,
    pub total_price: u32,
}

impl FareBreakdown {
    /// True when the minimum fare, not the metered price, set the total.
    pub fn minimum_applied(&self, vehicle_class: VehicleClass) -> bool {
        f64::from(self.base_price) + self.distance_charge
            < f64::from(vehicle_class.rates().minimum_fare)
    }
}

pub fn fare_breakdown(distance_km: f64, vehicle_class: VehicleClass) -> Result<FareBreakdown> {
    let distance_km = check_distance(distance_km)?;
    let rates = vehicle_class.rates();

    let distance_charge = distance_km * f64::from(rates.per_km_rate);
    let raw = f64::from(rates.base_price) + distance_charge;
    let total = raw.max(f64::from(rates.minimum_fare));
    let Some(total_price) = round_to_step(total) else {
        log::debug!("fare for {distance_km} km on {vehicle_class} does not fit in u32");
        return Err(GeoPricingError::InvalidDistance(distance_km));
    };

    Ok(FareBreakdown {
        base_price: rates.base_price,
        distance_charge,
        total_price,
    })
}

/// Total fare in rupees for `distance_km` on `vehicle_class`.
pub fn fare(distance_km: f64, vehicle_class: VehicleClass) -> Result<u32> {
    fare_breakdown(distance_km, vehicle_class).map(|b| b.total_price)
}

/// `None` when the rounded amount does not fit in a `u32`.
fn round_to_step(amount: f64) -> Option<u32> {
    let steps = (amount / f64::from(FARE_ROUNDING_STEP)).round();
    if !(0.0..=f64::from(u32::MAX / FARE_ROUNDING_STEP)).contains(&steps) {
        return None;
    }
    // steps is a whole number within range, so the cast is exact.
    Some(steps as u32 * FARE_ROUNDING_STEP)
}
