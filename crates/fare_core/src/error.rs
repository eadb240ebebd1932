use thiserror::Error;

/// Input rejected at a calculator boundary.
///
/// Every variant is a caller bug: the computations are pure, so nothing here is
/// retried or recovered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoPricingError {
    #[error("invalid coordinate: latitude {latitude} must be within [-90, 90] and longitude {longitude} within [-180, 180]")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("invalid average speed {0} km/h: must be finite and greater than zero")]
    InvalidRate(f64),

    #[error("invalid distance {0} km: must be finite and non-negative")]
    InvalidDistance(f64),

    #[error("unknown vehicle class '{0}': expected one of BIKE, AUTO, CAR")]
    InvalidVehicleClass(String),
}

pub type Result<T> = std::result::Result<T, GeoPricingError>;

/// Rejects negative, NaN and infinite distances.
pub(crate) fn check_distance(distance_km: f64) -> Result<f64> {
    if distance_km.is_finite() && distance_km >= 0.0 {
        Ok(distance_km)
    } else {
        log::debug!("rejecting distance {distance_km} km");
        Err(GeoPricingError::InvalidDistance(distance_km))
    }
}
