use crate::error::{check_distance, GeoPricingError, Result};

/// City average used when the caller has no better speed estimate.
pub const DEFAULT_AVG_SPEED_KMH: f64 = 20.0;

pub(crate) fn check_speed(avg_speed_kmh: f64) -> Result<f64> {
    if avg_speed_kmh.is_finite() && avg_speed_kmh > 0.0 {
        Ok(avg_speed_kmh)
    } else {
        log::debug!("rejecting average speed {avg_speed_kmh} km/h");
        Err(GeoPricingError::InvalidRate(avg_speed_kmh))
    }
}

/// Travel time in whole minutes: `round(distance_km / avg_speed_kmh * 60)`.
pub fn eta_minutes(distance_km: f64, avg_speed_kmh: f64) -> Result<u32> {
    let distance_km = check_distance(distance_km)?;
    let avg_speed_kmh = check_speed(avg_speed_kmh)?;
    let minutes = (distance_km / avg_speed_kmh * 60.0).round();
    if minutes > f64::from(u32::MAX) {
        log::debug!("eta for {distance_km} km at {avg_speed_kmh} km/h does not fit in u32");
        return Err(GeoPricingError::InvalidDistance(distance_km));
    }
    Ok(minutes as u32)
}

/// [`eta_minutes`] at [`DEFAULT_AVG_SPEED_KMH`].
pub fn eta_minutes_default(distance_km: f64) -> Result<u32> {
    eta_minutes(distance_km, DEFAULT_AVG_SPEED_KMH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eta_rounds_to_nearest_minute() {
        assert_eq!(eta_minutes(5.8, 20.0), Ok(17));
        assert_eq!(eta_minutes(10.0, 20.0), Ok(30));
        assert_eq!(eta_minutes(0.0, 20.0), Ok(0));
    }

    #[test]
    fn default_speed_is_twenty() {
        assert_eq!(eta_minutes_default(5.8), eta_minutes(5.8, 20.0));
    }

    #[test]
    fn zero_or_negative_speed_is_rejected() {
        assert_eq!(eta_minutes(5.0, 0.0), Err(GeoPricingError::InvalidRate(0.0)));
        assert_eq!(
            eta_minutes(5.0, -10.0),
            Err(GeoPricingError::InvalidRate(-10.0))
        );
        assert!(eta_minutes(5.0, f64::INFINITY).is_err());
    }

    #[test]
    fn eta_too_large_for_u32_is_rejected() {
        assert_eq!(
            eta_minutes(1.0e12, 1.0),
            Err(GeoPricingError::InvalidDistance(1.0e12))
        );
        assert!(eta_minutes(f64::MAX, 20.0).is_err());
        assert_eq!(eta_minutes(1.0e6, 20.0), Ok(3_000_000));
    }

    #[test]
    fn negative_distance_is_rejected_before_speed() {
        assert_eq!(
            eta_minutes(-1.0, 0.0),
            Err(GeoPricingError::InvalidDistance(-1.0))
        );
    }
}
