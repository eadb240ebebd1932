use fare_core::geo::GeoPoint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed shared by every sampled property so failures reproduce.
pub const SEED: u64 = 42;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Uniform point anywhere on the globe.
pub fn random_point(rng: &mut StdRng) -> GeoPoint {
    let lat = rng.gen_range(-90.0..=90.0);
    let lng = rng.gen_range(-180.0..=180.0);
    GeoPoint::new(lat, lng).expect("sampled coordinates are in range")
}

/// Uniform point inside a box around central Bengaluru.
pub fn random_city_point(rng: &mut StdRng) -> GeoPoint {
    let lat = rng.gen_range(12.85..=13.10);
    let lng = rng.gen_range(77.45..=77.78);
    GeoPoint::new(lat, lng).expect("sampled coordinates are in range")
}

pub fn driver_position() -> GeoPoint {
    GeoPoint::new(12.9716, 77.5946).expect("valid point")
}
