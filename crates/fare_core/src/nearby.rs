//! Ranking riders (or anything with a position) by distance from the driver.

use serde::Serialize;

use crate::error::{check_distance, Result};
use crate::geo::{distance_km, GeoPoint};

/// Anything that sits at a point on the map.
pub trait Located {
    fn location(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    fn location(&self) -> GeoPoint {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ranked<'a, T> {
    pub item: &'a T,
    pub distance_km: f64,
}

/// All `items` ordered nearest first. Ties keep their input order.
pub fn nearest_first<T: Located>(origin: GeoPoint, items: &[T]) -> Vec<Ranked<'_, T>> {
    let mut ranked: Vec<Ranked<'_, T>> = items
        .iter()
        .map(|item| Ranked {
            item,
            distance_km: distance_km(origin, item.location()),
        })
        .collect();
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}

/// Items within `radius_km` of `origin` (inclusive), nearest first.
pub fn within_radius<T: Located>(
    origin: GeoPoint,
    items: &[T],
    radius_km: f64,
) -> Result<Vec<Ranked<'_, T>>> {
    let radius_km = check_distance(radius_km)?;
    let mut ranked = nearest_first(origin, items);
    ranked.retain(|r| r.distance_km <= radius_km);
    Ok(ranked)
}
