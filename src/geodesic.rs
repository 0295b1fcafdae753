//! Ellipsoidal distance between coordinates.
//!
//! Uses Karney's geodesic on the WGS84 ellipsoid (via `geo`), which is what
//! the step counts in the resampler and the route distance filter are tuned
//! against. Great-circle approximations differ by up to ~0.5%.

use geo::{Distance, Geodesic, Point};

use crate::coordinate::Coordinate;

const METERS_PER_KM: f64 = 1000.0;

/// Geodesic distance between two points in kilometers.
pub fn geodesic_km(from: Coordinate, to: Coordinate) -> f64 {
    let from: Point<f64> = from.into();
    let to: Point<f64> = to.into();
    Geodesic::distance(from, to) / METERS_PER_KM
}
