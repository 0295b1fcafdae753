//! Seams for the external mapping services.
//!
//! The precompute steps only talk to these traits. The HTTP client in
//! [`crate::mapbox`] implements both; tests substitute in-memory fakes.

use crate::coordinate::Coordinate;
use crate::error::ServiceError;
use crate::polyline::Polyline;

/// Resolves free-text place names to coordinates.
pub trait Geocoder {
    /// Best match for `query`, or `Ok(None)` when the service knows no such place.
    fn forward(&self, query: &str) -> Result<Option<Coordinate>, ServiceError>;
}

/// Produces driving geometry between two coordinates.
pub trait RoutingProvider {
    /// Road path from `from` to `to`, or `Ok(None)` when no route exists.
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<Option<Polyline>, ServiceError>;
}

impl<T: Geocoder + ?Sized> Geocoder for &T {
    fn forward(&self, query: &str) -> Result<Option<Coordinate>, ServiceError> {
        (**self).forward(query)
    }
}

impl<T: RoutingProvider + ?Sized> RoutingProvider for &T {
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<Option<Polyline>, ServiceError> {
        (**self).route(from, to)
    }
}
