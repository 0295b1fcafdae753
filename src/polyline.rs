//! Polyline representation for route geometries.
//!
//! Serializes as a plain JSON array of `[lng, lat]` pairs, the shape both the
//! directions API and the front-end use.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::coordinate::{Coordinate, RouteKey};

/// Routes keyed by `"origin/destination"`, in insertion (file) order.
pub type RouteMap = IndexMap<RouteKey, Polyline>;

/// An ordered sequence of coordinates describing a path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from coordinates in path order.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Builds a polyline from raw `[lng, lat]` pairs.
    pub fn from_lng_lat(pairs: &[[f64; 2]]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|[lng, lat]| Coordinate::from_lng_lat(*lng, *lat))
                .collect(),
        )
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polyline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive `(start, end)` pairs, `len() - 1` of them.
    pub fn segments(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}
