//! Coordinate and location reference types.
//!
//! On disk a coordinate is always a `[lng, lat]` array. In memory it has
//! named fields so nothing depends on positional order.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a coordinate from the `[lng, lat]` storage order.
    pub const fn from_lng_lat(lng: f64, lat: f64) -> Self {
        Self { lat, lng }
    }

    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Label used for literal coordinates inside route keys.
    pub fn label(&self) -> String {
        format!("{},{}", self.lng, self.lat)
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(coord: Coordinate) -> Self {
        geo::Point::new(coord.lng, coord.lat)
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_lng_lat().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<f64>::deserialize(deserializer)?;
        match values.as_slice() {
            [lng, lat] => Ok(Coordinate::from_lng_lat(*lng, *lat)),
            other => Err(D::Error::invalid_length(
                other.len(),
                &"a [lng, lat] pair",
            )),
        }
    }
}

/// A location as written in the input files: a place name still to be
/// geocoded, an already resolved coordinate, or a loop of places visited
/// before moving on (drawn by the front-end, never routed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationRef {
    Name(String),
    Coordinate(Coordinate),
    Loop(Vec<LocationRef>),
}

impl LocationRef {
    /// Label used in route keys. A loop is labelled by its first stop.
    pub fn label(&self) -> String {
        match self {
            LocationRef::Name(name) => name.clone(),
            LocationRef::Coordinate(coord) => coord.label(),
            LocationRef::Loop(stops) => stops.first().map(LocationRef::label).unwrap_or_default(),
        }
    }

    /// Every place name in this entry, loop stops included, in order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            LocationRef::Name(name) => vec![name.as_str()],
            LocationRef::Coordinate(_) => Vec::new(),
            LocationRef::Loop(stops) => stops.iter().flat_map(LocationRef::names).collect(),
        }
    }
}

/// Identifies a precomputed path between two locations, `"origin/destination"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub origin: String,
    pub destination: String,
}

impl RouteKey {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    pub fn between(origin: &LocationRef, destination: &LocationRef) -> Self {
        Self::new(origin.label(), destination.label())
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.origin, self.destination)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRouteKeyError(pub String);

impl fmt::Display for ParseRouteKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route key {:?} has no '/' separator", self.0)
    }
}

impl std::error::Error for ParseRouteKeyError {}

impl FromStr for RouteKey {
    type Err = ParseRouteKeyError;

    // Place names never contain '/', so the first one splits the key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_once('/')
            .map(|(origin, destination)| RouteKey::new(origin, destination))
            .ok_or_else(|| ParseRouteKeyError(s.to_string()))
    }
}

impl Serialize for RouteKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RouteKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
