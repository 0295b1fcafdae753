//! Test fixtures for route-precompute.
//!
//! Provides:
//! - Real Nevada places with known coordinates
//! - In-memory `Geocoder` / `RoutingProvider` fakes that count their calls
//! - Builders for the `locations.json` / `challenges.json` shapes

#![allow(dead_code)]

pub mod nevada_places;

use std::cell::RefCell;
use std::collections::HashMap;

use route_precompute::coordinate::{Coordinate, LocationRef};
use route_precompute::error::ServiceError;
use route_precompute::polyline::Polyline;
use route_precompute::store::{Challenge, SeasonChallenges, SeasonLocations, TeamLocations};
use route_precompute::traits::{Geocoder, RoutingProvider};

pub use nevada_places::*;

/// Geocoder backed by a fixed name table.
#[derive(Debug, Default)]
pub struct FakeGeocoder {
    places: HashMap<String, Coordinate>,
    fail_with_status: Option<u16>,
    pub queries: RefCell<Vec<String>>,
}

impl FakeGeocoder {
    pub fn with_places(places: &[Place]) -> Self {
        Self {
            places: places
                .iter()
                .map(|place| (place.name.to_string(), place.coord()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Self::default()
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.borrow().len()
    }
}

impl Geocoder for FakeGeocoder {
    fn forward(&self, query: &str) -> Result<Option<Coordinate>, ServiceError> {
        self.queries.borrow_mut().push(query.to_string());
        if let Some(status) = self.fail_with_status {
            return Err(ServiceError::Status {
                status,
                body: "{\"message\":\"Not Authorized - Invalid Token\"}".to_string(),
            });
        }
        Ok(self.places.get(query).copied())
    }
}

/// Router returning a three-point path (start, midpoint, end) for every pair.
#[derive(Debug, Default)]
pub struct StraightLineRouter {
    unreachable: Vec<Coordinate>,
    pub requests: RefCell<Vec<(Coordinate, Coordinate)>>,
}

impl StraightLineRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports "no route" for any request ending at `place`.
    pub fn unreachable(mut self, place: Place) -> Self {
        self.unreachable.push(place.coord());
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl RoutingProvider for StraightLineRouter {
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<Option<Polyline>, ServiceError> {
        self.requests.borrow_mut().push((from, to));
        if self.unreachable.contains(&to) {
            return Ok(None);
        }
        let mid = Coordinate::new((from.lat + to.lat) / 2.0, (from.lng + to.lng) / 2.0);
        Ok(Some(Polyline::new(vec![from, mid, to])))
    }
}

pub fn name(place: Place) -> LocationRef {
    LocationRef::Name(place.name.to_string())
}

/// One season with one team per itinerary.
pub fn season_locations(season: i64, itineraries: Vec<Vec<LocationRef>>) -> SeasonLocations {
    SeasonLocations {
        season: serde_json::json!(season),
        data: itineraries
            .into_iter()
            .enumerate()
            .map(|(i, locations)| TeamLocations {
                team: Some(format!("team-{}", i + 1)),
                locations,
            })
            .collect(),
    }
}

pub fn season_challenges(season: i64, locations: Vec<Option<LocationRef>>) -> SeasonChallenges {
    SeasonChallenges {
        season: serde_json::json!(season),
        challenges: locations
            .into_iter()
            .map(|location| Challenge { location })
            .collect(),
    }
}
