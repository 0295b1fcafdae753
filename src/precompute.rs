//! The network-bound steps: geocode place names and fetch driving routes.
//!
//! Each step is generic over the service traits so it can run against the
//! real client or an in-memory fake. Steps return the complete output map;
//! writing it is left to the caller, which only does so on success.

use tracing::{debug, info, warn};

use crate::cache::{GeocodeCache, RouteCache, normalize_place_name};
use crate::coordinate::{Coordinate, LocationRef, RouteKey};
use crate::error::{DataError, PrecomputeError};
use crate::geodesic::geodesic_km;
use crate::polyline::RouteMap;
use crate::store::{GeocodedLocations, SeasonChallenges, SeasonLocations};
use crate::traits::{Geocoder, RoutingProvider};

#[derive(Debug, Clone)]
pub struct RouteOptions {
    /// Pairs further apart than this (straight-line km) are not routed.
    pub max_distance_km: f64,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            max_distance_km: 375.0,
        }
    }
}

/// Every place name referenced by the challenges and team itineraries, in
/// file order, challenges first. Loop stops are included since the front-end
/// looks them up too. Duplicates are kept.
pub fn referenced_names<'a>(
    challenges: &'a [SeasonChallenges],
    locations: &'a [SeasonLocations],
) -> impl Iterator<Item = &'a str> + 'a {
    let challenge_names = challenges
        .iter()
        .flat_map(|season| &season.challenges)
        .filter_map(|challenge| challenge.location.as_ref())
        .flat_map(LocationRef::names);
    let team_names = locations
        .iter()
        .flat_map(|season| &season.data)
        .flat_map(|team| &team.locations)
        .flat_map(LocationRef::names);
    challenge_names.chain(team_names)
}

/// Geocodes every referenced place name.
///
/// Names already in `cache` are not sent to the geocoder. The result holds
/// exactly the referenced names, keyed as written in the input.
pub fn geocode_locations<G: Geocoder>(
    challenges: &[SeasonChallenges],
    locations: &[SeasonLocations],
    geocoder: &G,
    cache: &mut GeocodeCache,
) -> Result<GeocodedLocations, PrecomputeError> {
    let mut geocoded = GeocodedLocations::new();

    for name in referenced_names(challenges, locations) {
        if geocoded.contains_key(name) {
            continue;
        }
        let coord = *cache.get_or_try_insert_with(
            normalize_place_name(name),
            |query| -> Result<Coordinate, PrecomputeError> {
                match geocoder.forward(query)? {
                    Some(coord) => Ok(coord),
                    None => {
                        warn!(query = query.as_str(), "no geocoding match");
                        Err(PrecomputeError::NoGeocodeMatch(query.clone()))
                    }
                }
            },
        )?;
        geocoded.insert(name.to_string(), coord);
    }

    info!(
        names = geocoded.len(),
        requests = cache.misses(),
        cached = cache.hits(),
        "geocoded locations"
    );
    Ok(geocoded)
}

/// Looks up the coordinate of a location entry. Loops have no single
/// coordinate and resolve to `None`.
pub fn resolve_location(
    location: &LocationRef,
    geocoded: &GeocodedLocations,
) -> Result<Option<Coordinate>, DataError> {
    match location {
        LocationRef::Coordinate(coord) => Ok(Some(*coord)),
        LocationRef::Loop(_) => Ok(None),
        LocationRef::Name(name) => geocoded
            .get(name.as_str())
            .or_else(|| geocoded.get(normalize_place_name(name).as_str()))
            .copied()
            .map(Some)
            .ok_or_else(|| DataError::UnknownLocation(name.clone())),
    }
}

/// Fetches a driving route for each consecutive pair of team locations that
/// lies within `options.max_distance_km`. Pairs touching a loop are skipped.
pub fn compute_driving_routes<R: RoutingProvider>(
    locations: &[SeasonLocations],
    geocoded: &GeocodedLocations,
    router: &R,
    options: &RouteOptions,
    cache: &mut RouteCache,
) -> Result<RouteMap, PrecomputeError> {
    let mut routes = RouteMap::new();
    let mut skipped = 0usize;

    for team in locations.iter().flat_map(|season| &season.data) {
        let resolved = team
            .locations
            .iter()
            .map(|location| resolve_location(location, geocoded).map(|coord| (location, coord)))
            .collect::<Result<Vec<_>, _>>()?;

        for pair in resolved.windows(2) {
            let ((origin, Some(from)), (destination, Some(to))) = (pair[0], pair[1]) else {
                debug!("skipping pair next to a loop");
                skipped += 1;
                continue;
            };
            let key = RouteKey::between(origin, destination);
            if routes.contains_key(&key) {
                continue;
            }

            let dist = geodesic_km(from, to);
            if dist > options.max_distance_km {
                debug!(route = %key, dist_km = dist, "skipping pair beyond max distance");
                skipped += 1;
                continue;
            }

            let route = cache.get_or_try_insert_with(key.clone(), |key| -> Result<_, PrecomputeError> {
                router
                    .route(from, to)?
                    .ok_or_else(|| PrecomputeError::NoRoute(key.clone()))
            })?;
            routes.insert(key, route.clone());
        }
    }

    info!(
        routes = routes.len(),
        skipped,
        requests = cache.misses(),
        cached = cache.hits(),
        "computed driving routes"
    );
    Ok(routes)
}
