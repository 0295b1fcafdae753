//! Mapbox HTTP adapter for geocoding and driving directions.

use reqwest::Url;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::MapboxConfig;
use crate::coordinate::Coordinate;
use crate::error::ServiceError;
use crate::polyline::Polyline;
use crate::traits::{Geocoder, RoutingProvider};

/// Directions codes meaning "valid request, but nothing connects the points".
const NO_ROUTE_CODES: &[&str] = &["NoRoute", "NoSegment"];

/// Blocking client holding the access token for its whole lifetime.
#[derive(Debug, Clone)]
pub struct MapboxClient {
    config: MapboxConfig,
    base_url: Url,
    client: reqwest::blocking::Client,
}

impl MapboxClient {
    pub fn new(config: MapboxConfig) -> Result<Self, ServiceError> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ServiceError::InvalidBaseUrl(config.base_url.clone()))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    pub(crate) fn geocode_url(&self, query: &str) -> Url {
        let mut url = self.endpoint(&[
            "geocoding",
            "v5",
            "mapbox.places",
            &format!("{}.json", query),
        ]);
        url.query_pairs_mut()
            .append_pair("limit", "1")
            .append_pair("access_token", &self.config.access_token);
        url
    }

    pub(crate) fn directions_url(&self, from: Coordinate, to: Coordinate) -> Url {
        let coords = format!("{:.6},{:.6};{:.6},{:.6}", from.lng, from.lat, to.lng, to.lat);
        let mut url = self.endpoint(&["directions", "v5", "mapbox", &self.config.profile, &coords]);
        url.query_pairs_mut()
            .append_pair("geometries", "geojson")
            .append_pair("overview", "full")
            .append_pair("access_token", &self.config.access_token);
        url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base urls, so segments are always available.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ServiceError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "<no body>".to_string());
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .map_err(|err| ServiceError::MalformedResponse(err.to_string()))
    }
}

impl Geocoder for MapboxClient {
    fn forward(&self, query: &str) -> Result<Option<Coordinate>, ServiceError> {
        debug!(query, "geocoding place name");
        let body = self.get_json::<GeocodeResponse>(self.geocode_url(query))?;
        Ok(body.best_match())
    }
}

impl RoutingProvider for MapboxClient {
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<Option<Polyline>, ServiceError> {
        debug!(?from, ?to, "requesting driving route");
        let body = self.get_json::<DirectionsResponse>(self.directions_url(from, to))?;
        body.into_route()
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    features: Vec<GeocodeFeature>,
}

#[derive(Debug, Deserialize)]
struct GeocodeFeature {
    geometry: PointGeometry,
}

#[derive(Debug, Deserialize)]
struct PointGeometry {
    coordinates: Coordinate,
}

impl GeocodeResponse {
    fn best_match(self) -> Option<Coordinate> {
        self.features
            .into_iter()
            .next()
            .map(|feature| feature.geometry.coordinates)
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    geometry: LineGeometry,
}

#[derive(Debug, Deserialize)]
struct LineGeometry {
    coordinates: Polyline,
}

impl DirectionsResponse {
    fn into_route(self) -> Result<Option<Polyline>, ServiceError> {
        if NO_ROUTE_CODES.contains(&self.code.as_str()) {
            return Ok(None);
        }
        if self.code != "Ok" {
            return Err(ServiceError::Rejected {
                code: self.code,
                message: self.message.unwrap_or_default(),
            });
        }
        Ok(self
            .routes
            .into_iter()
            .next()
            .map(|route| route.geometry.coordinates))
    }
}
