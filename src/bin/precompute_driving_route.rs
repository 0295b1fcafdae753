//! Fetches driving routes between consecutive team locations.

use anyhow::Context;
use tracing::info;

use route_precompute::cache::RouteCache;
use route_precompute::config::{DataPaths, MapboxConfig};
use route_precompute::mapbox::MapboxClient;
use route_precompute::precompute::{RouteOptions, compute_driving_routes};
use route_precompute::{logging, store};

fn main() -> anyhow::Result<()> {
    logging::init();

    let paths = DataPaths::from_env();
    let client = MapboxClient::new(MapboxConfig::from_env()?)?;

    let locations = store::load_locations(&paths.locations())?;
    let geocoded = store::load_geocoded(&paths.geocoded_locations())
        .context("run precompute_geocoder first")?;
    let previous = store::read_json_if_exists(&paths.driving_routes())?.unwrap_or_default();
    let mut cache = RouteCache::seeded(previous);
    info!(cached = cache.len(), "loaded inputs");

    let routes = compute_driving_routes(
        &locations,
        &geocoded,
        &client,
        &RouteOptions::default(),
        &mut cache,
    )
    .context("routing failed, output not written")?;

    store::write_json(&paths.driving_routes(), &routes)?;
    info!(path = %paths.driving_routes().display(), "done");
    Ok(())
}
