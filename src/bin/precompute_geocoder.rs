//! Geocodes every place name in `challenges.json` and `locations.json`.

use anyhow::Context;
use tracing::info;

use route_precompute::cache::GeocodeCache;
use route_precompute::config::{DataPaths, MapboxConfig};
use route_precompute::mapbox::MapboxClient;
use route_precompute::precompute::geocode_locations;
use route_precompute::{logging, store};

fn main() -> anyhow::Result<()> {
    logging::init();

    let paths = DataPaths::from_env();
    let client = MapboxClient::new(MapboxConfig::from_env()?)?;

    let challenges = store::load_challenges(&paths.challenges())?;
    let locations = store::load_locations(&paths.locations())?;
    let previous = store::read_json_if_exists(&paths.geocoded_locations())?.unwrap_or_default();
    let mut cache = GeocodeCache::from_geocoded(previous);
    info!(cached = cache.len(), "loaded inputs");

    let geocoded = geocode_locations(&challenges, &locations, &client, &mut cache)
        .context("geocoding failed, output not written")?;

    store::write_json(&paths.geocoded_locations(), &geocoded)?;
    info!(path = %paths.geocoded_locations().display(), "done");
    Ok(())
}
