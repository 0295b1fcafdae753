//! Resamples every route in `driving_routes.json` for rendering.

use tracing::info;

use route_precompute::config::DataPaths;
use route_precompute::resample::{ResampleOptions, resample_routes};
use route_precompute::{logging, store};

fn main() -> anyhow::Result<()> {
    logging::init();

    let paths = DataPaths::from_env();
    let routes = store::load_routes(&paths.driving_routes())?;
    let resampled = resample_routes(&routes, &ResampleOptions::default())?;

    store::write_json(&paths.resampled_driving_routes(), &resampled)?;
    info!(path = %paths.resampled_driving_routes().display(), "done");
    Ok(())
}
