//! Polyline resampling.
//!
//! Densifies a route by inserting points along each segment. Short segments
//! receive more steps: a segment of length `d` km is split into
//! `floor(spacing_km / d) + 1` steps, each advancing `step_fraction` of the
//! segment vector. Both endpoints of the step range are emitted.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::coordinate::Coordinate;
use crate::error::{PrecomputeError, ResampleError};
use crate::geodesic::geodesic_km;
use crate::polyline::{Polyline, RouteMap};

#[derive(Debug, Clone)]
pub struct ResampleOptions {
    /// Distance threshold in kilometers used to derive the step count.
    pub spacing_km: f64,
    /// Fraction of the segment vector covered by one step.
    pub step_fraction: f64,
    /// Upper bound on the step count of a single segment.
    pub max_steps_per_segment: usize,
}

impl Default for ResampleOptions {
    fn default() -> Self {
        Self {
            spacing_km: 0.1,
            step_fraction: 0.1,
            max_steps_per_segment: 100_000,
        }
    }
}

impl ResampleOptions {
    /// Step count for a segment of `dist_km` (must be > 0).
    pub fn steps_for(&self, dist_km: f64) -> usize {
        let steps = (self.spacing_km / dist_km).floor() as usize;
        steps.saturating_add(1).min(self.max_steps_per_segment)
    }
}

/// Resamples a single polyline.
///
/// Coincident consecutive points contribute only their start point. Inputs
/// with fewer than two points produce an empty polyline.
pub fn resample(line: &Polyline, options: &ResampleOptions) -> Result<Polyline, ResampleError> {
    if let Some(index) = line.points().iter().position(|p| !p.is_finite()) {
        return Err(ResampleError::NonFiniteCoordinate { index });
    }

    let mut points = Vec::new();
    for (start, end) in line.segments() {
        let dist = geodesic_km(start, end);
        if start == end || dist <= 0.0 {
            points.push(start);
            continue;
        }

        let steps = options.steps_for(dist);
        let delta_lat = end.lat - start.lat;
        let delta_lng = end.lng - start.lng;
        points.extend((0..=steps).map(|s| {
            let t = options.step_fraction * s as f64;
            Coordinate::new(start.lat + delta_lat * t, start.lng + delta_lng * t)
        }));
    }

    Ok(Polyline::new(points))
}

/// Resamples every route, keeping keys and their order.
pub fn resample_routes(
    routes: &RouteMap,
    options: &ResampleOptions,
) -> Result<RouteMap, PrecomputeError> {
    let resampled = routes
        .par_iter()
        .map(|(key, line)| {
            let out = resample(line, options).map_err(|source| PrecomputeError::Resample {
                key: key.clone(),
                source,
            })?;
            debug!(route = %key, input = line.len(), output = out.len(), "resampled route");
            Ok((key.clone(), out))
        })
        .collect::<Result<Vec<_>, PrecomputeError>>()?;

    info!(routes = resampled.len(), "resampled driving routes");
    Ok(resampled.into_iter().collect())
}
