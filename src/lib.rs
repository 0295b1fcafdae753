//! Offline precomputation of map data: geocoded place names, driving routes
//! between them, and resampled route polylines for rendering.

pub mod cache;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod geodesic;
pub mod logging;
pub mod mapbox;
pub mod polyline;
pub mod precompute;
pub mod resample;
pub mod store;
pub mod traits;
