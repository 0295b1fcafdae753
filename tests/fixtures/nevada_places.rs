//! Real Nevada place names for precompute fixtures.
//!
//! Coordinates are town centres / landmarks, rounded to four decimals.

use route_precompute::coordinate::Coordinate;

/// A named place with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coord(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

// ============================================================================
// Southern Nevada (all within ~50 km of each other)
// ============================================================================

pub const LAS_VEGAS: Place = Place::new("Las Vegas, NV", 36.1699, -115.1398);
pub const HENDERSON: Place = Place::new("Henderson, NV", 36.0395, -114.9817);
pub const BOULDER_CITY: Place = Place::new("Boulder City, NV", 35.9786, -114.8325);
pub const HOOVER_DAM: Place = Place::new("Hoover Dam", 36.0160, -114.7377);

// ============================================================================
// Northern Nevada (more than 375 km from the south)
// ============================================================================

pub const RENO: Place = Place::new("Reno, NV", 39.5296, -119.8138);
pub const CARSON_CITY: Place = Place::new("Carson City, NV", 39.1638, -119.7674);

// ============================================================================
// Central Nevada
// ============================================================================

pub const TONOPAH: Place = Place::new("Tonopah, NV", 38.0670, -117.2301);

pub const ALL_PLACES: &[Place] = &[
    LAS_VEGAS,
    HENDERSON,
    BOULDER_CITY,
    HOOVER_DAM,
    RENO,
    CARSON_CITY,
    TONOPAH,
];
