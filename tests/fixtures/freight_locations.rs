//! City-centre coordinates for integration tests.
//!
//! Coordinates sourced from OpenStreetMap.

use route_eta::geo::GeoPoint;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

pub const LOS_ANGELES: Location = Location::new("Los Angeles", 34.0522, -118.2437);
pub const SAN_FRANCISCO: Location = Location::new("San Francisco", 37.7749, -122.4194);
pub const LAS_VEGAS: Location = Location::new("Las Vegas", 36.1699, -115.1398);
pub const PHOENIX: Location = Location::new("Phoenix", 33.4484, -112.0740);
pub const SALT_LAKE_CITY: Location = Location::new("Salt Lake City", 40.7608, -111.8910);

// ============================================================================
// Pickup yards around the Port of Long Beach
// ============================================================================

pub const PORT_YARDS: &[Location] = &[
    Location::new("Pier T Terminal", 33.7550, -118.2380),
    Location::new("Pier J Terminal", 33.7380, -118.1900),
    Location::new("Terminal Island", 33.7460, -118.2660),
    Location::new("Carson Laydown Yard", 33.8317, -118.2620),
];
