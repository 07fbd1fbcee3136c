//! Haversine great-circle distance.
//!
//! Assumes a spherical Earth, so results are within ~0.5% of the true
//! surface distance. Ignores roads entirely.

use crate::geo::{DistanceUnit, GeoPoint};
use crate::traits::DistanceProvider;

/// Great-circle distance calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    /// Earth radius; the output unit follows from it.
    pub radius: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self::for_unit(DistanceUnit::Miles)
    }
}

impl Haversine {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn for_unit(unit: DistanceUnit) -> Self {
        Self {
            radius: unit.earth_radius(),
        }
    }

    /// Distance between two points. No range checks are applied.
    pub fn distance(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        let lat1_rad = from.latitude.to_radians();
        let lat2_rad = to.latitude.to_radians();
        let delta_lat = (to.latitude - from.latitude).to_radians();
        let delta_lng = (to.longitude - from.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        // Rounding can push `a` just past 1 for antipodal points.
        let a = a.min(1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        self.radius * c
    }
}

impl DistanceProvider for Haversine {
    fn distance(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        Haversine::distance(self, from, to)
    }
}

/// Rounds to one decimal place, for display.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
