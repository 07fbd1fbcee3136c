//! Geographic value types shared by the estimator.

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Checks that the point is finite and inside the valid degree ranges.
    pub fn validate(&self) -> Result<(), EstimateError> {
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let lon_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);

        if lat_ok && lon_ok {
            Ok(())
        } else {
            tracing::warn!(
                latitude = self.latitude,
                longitude = self.longitude,
                "coordinate out of range"
            );
            Err(EstimateError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self { latitude, longitude }
    }
}

/// Unit system used for distances and speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    /// Miles, with speeds in mph.
    #[default]
    Miles,
    /// Kilometers, with speeds in km/h.
    Kilometers,
}

impl DistanceUnit {
    /// Mean Earth radius expressed in this unit.
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Miles => 3959.0,
            DistanceUnit::Kilometers => 6371.0,
        }
    }

    /// Assumed average driving speed when the caller gives none.
    pub fn default_speed(self) -> f64 {
        match self {
            DistanceUnit::Miles => 55.0,
            DistanceUnit::Kilometers => 90.0,
        }
    }

    /// Short label suffix, e.g. `mi`.
    pub fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "mi",
            DistanceUnit::Kilometers => "km",
        }
    }
}
