//! Seams of the estimator.
//!
//! Kept minimal so callers can plug in their own distance metric or time
//! source without touching the pipeline.

use chrono::{DateTime, FixedOffset};

use crate::geo::GeoPoint;

/// Point-to-point distance metric.
pub trait DistanceProvider {
    /// Distance between two points, in the provider's unit.
    fn distance(&self, from: GeoPoint, to: GeoPoint) -> f64;
}

/// Wall-clock source used to project arrival times.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}
