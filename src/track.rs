//! Live trip tracking: breadcrumb trail and refresh throttling.
//!
//! A location stream delivers fixes far more often than an estimate needs
//! recomputing. [`Tracker`] accepts a fix only when enough time has passed or
//! the vehicle has moved far enough, and records accepted fixes as a [`Track`].

use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::geo::{DistanceUnit, GeoPoint};
use crate::haversine::Haversine;

/// An ordered trail of visited points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    points: Vec<GeoPoint>,
}

impl Track {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    pub fn push(&mut self, point: GeoPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    /// Path length along the trail, in the calculator's unit.
    pub fn length(&self, haversine: &Haversine) -> f64 {
        self.points
            .windows(2)
            .map(|pair| haversine.distance(pair[0], pair[1]))
            .sum()
    }
}

/// One sample from a location stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub point: GeoPoint,
    pub recorded_at: DateTime<FixedOffset>,
}

/// When a new fix is worth acting on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdatePolicy {
    pub min_interval: Duration,
    pub min_distance_meters: f64,
}

impl Default for UpdatePolicy {
    fn default() -> Self {
        Self {
            min_interval: Duration::from_secs(10),
            min_distance_meters: 50.0,
        }
    }
}

/// Follows a single trip's location stream.
#[derive(Debug, Clone)]
pub struct Tracker {
    policy: UpdatePolicy,
    meters: Haversine,
    last: Option<LocationFix>,
    trail: Track,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(UpdatePolicy::default())
    }
}

impl Tracker {
    pub fn new(policy: UpdatePolicy) -> Self {
        Self {
            policy,
            meters: Haversine::new(DistanceUnit::Kilometers.earth_radius() * 1000.0),
            last: None,
            trail: Track::default(),
        }
    }

    /// Offers a fix; returns `true` if it was accepted and the caller should
    /// refresh its estimate.
    pub fn observe(&mut self, fix: LocationFix) -> bool {
        let accept = match self.last {
            None => true,
            Some(last) => {
                let elapsed = (fix.recorded_at - last.recorded_at).to_std().unwrap_or_default();
                let moved = self.meters.distance(last.point, fix.point);
                tracing::trace!(
                    elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                    moved_meters = moved,
                    "location fix"
                );
                elapsed >= self.policy.min_interval || moved >= self.policy.min_distance_meters
            }
        };

        if accept {
            self.last = Some(fix);
            self.trail.push(fix.point);
        }
        accept
    }

    /// Most recently accepted fix.
    pub fn last_fix(&self) -> Option<&LocationFix> {
        self.last.as_ref()
    }

    pub fn trail(&self) -> &Track {
        &self.trail
    }

    /// Forgets the trail and last fix, e.g. when a trip ends.
    pub fn reset(&mut self) {
        self.last = None;
        self.trail = Track::default();
    }

    /// Distance covered along accepted fixes, in `unit`.
    pub fn distance_travelled(&self, unit: DistanceUnit) -> f64 {
        self.trail.length(&Haversine::for_unit(unit))
    }
}
