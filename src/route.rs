//! Route information: distance, ETA and arrival time in one call.

use chrono::{DateTime, FixedOffset};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::arrival::{self, SystemClock};
use crate::error::EstimateError;
use crate::eta;
use crate::geo::{DistanceUnit, GeoPoint};
use crate::haversine::Haversine;
use crate::traits::{Clock, DistanceProvider};

/// Estimator configuration.
///
/// Fields missing from a deserialized config fall back to the defaults of
/// the configured `unit`, so `{"unit": "kilometers"}` assumes 90 km/h.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "OptionsConfig")]
pub struct EstimatorOptions {
    /// Unit for distances, and for speeds per hour.
    pub unit: DistanceUnit,
    /// Assumed average speed when the caller gives none.
    pub average_speed: f64,
    /// Reject out-of-range coordinates instead of computing with them.
    pub validate_coordinates: bool,
}

impl Default for EstimatorOptions {
    fn default() -> Self {
        Self::for_unit(DistanceUnit::Miles)
    }
}

impl EstimatorOptions {
    pub fn for_unit(unit: DistanceUnit) -> Self {
        Self {
            unit,
            average_speed: unit.default_speed(),
            validate_coordinates: false,
        }
    }
}

#[derive(Deserialize)]
struct OptionsConfig {
    #[serde(default)]
    unit: DistanceUnit,
    average_speed: Option<f64>,
    validate_coordinates: Option<bool>,
}

impl From<OptionsConfig> for EstimatorOptions {
    fn from(config: OptionsConfig) -> Self {
        let defaults = EstimatorOptions::for_unit(config.unit);
        Self {
            average_speed: config.average_speed.unwrap_or(defaults.average_speed),
            validate_coordinates: config
                .validate_coordinates
                .unwrap_or(defaults.validate_coordinates),
            ..defaults
        }
    }
}

/// Everything a trip screen shows about the road ahead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimate {
    /// Unrounded distance in `unit`.
    pub distance: f64,
    pub unit: DistanceUnit,
    pub distance_label: String,
    pub eta_label: String,
    pub eta_total_minutes: u32,
    pub arrival: DateTime<FixedOffset>,
    pub arrival_label: String,
}

/// Computes [`RouteEstimate`]s from a distance metric and a clock.
///
/// Defaults to great-circle distance and the local system clock. A custom
/// metric must report distances in the configured unit.
#[derive(Debug, Clone)]
pub struct RouteEstimator<C: Clock = SystemClock, D: DistanceProvider = Haversine> {
    options: EstimatorOptions,
    metric: D,
    clock: C,
}

impl Default for RouteEstimator<SystemClock> {
    fn default() -> Self {
        Self::new(EstimatorOptions::default())
    }
}

impl RouteEstimator<SystemClock> {
    pub fn new(options: EstimatorOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }
}

impl<C: Clock> RouteEstimator<C> {
    pub fn with_clock(options: EstimatorOptions, clock: C) -> Self {
        let metric = Haversine::for_unit(options.unit);
        Self::with_metric(options, metric, clock)
    }
}

impl<C: Clock, D: DistanceProvider> RouteEstimator<C, D> {
    pub fn with_metric(options: EstimatorOptions, metric: D, clock: C) -> Self {
        Self {
            options,
            metric,
            clock,
        }
    }

    pub fn options(&self) -> &EstimatorOptions {
        &self.options
    }

    /// Estimate at the configured average speed.
    pub fn route_info(
        &self,
        current: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteEstimate, EstimateError> {
        self.route_info_at_speed(current, destination, self.options.average_speed)
    }

    /// Estimate at an explicit average speed, e.g. a per-trip override.
    pub fn route_info_at_speed(
        &self,
        current: GeoPoint,
        destination: GeoPoint,
        average_speed: f64,
    ) -> Result<RouteEstimate, EstimateError> {
        self.estimate_at(self.clock.now(), current, destination, average_speed)
    }

    /// Estimates for several destinations from one origin.
    ///
    /// The clock is read once, so every arrival is projected from the same
    /// instant. Results keep the order of `destinations`.
    pub fn estimate_many(
        &self,
        current: GeoPoint,
        destinations: &[GeoPoint],
    ) -> Vec<Result<RouteEstimate, EstimateError>>
    where
        D: Sync,
    {
        let now = self.clock.now();
        let speed = self.options.average_speed;

        destinations
            .par_iter()
            .map(|destination| self.estimate_at(now, current, *destination, speed))
            .collect()
    }

    fn estimate_at(
        &self,
        now: DateTime<FixedOffset>,
        current: GeoPoint,
        destination: GeoPoint,
        average_speed: f64,
    ) -> Result<RouteEstimate, EstimateError> {
        if self.options.validate_coordinates {
            current.validate()?;
            destination.validate()?;
        }

        let distance = self.metric.distance(current, destination);
        let eta = eta::estimate(distance, average_speed)?;
        let arrival_at = arrival::arrival_from(now, eta.total_minutes)?;

        tracing::debug!(
            distance,
            average_speed,
            eta_minutes = eta.total_minutes,
            "route estimate"
        );

        Ok(RouteEstimate {
            distance,
            unit: self.options.unit,
            distance_label: arrival::format_distance_in(distance, self.options.unit),
            eta_label: eta.label(),
            eta_total_minutes: eta.total_minutes,
            arrival_label: arrival::format_arrival(&arrival_at),
            arrival: arrival_at,
        })
    }
}
