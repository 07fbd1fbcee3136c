//! Arrival-time projection and display formatting.

use chrono::{DateTime, FixedOffset, Local, TimeDelta};

use crate::error::EstimateError;
use crate::geo::DistanceUnit;
use crate::traits::Clock;

/// Below this many units a distance is shown in feet or meters.
const SHORT_DISTANCE_THRESHOLD: f64 = 0.1;

const FEET_PER_MILE: f64 = 5280.0;
const METERS_PER_KILOMETER: f64 = 1000.0;

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Projects the arrival time `eta_minutes` from the clock's current time.
pub fn arrival_timestamp<C: Clock + ?Sized>(
    clock: &C,
    eta_minutes: u32,
) -> Result<DateTime<FixedOffset>, EstimateError> {
    arrival_from(clock.now(), eta_minutes)
}

pub(crate) fn arrival_from(
    now: DateTime<FixedOffset>,
    eta_minutes: u32,
) -> Result<DateTime<FixedOffset>, EstimateError> {
    TimeDelta::try_minutes(i64::from(eta_minutes))
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or(EstimateError::ArrivalOutOfRange { minutes: eta_minutes })
}

/// 12-hour clock label, e.g. `"3:45 PM"`.
pub fn format_arrival(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format("%-I:%M %p").to_string()
}

/// Distance label in miles, switching to feet under a tenth of a mile.
pub fn format_distance(miles: f64) -> String {
    format_distance_in(miles, DistanceUnit::Miles)
}

/// Distance label in the given unit. Short distances use feet or meters.
pub fn format_distance_in(value: f64, unit: DistanceUnit) -> String {
    if value < SHORT_DISTANCE_THRESHOLD {
        return match unit {
            DistanceUnit::Miles => format!("{} ft", (value * FEET_PER_MILE).round()),
            DistanceUnit::Kilometers => format!("{} m", (value * METERS_PER_KILOMETER).round()),
        };
    }
    format!("{:.1} {}", value, unit.suffix())
}
