//! Travel-time estimation from a straight-line distance.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;
use crate::geo::DistanceUnit;

/// Estimated travel time.
///
/// `hours` and `minutes` are split from `total_minutes`, so the label and the
/// projected arrival always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eta {
    pub hours: u32,
    /// Remainder minutes, always 0..=59.
    pub minutes: u32,
    pub total_minutes: u32,
}

impl Eta {
    /// Compact label: `"2h 5m"`, or `"45m"` under an hour.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 {
            write!(f, "{}h {}m", self.hours, self.minutes)
        } else {
            write!(f, "{}m", self.minutes)
        }
    }
}

/// Converts a distance into a travel time at `average_speed`.
///
/// Distance and speed must share a unit system (miles/mph or km/km/h).
pub fn estimate(distance: f64, average_speed: f64) -> Result<Eta, EstimateError> {
    if !average_speed.is_finite() || average_speed <= 0.0 {
        return Err(EstimateError::invalid("average_speed", average_speed));
    }
    if !distance.is_finite() || distance < 0.0 {
        return Err(EstimateError::invalid("distance", distance));
    }

    let total_hours = distance / average_speed;
    let rounded = (total_hours * 60.0).round();
    if rounded > f64::from(u32::MAX) {
        return Err(EstimateError::invalid("distance", distance));
    }
    let total_minutes = rounded as u32;

    Ok(Eta {
        hours: total_minutes / 60,
        minutes: total_minutes % 60,
        total_minutes,
    })
}

/// [`estimate`] at the default mph speed.
pub fn estimate_default(distance_miles: f64) -> Result<Eta, EstimateError> {
    estimate(distance_miles, DistanceUnit::Miles.default_speed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        let eta = estimate(0.0, 40.0).unwrap();
        assert_eq!(
            eta,
            Eta {
                hours: 0,
                minutes: 0,
                total_minutes: 0
            }
        );
        assert_eq!(eta.label(), "0m");
    }

    #[test]
    fn test_one_hour_exact() {
        let eta = estimate(55.0, 55.0).unwrap();
        assert_eq!((eta.hours, eta.minutes, eta.total_minutes), (1, 0, 60));
        assert_eq!(eta.label(), "1h 0m");
    }

    #[test]
    fn test_default_speed_is_55() {
        assert_eq!(estimate_default(110.0).unwrap().label(), "2h 0m");
    }

    #[test]
    fn test_under_an_hour() {
        // 10 mi at 40 mph = 15 minutes
        let eta = estimate(10.0, 40.0).unwrap();
        assert_eq!(eta.label(), "15m");
        assert_eq!(eta.total_minutes, 15);
    }

    #[test]
    fn test_minutes_rounding_carries_into_hours() {
        // 1.999 hours: naive rounding gives "1h 60m"
        let eta = estimate(1.999, 1.0).unwrap();
        assert_eq!((eta.hours, eta.minutes), (2, 0));
        assert_eq!(eta.total_minutes, 120);
        assert_eq!(eta.label(), "2h 0m");
    }

    #[test]
    fn test_never_sixty_minutes() {
        for tenths in 0..5000 {
            let distance = f64::from(tenths) * 0.1;
            for speed in [1.0, 7.0, 13.0, 30.0, 55.0, 65.0] {
                let eta = estimate(distance, speed).unwrap();
                assert!(eta.minutes < 60, "{} at {} gave {}", distance, speed, eta);
                assert!(!eta.label().contains("60m"));
            }
        }
    }

    #[test]
    fn test_split_matches_total_minutes() {
        // 60.5 mi at 60 mph sits on a half-minute boundary
        let eta = estimate(60.5, 60.0).unwrap();
        assert_eq!(eta.hours * 60 + eta.minutes, eta.total_minutes);

        for tenths in 0..5000 {
            let distance = f64::from(tenths) * 0.1;
            for speed in [7.0, 30.0, 55.0, 60.0] {
                let eta = estimate(distance, speed).unwrap();
                assert_eq!(
                    eta.hours * 60 + eta.minutes,
                    eta.total_minutes,
                    "{} at {}",
                    distance,
                    speed
                );
            }
        }
    }

    #[test]
    fn test_rejects_distance_beyond_minute_range() {
        assert!(matches!(
            estimate(1e12, 1.0),
            Err(EstimateError::InvalidParameter { name: "distance", .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        for speed in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let err = estimate(10.0, speed).unwrap_err();
            assert!(matches!(
                err,
                EstimateError::InvalidParameter {
                    name: "average_speed",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_rejects_zero_speed_even_for_zero_distance() {
        assert!(estimate(0.0, 0.0).is_err());
    }

    #[test]
    fn test_rejects_negative_distance() {
        assert!(matches!(
            estimate(-1.0, 55.0),
            Err(EstimateError::InvalidParameter { name: "distance", .. })
        ));
    }
}
