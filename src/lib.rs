//! route-eta: client-side route and arrival estimation.
//!
//! Straight-line (haversine) distance, a travel time at an assumed average
//! speed, and a projected wall-clock arrival, formatted for display.

pub mod traits;
pub mod error;
pub mod geo;
pub mod haversine;
pub mod eta;
pub mod arrival;
pub mod route;
pub mod track;

pub use error::EstimateError;
pub use geo::{DistanceUnit, GeoPoint};
pub use route::{EstimatorOptions, RouteEstimate, RouteEstimator};
