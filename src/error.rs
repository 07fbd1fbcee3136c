//! Error type for the estimation pipeline.

use thiserror::Error;

/// Errors surfaced by the estimation pipeline.
///
/// All of these are parameter problems; nothing here is transient, so callers
/// should fall back or report rather than retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("coordinate out of range: ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("arrival time out of range ({minutes} minutes from now)")]
    ArrivalOutOfRange { minutes: u32 },
}

impl EstimateError {
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        tracing::warn!(param = name, value, "rejected estimation parameter");
        EstimateError::InvalidParameter { name, value }
    }
}
