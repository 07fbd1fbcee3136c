//! Test fixtures for route-eta.
//!
//! Real freight origins and destinations across the western US, used as
//! pickup/dropoff points for oversized loads.

pub mod freight_locations;

pub use freight_locations::*;
