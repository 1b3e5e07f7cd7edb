//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`tracker`]: wallet management and history lookups for command front-ends

pub mod tracker;
