//! Runtime orchestration.
//!
//! Wires the tracker from configuration and drives it until shutdown.

pub mod runtime;
