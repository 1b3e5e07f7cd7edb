//! Application services (use cases).
//!
//! - [`registry`] and [`seen`]: the two pieces of shared mutable state
//! - [`extract`], [`feed`] and [`format`]: the per-record pipeline
//! - [`engine`]: the polling loop
//! - [`tracker`]: the command-facing service

pub mod dispatch;
pub mod engine;
pub mod extract;
pub mod feed;
pub mod format;
pub mod registry;
pub mod seen;
pub mod tracker;

