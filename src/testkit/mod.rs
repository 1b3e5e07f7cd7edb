//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] - [`ScriptedSource`](source::ScriptedSource), an in-memory
//!   [`TransactionSource`](crate::port::outbound::source::TransactionSource).
//! - [`notifier`] - [`RecordingNotifier`](notifier::RecordingNotifier), which
//!   captures every delivery.
//! - [`record`] - Builders for raw TronGrid records.

pub mod notifier;
pub mod record;
pub mod source;
