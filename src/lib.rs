//! trx-tracker - TRON wallet transaction tracking.
//!
//! Polls a set of named wallet addresses, detects transactions that have not
//! been seen before, and sends a formatted alert for each one. The tracked
//! set can be changed at runtime through bot commands.
//!
//! # Architecture
//!
//! - [`domain`] - Transactions, transaction ids, wallet entries
//! - [`port`] - Traits at the boundaries: transaction source, notifier, and
//!   the wallet tracker used by command front-ends
//! - [`application`] - Registry, seen set, extraction, formatting, polling
//! - [`adapter`] - TronGrid source and notifiers (Telegram behind the
//!   `telegram` feature)
//! - [`infrastructure`] - Configuration, wiring, runtime
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use trx_tracker::infrastructure::config::settings::Config;
//! use trx_tracker::infrastructure::orchestration::runtime::run_once;
//!
//! # async fn demo() -> trx_tracker::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let report = run_once(config).await?;
//! println!("{} alerts", report.alerts_sent);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
