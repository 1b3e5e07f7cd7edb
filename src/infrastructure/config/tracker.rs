//! Polling and history settings.

use std::time::Duration;

use serde::Deserialize;

use crate::application::engine::{EngineConfig, DEFAULT_FETCH_LIMIT, DEFAULT_POLL_INTERVAL};
use crate::application::tracker::DEFAULT_HISTORY_LIMIT;

/// Tracker loop configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    /// Pause between sweeps in seconds (default: 5).
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Records requested per wallet per sweep (default: 10).
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: usize,
    /// Records shown by `/history` (default: 5).
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

const fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL.as_secs()
}

const fn default_fetch_limit() -> usize {
    DEFAULT_FETCH_LIMIT
}

const fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl TrackerConfig {
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            poll_interval: Duration::from_secs(self.poll_interval_secs),
            fetch_limit: self.fetch_limit,
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            fetch_limit: default_fetch_limit(),
            history_limit: default_history_limit(),
        }
    }
}
