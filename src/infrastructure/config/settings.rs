//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all tracker settings.
//! Configuration is loaded from a TOML file; credentials are normally kept
//! out of the file and supplied through `TRONGRID_API_KEY`,
//! `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`.
//!
//! # Example
//!
//! ```no_run
//! use trx_tracker::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use super::tracker::TrackerConfig;
use crate::adapter::outbound::trongrid::settings::TronGridConfig;
use crate::domain::wallet::WalletEntry;
use crate::error::{ConfigError, Result};

/// Environment variable holding the TronGrid API key.
pub const TRONGRID_API_KEY_ENV: &str = "TRONGRID_API_KEY";
/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
/// Environment variable holding the comma-separated alert chat ids.
pub const TELEGRAM_CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

/// Top-level tracker configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub trongrid: TronGridConfig,
    #[serde(default)]
    pub telegram: TelegramAppConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Addresses that trigger the exchange annotation on alerts.
    #[serde(default = "default_exchange_wallets")]
    pub exchange_wallets: Vec<String>,
    /// Wallets tracked from startup, keyed by name.
    #[serde(default = "default_wallets")]
    pub wallets: BTreeMap<String, String>,
}

fn default_exchange_wallets() -> Vec<String> {
    vec![
        "TBinanceWallet123...".into(),
        "TBitgetWallet456...".into(),
        "TKuCoinWallet789...".into(),
    ]
}

fn default_wallets() -> BTreeMap<String, String> {
    BTreeMap::from([(
        "MainWallet".to_string(),
        "TEYQfA5LfWLVCFZjSPvEAoQcHvWKJFz3G3".to_string(),
    )])
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracker: TrackerConfig::default(),
            trongrid: TronGridConfig::default(),
            telegram: TelegramAppConfig::default(),
            logging: LoggingConfig::default(),
            exchange_wallets: default_exchange_wallets(),
            wallets: default_wallets(),
        }
    }
}

impl Config {
    /// Parse and validate configuration from TOML content.
    ///
    /// Environment overrides are not applied; see [`Config::load`].
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment
    /// overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is invalid, or
    /// the resulting configuration fails validation.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::from_toml_with_env(&content, |key| std::env::var(key).ok())
    }

    /// Parse TOML content and apply overrides from `lookup` before
    /// validating.
    #[allow(clippy::result_large_err)]
    pub fn from_toml_with_env<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(lookup);
        config.validate()?;
        Ok(config)
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = non_empty(TRONGRID_API_KEY_ENV) {
            self.trongrid.api_key = Some(key);
        }
        if let Some(token) = non_empty(TELEGRAM_BOT_TOKEN_ENV) {
            self.telegram.bot_token = Some(token);
        }
        if let Some(raw) = non_empty(TELEGRAM_CHAT_ID_ENV) {
            let chat_ids = parse_chat_id_list(&raw);
            if !chat_ids.is_empty() {
                self.telegram.chat_ids = chat_ids;
            }
        }
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.tracker.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.tracker.fetch_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch_limit",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.tracker.history_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "history_limit",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.trongrid.api_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if self.trongrid.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Some((name, _)) = self.wallets.iter().find(|(_, address)| address.is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "wallets",
                reason: format!("wallet '{name}' has an empty address"),
            }
            .into());
        }

        if self.telegram.enabled {
            if self
                .telegram
                .bot_token
                .as_deref()
                .map_or(true, |token| token.trim().is_empty())
            {
                return Err(ConfigError::MissingField {
                    field: TELEGRAM_BOT_TOKEN_ENV,
                }
                .into());
            }
            if self.telegram.chat_ids.is_empty() {
                return Err(ConfigError::MissingField {
                    field: TELEGRAM_CHAT_ID_ENV,
                }
                .into());
            }
        }

        Ok(())
    }

    /// Wallets to seed the registry with.
    #[must_use]
    pub fn initial_wallets(&self) -> Vec<WalletEntry> {
        self.wallets
            .iter()
            .map(|(name, address)| WalletEntry::new(name.clone(), address.clone()))
            .collect()
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

/// Parse a comma-separated chat id list, skipping entries that are not
/// integers.
fn parse_chat_id_list(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|part| {
            let part = part.trim();
            match part.parse() {
                Ok(id) => Some(id),
                Err(_) => {
                    if !part.is_empty() {
                        warn!(value = %part, "Ignoring invalid Telegram chat id");
                    }
                    None
                }
            }
        })
        .collect()
}
