//! TronGrid API configuration.

use std::fmt;

use serde::Deserialize;

/// TronGrid connection settings.
///
/// The API key is optional: TronGrid serves unauthenticated requests at a
/// lower rate limit.
#[derive(Clone, Deserialize)]
pub struct TronGridConfig {
    /// REST API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Value for the `TRON-PRO-API-KEY` header.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_api_url() -> String {
    "https://api.trongrid.io".into()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    3000
}

impl Default for TronGridConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

impl fmt::Debug for TronGridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TronGridConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_ms", &self.timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_api_key() {
        let config = TronGridConfig {
            api_key: Some("secret-key".into()),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn defaults_point_at_public_api() {
        let config: TronGridConfig = toml::from_str("").unwrap();
        assert_eq!(config.api_url, "https://api.trongrid.io");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_ms, 10_000);
    }
}
