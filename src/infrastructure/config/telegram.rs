//! Telegram notification configuration.

use std::fmt;

use serde::Deserialize;

/// Telegram section of the config file.
///
/// The bot token is normally supplied through `TELEGRAM_BOT_TOKEN` rather
/// than written to the file.
#[derive(Clone, Default, Deserialize)]
pub struct TelegramAppConfig {
    /// Deliver alerts and accept commands over Telegram.
    #[serde(default)]
    pub enabled: bool,
    /// Bot API token.
    #[serde(default)]
    pub bot_token: Option<String>,
    /// Alert recipients, also the only chats allowed to send commands.
    #[serde(default)]
    pub chat_ids: Vec<i64>,
}

impl TelegramAppConfig {
    /// True when a token or chat ids are present, whether or not Telegram
    /// is enabled.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.bot_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
            || !self.chat_ids.is_empty()
    }
}

impl fmt::Debug for TelegramAppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramAppConfig")
            .field("enabled", &self.enabled)
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("chat_ids", &self.chat_ids)
            .finish()
    }
}
