//! Telegram delivery and command listener.
//!
//! [`TelegramNotifier`] implements the [`Notifier`] port by sending plain
//! text messages. [`spawn_command_listener`] runs the inbound bot that lets
//! the configured chats manage tracked wallets.
//!
//! Requires the `telegram` feature to be enabled.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{BotCommand, Recipient};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::error::NotifyError;
use crate::port::inbound::tracker::WalletTracker;
use crate::port::outbound::notifier::Notifier;

use super::auth::command_response_for_message;
use super::command::bot_commands;
use super::control::TelegramControl;

/// Bot credentials and the chats it serves.
///
/// Every chat in `chat_ids` receives alerts and may issue commands.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Alert recipients and authorized command chats.
    pub chat_ids: Vec<i64>,
}

impl TelegramConfig {
    #[must_use]
    pub fn new(bot_token: impl Into<String>, chat_ids: Vec<i64>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_ids,
        }
    }

    /// Chat ids as notifier recipient strings.
    #[must_use]
    pub fn recipients(&self) -> Vec<String> {
        self.chat_ids.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_ids", &self.chat_ids)
            .finish()
    }
}

/// Turn a recipient string into a Telegram target.
///
/// Numeric strings are chat ids; `@name` addresses a public channel.
pub fn parse_recipient(recipient: &str) -> Result<Recipient, NotifyError> {
    let trimmed = recipient.trim();
    if let Ok(id) = trimmed.parse::<i64>() {
        return Ok(Recipient::Id(ChatId(id)));
    }
    if trimmed.len() > 1 && trimmed.starts_with('@') {
        return Ok(Recipient::ChannelUsername(trimmed.to_string()));
    }
    Err(NotifyError::InvalidRecipient(recipient.to_string()))
}

/// Sends alerts through the Telegram Bot API.
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            bot: Bot::new(&config.bot_token),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, recipient: &str, text: &str) -> Result<(), NotifyError> {
        let target = parse_recipient(recipient)?;
        self.bot
            .send_message(target, text)
            .await
            .map(|_| ())
            .map_err(|e| NotifyError::Delivery {
                recipient: recipient.to_string(),
                reason: e.to_string(),
            })
    }

    fn name(&self) -> &'static str {
        "telegram"
    }
}

/// Spawn the background worker that answers bot commands.
pub fn spawn_command_listener(
    config: TelegramConfig,
    tracker: Arc<dyn WalletTracker>,
    history_limit: usize,
) -> JoinHandle<()> {
    let control = TelegramControl::new(tracker, history_limit);
    tokio::spawn(telegram_command_worker(config, control))
}

/// Background worker that handles inbound Telegram commands.
async fn telegram_command_worker(config: TelegramConfig, control: TelegramControl) {
    let bot = Bot::new(&config.bot_token);
    let allowed_chats: Arc<Vec<ChatId>> =
        Arc::new(config.chat_ids.iter().copied().map(ChatId).collect());

    // Register commands with Telegram so they appear in the "/" menu
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!(
        chats = config.chat_ids.len(),
        "Telegram command listener started"
    );

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let control = control.clone();
        let allowed_chats = Arc::clone(&allowed_chats);
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            if let Some(response) =
                command_response_for_message(text, msg.chat.id, &allowed_chats, &control).await
            {
                if let Err(e) = bot.send_message(msg.chat.id, response).await {
                    error!(error = %e, "Failed to send Telegram command response");
                }
            }

            respond(())
        }
    })
    .await;
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
