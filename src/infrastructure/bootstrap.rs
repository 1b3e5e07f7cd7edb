//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::notifier::log::LogNotifier;
#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::notifier::{TelegramConfig, TelegramNotifier};
use crate::adapter::outbound::trongrid::client::TronGridClient;
use crate::application::dispatch::AlertDispatcher;
use crate::application::engine::PollingEngine;
use crate::application::feed::TransactionFeed;
use crate::application::format::{AlertFormatter, ExchangeWalletSet};
use crate::application::registry::WalletRegistry;
use crate::application::seen::SeenSet;
use crate::application::tracker::TrackerService;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::notifier::Notifier;
use crate::port::outbound::source::TransactionSource;

/// Recipient label used when alerts only go to the log.
pub const LOG_RECIPIENT: &str = "log";

/// Everything the runtime needs, sharing one registry between the engine
/// and the command-facing service.
pub struct TrackerComponents {
    pub registry: Arc<WalletRegistry>,
    pub engine: PollingEngine,
    pub service: Arc<TrackerService>,
}

impl TrackerComponents {
    /// Wire the core around the given source and notifier.
    pub fn assemble(
        config: &Config,
        source: Arc<dyn TransactionSource>,
        notifier: Arc<dyn Notifier>,
        recipients: Vec<String>,
    ) -> Self {
        let registry = Arc::new(WalletRegistry::with_wallets(config.initial_wallets()));
        let seen = Arc::new(SeenSet::new());
        let feed = TransactionFeed::new(source);
        let formatter = Arc::new(AlertFormatter::new(ExchangeWalletSet::new(
            config.exchange_wallets.iter().cloned(),
        )));
        let dispatcher = AlertDispatcher::new(notifier, recipients);

        let service = Arc::new(TrackerService::new(
            Arc::clone(&registry),
            feed.clone(),
            Arc::clone(&formatter),
        ));
        let engine = PollingEngine::new(
            Arc::clone(&registry),
            seen,
            feed,
            formatter,
            dispatcher,
            config.tracker.engine_config(),
        );

        Self {
            registry,
            engine,
            service,
        }
    }
}

/// Build the TronGrid source from configuration.
pub(crate) fn build_source(config: &Config) -> Arc<dyn TransactionSource> {
    let client = TronGridClient::from_config(&config.trongrid);
    info!(
        api_url = %config.trongrid.api_url,
        authenticated = config.trongrid.api_key.is_some(),
        "TronGrid source configured"
    );
    Arc::new(client)
}

/// Telegram settings, when enabled and complete.
#[cfg(feature = "telegram")]
pub(crate) fn telegram_settings(config: &Config) -> Option<TelegramConfig> {
    if !config.telegram.enabled {
        return None;
    }
    let token = config.telegram.bot_token.clone()?;
    if config.telegram.chat_ids.is_empty() {
        return None;
    }
    Some(TelegramConfig::new(token, config.telegram.chat_ids.clone()))
}

/// Pick the alert notifier and its recipients.
#[cfg(feature = "telegram")]
pub(crate) fn build_notifier(config: &Config) -> (Arc<dyn Notifier>, Vec<String>) {
    match telegram_settings(config) {
        Some(tg_config) => {
            info!(chats = tg_config.chat_ids.len(), "Telegram notifier enabled");
            (
                Arc::new(TelegramNotifier::new(&tg_config)),
                tg_config.recipients(),
            )
        }
        None => {
            if config.telegram.enabled {
                warn!("Telegram enabled but TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set");
            } else if config.telegram.has_credentials() {
                warn!("Telegram credentials found but telegram.enabled is false");
            }
            log_notifier()
        }
    }
}

/// Pick the alert notifier and its recipients (non-telegram variant).
#[cfg(not(feature = "telegram"))]
pub(crate) fn build_notifier(config: &Config) -> (Arc<dyn Notifier>, Vec<String>) {
    if config.telegram.enabled {
        warn!("Telegram enabled in config but the telegram feature is not compiled in");
    }
    log_notifier()
}

fn log_notifier() -> (Arc<dyn Notifier>, Vec<String>) {
    info!("Alerts will be written to the log");
    (Arc::new(LogNotifier), vec![LOG_RECIPIENT.to_string()])
}
