//! Telegram command execution against the wallet tracker.

use std::sync::Arc;

use crate::port::inbound::tracker::WalletTracker;

use super::command::{command_help, TelegramCommand};

/// Command executor shared by every inbound message.
#[derive(Clone)]
pub struct TelegramControl {
    tracker: Arc<dyn WalletTracker>,
    history_limit: usize,
}

impl TelegramControl {
    #[must_use]
    pub fn new(tracker: Arc<dyn WalletTracker>, history_limit: usize) -> Self {
        Self {
            tracker,
            history_limit,
        }
    }

    /// Execute one parsed command and return response text.
    pub async fn execute(&self, command: TelegramCommand) -> String {
        match command {
            TelegramCommand::Start | TelegramCommand::Help => command_help().to_string(),
            TelegramCommand::AddWallet { name, address } => {
                self.tracker.add_wallet(&name, &address);
                format!("Wallet '{name}' added for tracking.")
            }
            TelegramCommand::RemoveWallet { name } => {
                if self.tracker.remove_wallet(&name) {
                    format!("Wallet '{name}' removed from tracking.")
                } else {
                    format!("Wallet '{name}' not found.")
                }
            }
            TelegramCommand::ListWallets => self.list_text(),
            TelegramCommand::History { name } => self.history_text(&name).await,
        }
    }

    fn list_text(&self) -> String {
        let wallets = self.tracker.list_wallets();
        if wallets.is_empty() {
            return "No wallets are currently being tracked.".to_string();
        }

        let mut response = String::from("Tracked Wallets:\n");
        for wallet in wallets {
            response.push_str(&format!("- {}: {}\n", wallet.name, wallet.address));
        }
        response
    }

    async fn history_text(&self, name: &str) -> String {
        match self.tracker.recent_formatted(name, self.history_limit).await {
            Err(err) => err.to_string(),
            Ok(entries) if entries.is_empty() => "No transactions found.".to_string(),
            Ok(entries) => format!(
                "Recent transactions for {}:\n\n{}",
                name,
                entries.join("\n\n")
            ),
        }
    }
}
