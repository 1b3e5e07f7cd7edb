//! [`WalletTracker`] implementation backing the command front-ends.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use super::feed::TransactionFeed;
use super::format::AlertFormatter;
use super::registry::WalletRegistry;
use crate::domain::wallet::WalletEntry;
use crate::error::TrackerError;
use crate::port::inbound::tracker::WalletTracker;

/// Default number of entries returned by a history lookup.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

#[derive(Clone)]
pub struct TrackerService {
    registry: Arc<WalletRegistry>,
    feed: TransactionFeed,
    formatter: Arc<AlertFormatter>,
}

impl TrackerService {
    pub fn new(
        registry: Arc<WalletRegistry>,
        feed: TransactionFeed,
        formatter: Arc<AlertFormatter>,
    ) -> Self {
        Self {
            registry,
            feed,
            formatter,
        }
    }
}

#[async_trait]
impl WalletTracker for TrackerService {
    fn add_wallet(&self, name: &str, address: &str) {
        self.registry.add(name, address);
        info!(wallet = %name, address = %address, "Wallet added");
    }

    fn remove_wallet(&self, name: &str) -> bool {
        let removed = self.registry.remove(name);
        if removed {
            info!(wallet = %name, "Wallet removed");
        }
        removed
    }

    fn list_wallets(&self) -> Vec<WalletEntry> {
        self.registry.list()
    }

    async fn recent_formatted(
        &self,
        name: &str,
        limit: usize,
    ) -> Result<Vec<String>, TrackerError> {
        let address = self
            .registry
            .get(name)
            .ok_or_else(|| TrackerError::UnknownWallet(name.to_string()))?;

        let batch = match self.feed.recent(&address, limit).await {
            Ok(batch) => batch,
            Err(e) => {
                warn!(wallet = %name, error = %e, "History fetch failed");
                return Ok(Vec::new());
            }
        };

        Ok(batch
            .transactions
            .iter()
            .map(|tx| self.formatter.format_history_entry(tx))
            .collect())
    }
}
