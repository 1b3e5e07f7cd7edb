//! Command-facing port over the tracking engine.
//!
//! Command front-ends (the Telegram bot, tests) drive the tracker only
//! through this trait, so they never touch the registry or the source
//! directly.

use async_trait::async_trait;

use crate::domain::wallet::WalletEntry;
use crate::error::TrackerError;

#[async_trait]
pub trait WalletTracker: Send + Sync {
    /// Start tracking `address` under `name`, replacing any previous entry.
    fn add_wallet(&self, name: &str, address: &str);

    /// Stop tracking `name`. Returns `false` if no such wallet was tracked.
    fn remove_wallet(&self, name: &str) -> bool;

    /// Point-in-time copy of the tracked wallets.
    fn list_wallets(&self) -> Vec<WalletEntry>;

    /// Fetch and format the most recent transactions of a tracked wallet.
    ///
    /// A source failure yields an empty list, same as a wallet with no
    /// history. Unknown names are reported as [`TrackerError::UnknownWallet`].
    async fn recent_formatted(
        &self,
        name: &str,
        limit: usize,
    ) -> Result<Vec<String>, TrackerError>;
}
