//! Polling loop: snapshot, fetch, extract, dedup, format, dispatch, sleep.
//!
//! One sweep visits every wallet in the registry snapshot sequentially.
//! Nothing that goes wrong inside a sweep stops the loop: source failures
//! count as an empty batch, malformed records are skipped, and delivery
//! failures are logged by the dispatcher.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::dispatch::AlertDispatcher;
use super::feed::TransactionFeed;
use super::format::AlertFormatter;
use super::registry::WalletRegistry;
use super::seen::SeenSet;
use crate::domain::wallet::WalletEntry;

/// Default pause between sweeps.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Default number of recent records requested per wallet per sweep.
pub const DEFAULT_FETCH_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub poll_interval: Duration,
    pub fetch_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            fetch_limit: DEFAULT_FETCH_LIMIT,
        }
    }
}

/// Counters for one sweep.
///
/// `alerts_sent` counts alerts that reached at least one recipient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub wallets_polled: usize,
    pub fetch_failures: usize,
    pub records_fetched: usize,
    pub malformed_records: usize,
    pub duplicates_suppressed: usize,
    pub alerts_sent: usize,
    pub delivery_failures: usize,
}

pub struct PollingEngine {
    registry: Arc<WalletRegistry>,
    seen: Arc<SeenSet>,
    feed: TransactionFeed,
    formatter: Arc<AlertFormatter>,
    dispatcher: AlertDispatcher,
    config: EngineConfig,
}

impl PollingEngine {
    pub fn new(
        registry: Arc<WalletRegistry>,
        seen: Arc<SeenSet>,
        feed: TransactionFeed,
        formatter: Arc<AlertFormatter>,
        dispatcher: AlertDispatcher,
        config: EngineConfig,
    ) -> Self {
        Self {
            registry,
            seen,
            feed,
            formatter,
            dispatcher,
            config,
        }
    }

    /// Run sweeps until `shutdown` flips to `true` or its sender is dropped.
    ///
    /// The signal is only observed between sweeps; a sweep in progress always
    /// completes.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        info!(
            interval_ms = self.config.poll_interval.as_millis() as u64,
            fetch_limit = self.config.fetch_limit,
            "Polling engine started"
        );

        loop {
            let stop = *shutdown.borrow();
            if stop {
                break;
            }

            let report = self.run_cycle().await;
            debug!(?report, "Sweep complete");

            tokio::select! {
                () = tokio::time::sleep(self.config.poll_interval) => {}
                result = shutdown.changed() => {
                    if result.is_err() {
                        info!("Shutdown channel closed");
                        break;
                    }
                }
            }
        }

        info!("Polling engine stopped");
    }

    /// One full sweep over the wallets tracked right now.
    pub async fn run_cycle(&self) -> CycleReport {
        let wallets = self.registry.snapshot();
        let mut report = CycleReport::default();

        for wallet in &wallets {
            self.poll_wallet(wallet, &mut report).await;
            report.wallets_polled += 1;
        }

        report
    }

    async fn poll_wallet(&self, wallet: &WalletEntry, report: &mut CycleReport) {
        let batch = match self
            .feed
            .recent(&wallet.address, self.config.fetch_limit)
            .await
        {
            Ok(batch) => batch,
            Err(e) => {
                report.fetch_failures += 1;
                warn!(
                    wallet = %wallet.name,
                    address = %wallet.address,
                    error = %e,
                    "Failed to fetch transactions"
                );
                return;
            }
        };

        report.records_fetched += batch.fetched;
        report.malformed_records += batch.malformed;

        for tx in &batch.transactions {
            // Records without an id cannot be deduplicated and are alerted
            // every time they show up.
            if let Some(id) = &tx.id {
                if !self.seen.mark_if_new(id) {
                    report.duplicates_suppressed += 1;
                    continue;
                }
            }

            let text = self.formatter.format_alert(&wallet.name, tx);
            let outcome = self.dispatcher.dispatch(&text).await;
            if outcome.delivered > 0 {
                report.alerts_sent += 1;
            }
            report.delivery_failures += outcome.failed;

            info!(
                wallet = %wallet.name,
                tx_id = tx.id.as_ref().map_or("", |id| id.as_str()),
                amount_sun = tx.amount_minor_units,
                from = %tx.sender_address,
                to = %tx.receiver_address,
                delivered = outcome.delivered,
                "New transaction"
            );
        }
    }
}
