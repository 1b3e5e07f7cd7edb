//! Tracker runtime lifecycle.

#[cfg(feature = "telegram")]
use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::notifier::spawn_command_listener;
use crate::application::engine::CycleReport;
use crate::error::Result;
#[cfg(feature = "telegram")]
use crate::infrastructure::bootstrap::telegram_settings;
use crate::infrastructure::bootstrap::{build_notifier, build_source, TrackerComponents};
use crate::infrastructure::config::settings::Config;
#[cfg(feature = "telegram")]
use crate::port::inbound::tracker::WalletTracker;

/// Run the polling engine, and the Telegram command listener when
/// configured, until `shutdown` fires.
pub async fn run_with_shutdown(config: Config, shutdown: watch::Receiver<bool>) -> Result<()> {
    let components = wire(&config);
    info!(
        wallets = components.registry.len(),
        exchange_wallets = config.exchange_wallets.len(),
        "Starting trx-tracker"
    );

    #[cfg(feature = "telegram")]
    let listener = telegram_settings(&config).map(|settings| {
        let tracker: Arc<dyn WalletTracker> = components.service.clone();
        spawn_command_listener(settings, tracker, config.tracker.history_limit)
    });

    components.engine.run(shutdown).await;

    #[cfg(feature = "telegram")]
    if let Some(handle) = listener {
        handle.abort();
        info!("Telegram command listener stopped");
    }

    Ok(())
}

/// Run a single sweep over the configured wallets and return its counters.
pub async fn run_once(config: Config) -> Result<CycleReport> {
    let components = wire(&config);
    info!(wallets = components.registry.len(), "Running a single sweep");
    let report = components.engine.run_cycle().await;
    info!(
        alerts = report.alerts_sent,
        fetch_failures = report.fetch_failures,
        "Sweep finished"
    );
    Ok(report)
}

fn wire(config: &Config) -> TrackerComponents {
    let source = build_source(config);
    let (notifier, recipients) = build_notifier(config);
    TrackerComponents::assemble(config, source, notifier, recipients)
}
