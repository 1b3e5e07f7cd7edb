use std::sync::Arc;

use trx_tracker::infrastructure::bootstrap::TrackerComponents;
use trx_tracker::infrastructure::config::settings::Config;
use trx_tracker::testkit::notifier::RecordingNotifier;
use trx_tracker::testkit::source::ScriptedSource;

/// A fully wired tracker over in-memory doubles.
pub struct TestTracker {
    pub components: TrackerComponents,
    pub source: Arc<ScriptedSource>,
    pub notifier: RecordingNotifier,
}

/// Default config with the given wallets and exchange addresses.
pub fn config(wallets: &[(&str, &str)], exchanges: &[&str]) -> Config {
    let mut config = Config::default();
    config.wallets = wallets
        .iter()
        .map(|(name, address)| (name.to_string(), address.to_string()))
        .collect();
    config.exchange_wallets = exchanges.iter().map(|a| a.to_string()).collect();
    config
}

pub fn tracker(config: &Config, source: ScriptedSource, recipients: &[&str]) -> TestTracker {
    let source = Arc::new(source);
    let notifier = RecordingNotifier::new();
    let components = TrackerComponents::assemble(
        config,
        source.clone(),
        Arc::new(notifier.clone()),
        recipients.iter().map(|r| r.to_string()).collect(),
    );

    TestTracker {
        components,
        source,
        notifier,
    }
}
