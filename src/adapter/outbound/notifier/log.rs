//! Notifier that writes alerts to the log.

use async_trait::async_trait;
use tracing::info;

use crate::error::NotifyError;
use crate::port::outbound::notifier::Notifier;

/// A logging notifier that writes alerts via tracing.
///
/// Used when no chat backend is configured so the tracker still runs.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, recipient: &str, text: &str) -> Result<(), NotifyError> {
        info!(recipient = %recipient, alert = %text, "Alert");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
