//! Fan-out of rendered alerts to the configured recipients.

use std::sync::Arc;

use tracing::{debug, error};

use crate::port::outbound::notifier::Notifier;

/// Per-alert delivery tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub delivered: usize,
    pub failed: usize,
}

/// Sends every alert once to each recipient through a single notifier.
///
/// A failed recipient is logged and skipped; it never blocks the others
/// and the alert is not queued for another attempt.
#[derive(Clone)]
pub struct AlertDispatcher {
    notifier: Arc<dyn Notifier>,
    recipients: Vec<String>,
}

impl AlertDispatcher {
    pub fn new(notifier: Arc<dyn Notifier>, recipients: Vec<String>) -> Self {
        Self {
            notifier,
            recipients,
        }
    }

    pub async fn dispatch(&self, text: &str) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();

        for recipient in &self.recipients {
            match self.notifier.send(recipient, text).await {
                Ok(()) => {
                    debug!(
                        notifier = self.notifier.name(),
                        recipient = %recipient,
                        "Alert delivered"
                    );
                    outcome.delivered += 1;
                }
                Err(e) => {
                    error!(
                        notifier = self.notifier.name(),
                        recipient = %recipient,
                        error = %e,
                        "Failed to deliver alert"
                    );
                    outcome.failed += 1;
                }
            }
        }

        outcome
    }
}
