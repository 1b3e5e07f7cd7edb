//! Recording [`Notifier`] for delivery assertions.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::NotifyError;
use crate::port::outbound::notifier::Notifier;

/// One captured delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub recipient: String,
    pub text: String,
}

/// Thread-safe delivery collector.
///
/// Clones share the same log, so a test can keep one handle while the
/// engine owns another.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    deliveries: Arc<Mutex<Vec<Delivery>>>,
    failing: Arc<Mutex<HashSet<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every send to `recipient` fail.
    pub fn fail_for(&self, recipient: &str) {
        self.failing.lock().insert(recipient.to_string());
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.deliveries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.lock().is_empty()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, recipient: &str, text: &str) -> Result<(), NotifyError> {
        if self.failing.lock().contains(recipient) {
            return Err(NotifyError::Delivery {
                recipient: recipient.to_string(),
                reason: "scripted failure".to_string(),
            });
        }

        self.deliveries.lock().push(Delivery {
            recipient: recipient.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
