//! Notifier port for alert delivery.

use async_trait::async_trait;

use crate::error::NotifyError;

/// Delivers a rendered message to a single recipient.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Failures are reported, never retried; callers log them and move on
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `text` to `recipient`.
    async fn send(&self, recipient: &str, text: &str) -> Result<(), NotifyError>;

    /// Backend name for logging.
    fn name(&self) -> &'static str;
}
