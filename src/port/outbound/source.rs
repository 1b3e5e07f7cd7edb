//! Transaction source port.

use async_trait::async_trait;

use crate::error::Error;

/// One provider record, schema owned by the provider.
pub type RawTransaction = serde_json::Value;

/// Fetches recent transactions for an account from an upstream provider.
///
/// # Implementation Notes
///
/// - Records are returned newest first, as the provider orders them
/// - The same record may be returned on consecutive calls; deduplication is
///   the caller's job
/// - Implementations must not retry; the next polling cycle is the retry
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetch at most `limit` of the most recent transactions for `address`.
    async fn fetch(&self, address: &str, limit: usize) -> Result<Vec<RawTransaction>, Error>;

    /// Provider name for logging.
    fn source_name(&self) -> &'static str;
}
