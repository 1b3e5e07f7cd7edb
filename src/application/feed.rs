//! Fetch-and-extract pipeline shared by the polling loop and `/history`.

use std::sync::Arc;

use tracing::warn;

use super::extract::TransactionExtractor;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use crate::port::outbound::source::TransactionSource;

/// Transactions pulled for one wallet, with the records that failed to parse
/// already dropped.
#[derive(Debug, Clone, Default)]
pub struct FeedBatch {
    /// Successfully extracted transactions, in provider order.
    pub transactions: Vec<Transaction>,
    /// Raw records returned by the source.
    pub fetched: usize,
    /// Records skipped because extraction failed.
    pub malformed: usize,
}

#[derive(Clone)]
pub struct TransactionFeed {
    source: Arc<dyn TransactionSource>,
    extractor: TransactionExtractor,
}

impl TransactionFeed {
    pub fn new(source: Arc<dyn TransactionSource>) -> Self {
        Self {
            source,
            extractor: TransactionExtractor,
        }
    }

    /// Fetch up to `limit` records for `address` and extract them.
    ///
    /// Only a source failure is returned as an error. Malformed records are
    /// logged, counted and skipped.
    pub async fn recent(&self, address: &str, limit: usize) -> Result<FeedBatch> {
        let records = self.source.fetch(address, limit).await?;
        let fetched = records.len();
        let mut transactions = Vec::with_capacity(fetched);
        let mut malformed = 0;

        for (index, raw) in records.iter().enumerate() {
            match self.extractor.extract(raw) {
                Ok(tx) => transactions.push(tx),
                Err(e) => {
                    malformed += 1;
                    warn!(
                        source = self.source.source_name(),
                        address = %address,
                        index,
                        error = %e,
                        "Skipping malformed transaction record"
                    );
                }
            }
        }

        Ok(FeedBatch {
            transactions,
            fetched,
            malformed,
        })
    }
}
