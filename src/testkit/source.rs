//! In-memory [`TransactionSource`] for tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::port::outbound::source::{RawTransaction, TransactionSource};

struct ScriptedFailure {
    status: u16,
    reason: String,
}

/// A source that answers from pre-loaded data.
///
/// Each address has a standing answer returned on every call, mimicking a
/// provider that keeps returning its last N records. One-shot failures queued
/// with [`ScriptedSource::push_failure`] take precedence until they are used
/// up. Unknown addresses get an empty list.
#[derive(Default)]
pub struct ScriptedSource {
    standing: Mutex<HashMap<String, Vec<RawTransaction>>>,
    failures: Mutex<HashMap<String, VecDeque<ScriptedFailure>>>,
    calls: Arc<AtomicU32>,
    limits: Mutex<Vec<usize>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records returned for `address` whenever nothing is queued.
    pub fn with_records(self, address: &str, records: Vec<RawTransaction>) -> Self {
        self.standing.lock().insert(address.to_string(), records);
        self
    }

    /// Queue a one-shot failure for the next fetch of `address`.
    pub fn push_failure(&self, address: &str, status: u16, reason: &str) {
        self.failures
            .lock()
            .entry(address.to_string())
            .or_default()
            .push_back(ScriptedFailure {
                status,
                reason: reason.to_string(),
            });
    }

    /// Number of fetches served so far.
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// `limit` argument of every fetch, in call order.
    pub fn requested_limits(&self) -> Vec<usize> {
        self.limits.lock().clone()
    }
}

#[async_trait]
impl TransactionSource for ScriptedSource {
    async fn fetch(&self, address: &str, limit: usize) -> Result<Vec<RawTransaction>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.limits.lock().push(limit);

        let failure = self
            .failures
            .lock()
            .get_mut(address)
            .and_then(VecDeque::pop_front);
        if let Some(ScriptedFailure { status, reason }) = failure {
            return Err(Error::SourceUnavailable { status, reason });
        }

        let records = self
            .standing
            .lock()
            .get(address)
            .cloned()
            .unwrap_or_default();

        Ok(records.into_iter().take(limit).collect())
    }

    fn source_name(&self) -> &'static str {
        "scripted"
    }
}
