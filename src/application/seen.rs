//! Set of transaction ids that already produced an alert.

use dashmap::DashSet;

use crate::domain::ids::TxId;

/// Processed transaction ids, kept for the life of the process.
///
/// Growth is unbounded: ids are never evicted, so a transaction that keeps
/// showing up in the provider's recent window is only ever alerted once.
#[derive(Debug, Default)]
pub struct SeenSet {
    ids: DashSet<TxId>,
}

impl SeenSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id`, returning `true` only for the call that inserted it.
    ///
    /// Check and insert happen under one shard lock, so concurrent callers
    /// racing on the same id see exactly one `true`.
    pub fn mark_if_new(&self, id: &TxId) -> bool {
        self.ids.insert(id.clone())
    }

    #[must_use]
    pub fn contains(&self, id: &TxId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
