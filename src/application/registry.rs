//! Thread-safe registry of tracked wallets.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::domain::wallet::WalletEntry;

/// Name to address map shared between the polling loop and command handlers.
///
/// Every operation takes the lock once, so readers only ever see the result
/// of whole add/remove calls. Reads hand out owned copies, never a live view.
#[derive(Debug, Default)]
pub struct WalletRegistry {
    wallets: RwLock<BTreeMap<String, String>>,
}

impl WalletRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry pre-populated with `entries`. Later duplicates win.
    pub fn with_wallets(entries: impl IntoIterator<Item = WalletEntry>) -> Self {
        let wallets = entries
            .into_iter()
            .map(|entry| (entry.name, entry.address))
            .collect();
        Self {
            wallets: RwLock::new(wallets),
        }
    }

    /// Insert or overwrite the entry for `name`.
    pub fn add(&self, name: impl Into<String>, address: impl Into<String>) {
        self.wallets.write().insert(name.into(), address.into());
    }

    /// Delete the entry for `name`, returning whether it existed.
    pub fn remove(&self, name: &str) -> bool {
        self.wallets.write().remove(name).is_some()
    }

    /// Address tracked under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.wallets.read().get(name).cloned()
    }

    /// All entries, ordered by name.
    #[must_use]
    pub fn list(&self) -> Vec<WalletEntry> {
        self.wallets
            .read()
            .iter()
            .map(|(name, address)| WalletEntry::new(name.clone(), address.clone()))
            .collect()
    }

    /// Copy taken once per polling cycle.
    ///
    /// Changes made after this returns are picked up by the next cycle.
    #[must_use]
    pub fn snapshot(&self) -> Vec<WalletEntry> {
        self.list()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.wallets.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wallets.read().is_empty()
    }
}
