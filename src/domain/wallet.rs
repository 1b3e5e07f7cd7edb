//! Tracked wallet entries.

/// A named reference to a watched account address.
///
/// The name is the registry key. The address is opaque and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletEntry {
    pub name: String,
    pub address: String,
}

impl WalletEntry {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}
