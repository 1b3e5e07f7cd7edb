//! Domain identifier types with proper encapsulation.

use std::fmt;

/// Provider-assigned transaction identifier.
///
/// Never empty: an empty identifier from the provider is represented as the
/// absence of a `TxId`, see [`TxId::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxId(String);

impl TxId {
    /// Create a new TxId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build a TxId, mapping empty input to `None`. Anything else is kept
    /// verbatim, whitespace included.
    pub fn parse(id: &str) -> Option<Self> {
        if id.is_empty() {
            None
        } else {
            Some(Self::new(id))
        }
    }

    /// Get the transaction ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TxId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TxId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
