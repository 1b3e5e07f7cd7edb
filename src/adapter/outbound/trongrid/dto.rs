//! TronGrid response payloads.

use serde::Deserialize;

use crate::port::outbound::source::RawTransaction;

/// Body of `GET /v1/accounts/{address}/transactions`.
///
/// Records are kept opaque here; field extraction happens per record so one
/// odd record cannot fail the whole page.
#[derive(Debug, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub data: Vec<RawTransaction>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}
