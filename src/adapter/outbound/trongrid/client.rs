//! TronGrid REST API client.
//!
//! Only the account transaction listing is used:
//! `GET {api_url}/v1/accounts/{address}/transactions?limit=N`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::dto::TransactionsResponse;
use super::settings::TronGridConfig;
use crate::error::{Error, Result};
use crate::port::outbound::source::{RawTransaction, TransactionSource};

/// Header carrying the TronGrid API key.
pub const API_KEY_HEADER: &str = "TRON-PRO-API-KEY";

/// Longest error body kept in a [`Error::SourceUnavailable`].
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Reason used when TronGrid reports `success: false` without an `error`.
pub const UNSUCCESSFUL_REASON: &str = "request unsuccessful";

/// HTTP client for TronGrid.
///
/// Makes exactly one request per fetch. There is no retry or backoff; the
/// polling loop calls again on its next sweep.
pub struct TronGridClient {
    http: HttpClient,
    api_url: String,
    api_key: Option<String>,
}

impl TronGridClient {
    /// Create a client against `api_url` with default HTTP settings.
    #[must_use]
    pub fn new(api_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: HttpClient::new(),
            api_url: api_url.into(),
            api_key,
        }
    }

    #[must_use]
    pub fn from_config(config: &TronGridConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
        }
    }

    /// Listing URL for `address`.
    #[must_use]
    pub fn transactions_url(&self, address: &str, limit: usize) -> String {
        format!(
            "{}/v1/accounts/{}/transactions?limit={}",
            self.api_url.trim_end_matches('/'),
            address,
            limit
        )
    }
}

#[async_trait]
impl TransactionSource for TronGridClient {
    async fn fetch(&self, address: &str, limit: usize) -> Result<Vec<RawTransaction>> {
        let url = self.transactions_url(address, limit);

        let mut request = self.http.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::SourceUnavailable {
                status: status.as_u16(),
                reason: truncate_body(&body),
            });
        }

        let body: TransactionsResponse = response.json().await?;
        if body.success == Some(false) {
            let error = body.error.as_deref().unwrap_or(UNSUCCESSFUL_REASON);
            return Err(Error::SourceUnavailable {
                status: status.as_u16(),
                reason: truncate_body(error),
            });
        }

        debug!(address = %address, count = body.data.len(), "Fetched transactions");
        Ok(body.data)
    }

    fn source_name(&self) -> &'static str {
        "trongrid"
    }
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() > MAX_ERROR_BODY_CHARS {
        let head: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
