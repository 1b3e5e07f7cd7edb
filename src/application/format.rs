//! Alert text rendering.
//!
//! Output is plain text: no parse mode is applied on delivery, so addresses
//! and ids are written verbatim without escaping.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use rust_decimal::Decimal;

use crate::domain::transaction::Transaction;

/// Alert times are shown at UTC+1. No DST adjustment.
pub const ALERT_UTC_OFFSET_SECS: i32 = 3600;

/// Rendered in place of a missing or out-of-range timestamp.
pub const UNKNOWN_TIME: &str = "Unknown time";

/// Rendered in place of a missing transaction id.
pub const UNKNOWN_TX_ID: &str = "N/A";

const TRONSCAN_TX_URL: &str = "https://tronscan.org/#/transaction/";

const EXCHANGE_NOTICE: &str = "\n\n⚠️ Alert: This transaction involves an Exchange Wallet! ⚠️";

/// Addresses known to belong to exchanges.
///
/// Used to annotate alerts, never to filter them.
#[derive(Debug, Clone, Default)]
pub struct ExchangeWalletSet {
    addresses: HashSet<String>,
}

impl ExchangeWalletSet {
    pub fn new(addresses: impl IntoIterator<Item = String>) -> Self {
        Self {
            addresses: addresses.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, address: &str) -> bool {
        self.addresses.contains(address)
    }

    /// True if either side of `tx` is a known exchange.
    #[must_use]
    pub fn involves(&self, tx: &Transaction) -> bool {
        self.contains(&tx.sender_address) || self.contains(&tx.receiver_address)
    }
}

/// Renders transactions into alert and history messages.
#[derive(Debug, Clone)]
pub struct AlertFormatter {
    exchange_wallets: ExchangeWalletSet,
    offset: FixedOffset,
}

impl AlertFormatter {
    #[must_use]
    pub fn new(exchange_wallets: ExchangeWalletSet) -> Self {
        Self {
            exchange_wallets,
            offset: FixedOffset::east_opt(ALERT_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix()),
        }
    }

    /// Alert for a newly detected transaction on `wallet_name`.
    #[must_use]
    pub fn format_alert(&self, wallet_name: &str, tx: &Transaction) -> String {
        let mut message = format!(
            "🚨 New Transaction Detected!\n\
            \n\
            🔹 Wallet: {}\n\
            🔹 Amount: {} TRX\n\
            🔹 From: {}\n\
            🔹 To: {}\n\
            🔹 Date & Time (UTC+1): {}\n\
            🔹 View on Tronscan: {}",
            wallet_name,
            format_trx(tx.amount_trx()),
            tx.sender_address,
            tx.receiver_address,
            self.format_time(tx.timestamp_millis),
            explorer_link(tx),
        );

        if self.exchange_wallets.involves(tx) {
            message.push_str(EXCHANGE_NOTICE);
        }

        message
    }

    /// One entry of a `/history` listing.
    #[must_use]
    pub fn format_history_entry(&self, tx: &Transaction) -> String {
        format!(
            "• Amount: {} TRX\n  \
            From: {}\n  \
            To: {}\n  \
            Date & Time (UTC+1): {}\n  \
            View on Tronscan: {}",
            format_trx(tx.amount_trx()),
            tx.sender_address,
            tx.receiver_address,
            self.format_time(tx.timestamp_millis),
            explorer_link(tx),
        )
    }

    /// `YYYY-MM-DD HH:MM:SS` at UTC+1, or [`UNKNOWN_TIME`].
    #[must_use]
    pub fn format_time(&self, timestamp_millis: Option<i64>) -> String {
        timestamp_millis
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|utc| {
                utc.with_timezone(&self.offset)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            })
            .unwrap_or_else(|| UNKNOWN_TIME.to_string())
    }
}

/// Tronscan URL for the transaction.
#[must_use]
pub fn explorer_link(tx: &Transaction) -> String {
    let id = tx.id.as_ref().map_or(UNKNOWN_TX_ID, |id| id.as_str());
    format!("{TRONSCAN_TX_URL}{id}")
}

/// Fixed-point TRX with at least one fractional digit (`5.0`, `0.000001`).
#[must_use]
pub fn format_trx(amount: Decimal) -> String {
    let normalized = amount.normalize();
    if normalized.scale() == 0 {
        format!("{normalized}.0")
    } else {
        normalized.to_string()
    }
}
