//! Normalized transfer records.

use rust_decimal::Decimal;

use super::ids::TxId;

/// Number of SUN in one TRX.
pub const SUN_PER_TRX: i64 = 1_000_000;

/// Placeholder used when the provider omits a sender or receiver.
pub const UNKNOWN_ADDRESS: &str = "Unknown";

/// A single on-chain transfer touching a tracked wallet.
///
/// Immutable once extracted. `amount_minor_units` is the source of truth for
/// the amount; conversion to TRX only happens for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Dedup key. `None` when the provider gave no usable identifier.
    pub id: Option<TxId>,
    /// Milliseconds since the Unix epoch, if the record carried a timestamp.
    pub timestamp_millis: Option<i64>,
    pub sender_address: String,
    pub receiver_address: String,
    /// Amount in SUN.
    pub amount_minor_units: i64,
}

impl Transaction {
    /// Amount in TRX, scaled by [`SUN_PER_TRX`].
    #[must_use]
    pub fn amount_trx(&self) -> Decimal {
        Decimal::new(self.amount_minor_units, 6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn tx(amount: i64) -> Transaction {
        Transaction {
            id: Some(TxId::new("tx")),
            timestamp_millis: None,
            sender_address: "TA".into(),
            receiver_address: "TB".into(),
            amount_minor_units: amount,
        }
    }

    #[test]
    fn amount_trx_divides_by_sun_per_trx() {
        assert_eq!(tx(5_000_000).amount_trx(), Decimal::from(5));
        assert_eq!(tx(1_500_000).amount_trx(), Decimal::from_str("1.5").unwrap());
        assert_eq!(tx(1).amount_trx(), Decimal::from_str("0.000001").unwrap());
        assert_eq!(
            tx(SUN_PER_TRX).amount_trx() * Decimal::from(SUN_PER_TRX),
            Decimal::from(SUN_PER_TRX)
        );
    }
}
