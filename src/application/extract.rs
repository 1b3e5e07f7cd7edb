//! Raw TronGrid record to [`Transaction`] extraction.
//!
//! Only the first contract of a record is inspected; for the transfers this
//! tracker cares about it is the only one.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::ids::TxId;
use crate::domain::transaction::{Transaction, UNKNOWN_ADDRESS};
use crate::error::ExtractError;
use crate::port::outbound::source::RawTransaction;

// Id and timestamps stay untyped: a wrong type there degrades the alert
// instead of dropping the transfer.
#[derive(Debug, Deserialize)]
struct TronRecord {
    #[serde(rename = "txID", default)]
    tx_id: Value,
    #[serde(default)]
    block_timestamp: Value,
    #[serde(default)]
    raw_data: Option<TronRawData>,
}

#[derive(Debug, Deserialize)]
struct TronRawData {
    #[serde(default)]
    timestamp: Value,
    #[serde(default)]
    contract: Vec<TronContract>,
}

#[derive(Debug, Deserialize)]
struct TronContract {
    #[serde(default)]
    parameter: Option<TronParameter>,
}

#[derive(Debug, Deserialize)]
struct TronParameter {
    #[serde(default)]
    value: Option<TronTransfer>,
}

#[derive(Debug, Deserialize)]
struct TronTransfer {
    #[serde(default)]
    owner_address: Option<String>,
    #[serde(default)]
    to_address: Option<String>,
    #[serde(default)]
    amount: Option<i64>,
}

/// Parser for TronGrid account transaction records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionExtractor;

impl TransactionExtractor {
    /// Normalize one raw record.
    ///
    /// Fails when the record is not an object, or when the nested
    /// `raw_data.contract[0].parameter.value` path is missing or has the
    /// wrong JSON type. A missing or wrong-typed id or timestamp is not a
    /// failure: the id becomes `None` and the time renders as unknown.
    pub fn extract(&self, raw: &RawTransaction) -> Result<Transaction, ExtractError> {
        if !raw.is_object() {
            return Err(ExtractError::NotAnObject);
        }

        let record = TronRecord::deserialize(raw).map_err(ExtractError::InvalidShape)?;

        // Zero counts as absent for both timestamp fields.
        let timestamp_millis = millis(&record.block_timestamp).or_else(|| {
            record
                .raw_data
                .as_ref()
                .and_then(|data| millis(&data.timestamp))
        });
        let id = record.tx_id.as_str().and_then(TxId::parse);

        let transfer = record
            .raw_data
            .ok_or(ExtractError::MissingField { path: "raw_data" })?
            .contract
            .into_iter()
            .next()
            .ok_or(ExtractError::MissingField {
                path: "raw_data.contract[0]",
            })?
            .parameter
            .ok_or(ExtractError::MissingField {
                path: "raw_data.contract[0].parameter",
            })?
            .value
            .ok_or(ExtractError::MissingField {
                path: "raw_data.contract[0].parameter.value",
            })?;

        Ok(Transaction {
            id,
            timestamp_millis,
            sender_address: transfer
                .owner_address
                .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string()),
            receiver_address: transfer
                .to_address
                .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string()),
            amount_minor_units: transfer.amount.unwrap_or(0),
        })
    }
}

fn millis(value: &Value) -> Option<i64> {
    value.as_i64().filter(|ts| *ts != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transfer_record() -> RawTransaction {
        json!({
            "txID": "deadbeef",
            "block_timestamp": 1_704_106_800_000_i64,
            "raw_data": {
                "timestamp": 1_704_106_799_000_i64,
                "contract": [{
                    "type": "TransferContract",
                    "parameter": {
                        "value": {
                            "owner_address": "TSender",
                            "to_address": "TReceiver",
                            "amount": 5_000_000
                        }
                    }
                }]
            }
        })
    }

    #[test]
    fn extracts_transfer_fields() {
        let tx = TransactionExtractor.extract(&transfer_record()).unwrap();
        assert_eq!(tx.id, Some(TxId::new("deadbeef")));
        assert_eq!(tx.timestamp_millis, Some(1_704_106_800_000));
        assert_eq!(tx.sender_address, "TSender");
        assert_eq!(tx.receiver_address, "TReceiver");
        assert_eq!(tx.amount_minor_units, 5_000_000);
    }

    #[test]
    fn falls_back_to_raw_data_timestamp() {
        let mut raw = transfer_record();
        raw.as_object_mut().unwrap().remove("block_timestamp");
        let tx = TransactionExtractor.extract(&raw).unwrap();
        assert_eq!(tx.timestamp_millis, Some(1_704_106_799_000));
    }

    #[test]
    fn zero_block_timestamp_counts_as_missing() {
        let mut raw = transfer_record();
        raw["block_timestamp"] = json!(0);
        let tx = TransactionExtractor.extract(&raw).unwrap();
        assert_eq!(tx.timestamp_millis, Some(1_704_106_799_000));
    }

    #[test]
    fn no_timestamp_at_all_is_not_an_error() {
        let raw = json!({
            "txID": "abc",
            "raw_data": {
                "contract": [{ "parameter": { "value": { "amount": 1 } } }]
            }
        });
        let tx = TransactionExtractor.extract(&raw).unwrap();
        assert_eq!(tx.timestamp_millis, None);
    }

    #[test]
    fn missing_transfer_fields_get_defaults() {
        let raw = json!({
            "txID": "abc",
            "raw_data": { "contract": [{ "parameter": { "value": {} } }] }
        });
        let tx = TransactionExtractor.extract(&raw).unwrap();
        assert_eq!(tx.sender_address, UNKNOWN_ADDRESS);
        assert_eq!(tx.receiver_address, UNKNOWN_ADDRESS);
        assert_eq!(tx.amount_minor_units, 0);
    }

    #[test]
    fn empty_or_missing_id_becomes_none() {
        let mut raw = transfer_record();
        raw["txID"] = json!("");
        assert_eq!(TransactionExtractor.extract(&raw).unwrap().id, None);

        raw.as_object_mut().unwrap().remove("txID");
        assert_eq!(TransactionExtractor.extract(&raw).unwrap().id, None);
    }

    #[test]
    fn missing_raw_data_is_malformed() {
        let raw = json!({ "txID": "abc", "block_timestamp": 1 });
        assert!(matches!(
            TransactionExtractor.extract(&raw),
            Err(ExtractError::MissingField { path: "raw_data" })
        ));
    }

    #[test]
    fn empty_contract_list_is_malformed() {
        let raw = json!({ "txID": "abc", "raw_data": { "contract": [] } });
        assert!(matches!(
            TransactionExtractor.extract(&raw),
            Err(ExtractError::MissingField {
                path: "raw_data.contract[0]"
            })
        ));
    }

    #[test]
    fn missing_parameter_value_is_malformed() {
        let raw = json!({ "raw_data": { "contract": [{ "parameter": {} }] } });
        assert!(matches!(
            TransactionExtractor.extract(&raw),
            Err(ExtractError::MissingField {
                path: "raw_data.contract[0].parameter.value"
            })
        ));
    }

    #[test]
    fn wrong_field_type_is_malformed() {
        let mut raw = transfer_record();
        raw["raw_data"]["contract"][0]["parameter"]["value"]["amount"] = json!("lots");
        assert!(matches!(
            TransactionExtractor.extract(&raw),
            Err(ExtractError::InvalidShape(_))
        ));
    }

    #[test]
    fn string_raw_data_timestamp_is_ignored() {
        let mut raw = transfer_record();
        raw["raw_data"]["timestamp"] = json!("not-a-number");
        let tx = TransactionExtractor.extract(&raw).unwrap();
        assert_eq!(tx.timestamp_millis, Some(1_704_106_800_000));
        assert_eq!(tx.amount_minor_units, 5_000_000);
    }

    #[test]
    fn wrong_typed_timestamps_leave_time_unknown() {
        let mut raw = transfer_record();
        raw["block_timestamp"] = json!("soon");
        raw["raw_data"]["timestamp"] = json!({ "ms": 1 });
        let tx = TransactionExtractor.extract(&raw).unwrap();
        assert_eq!(tx.timestamp_millis, None);
        assert_eq!(tx.receiver_address, "TReceiver");
    }

    #[test]
    fn non_string_id_becomes_none() {
        let mut raw = transfer_record();
        raw["txID"] = json!(42);
        let tx = TransactionExtractor.extract(&raw).unwrap();
        assert_eq!(tx.id, None);
        assert_eq!(tx.sender_address, "TSender");
    }

    #[test]
    fn whitespace_id_is_kept_verbatim() {
        let mut raw = transfer_record();
        raw["txID"] = json!(" ");
        assert_eq!(TransactionExtractor.extract(&raw).unwrap().id, Some(TxId::new(" ")));
    }

    #[test]
    fn non_object_is_malformed() {
        assert!(matches!(
            TransactionExtractor.extract(&json!([1, 2, 3])),
            Err(ExtractError::NotAnObject)
        ));
    }
}
