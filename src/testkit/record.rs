//! Builders for raw TronGrid transaction records.

use serde_json::{json, Value};

use crate::port::outbound::source::RawTransaction;

/// A well-formed TRX transfer record.
pub fn transfer(id: &str, from: &str, to: &str, amount_sun: i64) -> RawTransaction {
    transfer_at(id, from, to, amount_sun, 1_704_106_800_000)
}

/// A transfer record with an explicit `block_timestamp` in milliseconds.
pub fn transfer_at(id: &str, from: &str, to: &str, amount_sun: i64, ts: i64) -> RawTransaction {
    json!({
        "txID": id,
        "block_timestamp": ts,
        "raw_data": {
            "timestamp": ts,
            "contract": [{
                "type": "TransferContract",
                "parameter": {
                    "value": {
                        "owner_address": from,
                        "to_address": to,
                        "amount": amount_sun
                    },
                    "type_url": "type.googleapis.com/protocol.TransferContract"
                }
            }]
        }
    })
}

/// A record whose `raw_data.contract` list is empty.
pub fn without_contract(id: &str) -> RawTransaction {
    json!({
        "txID": id,
        "block_timestamp": 1_704_106_800_000_i64,
        "raw_data": { "contract": [] }
    })
}

/// A TronGrid list response body wrapping `records`.
pub fn response_body(records: Vec<RawTransaction>) -> Value {
    json!({
        "data": records,
        "success": true,
        "meta": { "at": 1_704_106_800_000_i64, "page_size": 10 }
    })
}
