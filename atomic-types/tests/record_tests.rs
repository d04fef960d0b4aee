use atomic_types::{Error, RawRecord};
use pretty_assertions::assert_eq;
use serde_json::json;

fn record(value: serde_json::Value) -> RawRecord {
    RawRecord::from_value(value).unwrap()
}

// ── Typed accessors ─────────────────────────────────────────────

#[test]
fn get_str_returns_string_columns() {
    let r = record(json!({"collection_name": "earlyibmfans", "market_fee": "0.05"}));
    assert_eq!(r.get_str("collection_name"), Some("earlyibmfans"));
    assert_eq!(r.get_str("missing"), None);
}

#[test]
fn get_u64_accepts_numbers_and_numeric_strings() {
    let r = record(json!({"max_supply": 500, "issued_supply": "500", "name": "poster"}));
    assert_eq!(r.get_u64("max_supply"), Some(500));
    assert_eq!(r.get_u64("issued_supply"), Some(500));
    assert_eq!(r.get_u64("name"), None);
}

#[test]
fn get_bool_accepts_integer_flags() {
    let r = record(json!({"allow_notify": 1, "transferable": true, "burnable": 0}));
    assert_eq!(r.get_bool("allow_notify"), Some(true));
    assert_eq!(r.get_bool("transferable"), Some(true));
    assert_eq!(r.get_bool("burnable"), Some(false));
}

// ── Payload extraction ──────────────────────────────────────────

#[test]
fn take_bytes_decodes_hex_strings() {
    let mut r = record(json!({"serialized_data": "0a0b0c"}));
    let bytes = r.take_bytes("serialized_data").unwrap();
    assert_eq!(bytes, Some(vec![0x0a, 0x0b, 0x0c]));
    // The column is consumed.
    assert!(!r.contains_key("serialized_data"));
}

#[test]
fn take_bytes_accepts_byte_arrays() {
    let mut r = record(json!({"serialized_data": [10, 11, 12]}));
    let bytes = r.take_bytes("serialized_data").unwrap();
    assert_eq!(bytes, Some(vec![10, 11, 12]));
}

#[test]
fn take_bytes_absent_or_null_is_none() {
    let mut r = record(json!({"mutable_serialized_data": null}));
    assert_eq!(r.take_bytes("mutable_serialized_data").unwrap(), None);
    assert_eq!(r.take_bytes("immutable_serialized_data").unwrap(), None);
}

#[test]
fn take_bytes_rejects_bad_hex() {
    let mut r = record(json!({"serialized_data": "zz"}));
    let err = r.take_bytes("serialized_data").unwrap_err();
    assert!(matches!(err, Error::InvalidPayload(_)));
}

#[test]
fn take_bytes_rejects_out_of_range_array_elements() {
    let mut r = record(json!({"serialized_data": [10, 300]}));
    let err = r.take_bytes("serialized_data").unwrap_err();
    assert!(matches!(err, Error::InvalidPayload(_)));
}

// ── Construction ────────────────────────────────────────────────

#[test]
fn from_value_rejects_non_objects() {
    let err = RawRecord::from_value(json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, Error::InvalidPayload(_)));
}

#[test]
fn serde_is_transparent() {
    let r = record(json!({"schema_name": "poster"}));
    let serialized = serde_json::to_value(&r).unwrap();
    assert_eq!(serialized, json!({"schema_name": "poster"}));
    let back: RawRecord = serde_json::from_value(serialized).unwrap();
    assert_eq!(back, r);
}
