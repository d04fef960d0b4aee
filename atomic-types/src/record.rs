//! Raw table rows and decoded field mappings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// The mapping produced by decoding a binary payload: field name to decoded
/// value, where values use the closed `serde_json::Value` variant set.
pub type DecodedFields = Map<String, Value>;

/// An opaque table row as returned by the remote ledger.
///
/// Column names and value shapes are the table's business; this type only
/// offers typed accessors for the columns the reader and model layers care
/// about, plus extraction of hex-encoded binary payload columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wraps an existing JSON object.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Converts a JSON value into a record. Fails on non-object values.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::InvalidPayload(format!(
                "expected a table row object, got {other}"
            ))),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(column.into(), value)
    }

    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.0.remove(column)
    }

    pub fn contains_key(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    /// Extracts a string column.
    pub fn get_str(&self, column: &str) -> Option<&str> {
        self.0.get(column).and_then(|v| v.as_str())
    }

    /// Extracts an unsigned integer column. The ledger serializes some
    /// numeric columns as strings, so both forms are accepted.
    pub fn get_u64(&self, column: &str) -> Option<u64> {
        match self.0.get(column)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Extracts a boolean column. The ledger serializes flags as 0/1
    /// integers, so non-zero numbers count as true.
    pub fn get_bool(&self, column: &str) -> Option<bool> {
        match self.0.get(column)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => Some(n.as_i64().is_some_and(|i| i != 0)),
            _ => None,
        }
    }

    /// Removes a binary payload column and returns its bytes.
    ///
    /// Payload columns arrive hex-encoded when the ledger responds in JSON
    /// mode; a byte-array form is accepted as well. An absent or null column
    /// yields `None`, which decoders treat as an empty payload.
    pub fn take_bytes(&mut self, column: &str) -> Result<Option<Vec<u8>>> {
        match self.0.remove(column) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(hex_str)) => hex::decode(&hex_str)
                .map(Some)
                .map_err(|e| Error::InvalidPayload(format!("column {column}: {e}"))),
            Some(Value::Array(items)) => {
                let mut bytes = Vec::with_capacity(items.len());
                for item in items {
                    let byte = item
                        .as_u64()
                        .and_then(|n| u8::try_from(n).ok())
                        .ok_or_else(|| {
                            Error::InvalidPayload(format!("column {column}: non-byte element"))
                        })?;
                    bytes.push(byte);
                }
                Ok(Some(bytes))
            }
            Some(other) => Err(Error::InvalidPayload(format!(
                "column {column}: expected hex string or byte array, got {other}"
            ))),
        }
    }

    /// Consumes the record, returning the underlying JSON object.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// The underlying JSON object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<RawRecord> for Value {
    fn from(record: RawRecord) -> Self {
        Value::Object(record.0)
    }
}
