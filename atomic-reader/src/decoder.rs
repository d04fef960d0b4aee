//! Record decoding: payload bytes to structured fields, merged over the raw
//! row with a fixed precedence.
//!
//! Merge order (later wins): raw columns minus payloads, then decoded
//! immutable fields, then decoded mutable fields, then the explicit
//! sub-objects (`data`, or `immutable_data`/`mutable_data`) and the
//! collection back-reference.

use crate::codec::PayloadCodec;
use crate::error::{ReaderError, ReaderResult};
use atomic_types::{DecodedFields, RawRecord, SchemaFormat};
use serde_json::Value;

/// Decoded `data` sub-fields that may arrive as JSON-encoded text and are
/// re-parsed into structured values before exposure.
const REPARSED_DATA_FIELDS: [&str; 3] = ["images", "socials", "creator_info"];

/// Payload columns a collection row carries.
const COLLECTION_PAYLOAD: &str = "serialized_data";
/// Payload columns a template row carries.
const TEMPLATE_PAYLOADS: [&str; 2] = ["immutable_serialized_data", "mutable_serialized_data"];

/// Applies `format` to a byte payload.
///
/// A zero-length payload or the empty-format sentinel decodes to an empty
/// mapping, never an error; the codec is only consulted otherwise.
pub fn decode_payload(
    codec: &dyn PayloadCodec,
    format: &SchemaFormat,
    bytes: &[u8],
) -> ReaderResult<DecodedFields> {
    if bytes.is_empty() || format.is_empty() {
        return Ok(DecodedFields::new());
    }
    Ok(codec.decode(format, bytes)?)
}

/// Decodes a collection row against the global collection format.
///
/// The result replaces the payload column with the decoded fields merged at
/// top level plus an explicit `data` sub-object holding the decoded mapping,
/// with known JSON-encoded text fields re-parsed.
pub fn decode_collection_record(
    codec: &dyn PayloadCodec,
    format: &SchemaFormat,
    mut raw: RawRecord,
) -> ReaderResult<RawRecord> {
    let bytes = raw.take_bytes(COLLECTION_PAYLOAD)?.unwrap_or_default();
    let mut data = decode_payload(codec, format, &bytes)?;

    for (name, value) in &data {
        raw.insert(name.clone(), value.clone());
    }

    reparse_json_strings(&mut data);
    raw.insert("data", Value::Object(data));
    Ok(raw)
}

/// Decodes a template row against its schema's format.
///
/// The immutable payload always decodes (absent means empty); the mutable
/// payload decodes only when present. Mutable fields win over immutable
/// fields with the same name, which win over raw columns.
pub fn decode_template_record(
    codec: &dyn PayloadCodec,
    format: &SchemaFormat,
    mut raw: RawRecord,
    collection: &str,
) -> ReaderResult<RawRecord> {
    if collection.is_empty() {
        return Err(ReaderError::MissingCollection);
    }

    let [immutable_column, mutable_column] = TEMPLATE_PAYLOADS;
    let immutable_bytes = raw.take_bytes(immutable_column)?.unwrap_or_default();
    let mutable_bytes = raw.take_bytes(mutable_column)?;

    let immutable_data = decode_payload(codec, format, &immutable_bytes)?;
    let mutable_data = match mutable_bytes {
        Some(bytes) => decode_payload(codec, format, &bytes)?,
        None => DecodedFields::new(),
    };

    for (name, value) in &immutable_data {
        raw.insert(name.clone(), value.clone());
    }
    for (name, value) in &mutable_data {
        raw.insert(name.clone(), value.clone());
    }

    raw.insert("immutable_data", Value::Object(immutable_data));
    raw.insert("mutable_data", Value::Object(mutable_data));
    raw.insert(
        "collection",
        serde_json::json!({ "collection_name": collection }),
    );
    Ok(raw)
}

/// Re-parses known JSON-encoded text fields in place. Non-string values and
/// strings that are not valid JSON pass through untouched.
fn reparse_json_strings(data: &mut DecodedFields) {
    for field in REPARSED_DATA_FIELDS {
        let Some(Value::String(text)) = data.get(field) else {
            continue;
        };
        if let Ok(parsed) = serde_json::from_str::<Value>(text) {
            data.insert(field.to_string(), parsed);
        }
    }
}
