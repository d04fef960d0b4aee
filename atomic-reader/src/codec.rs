//! The external binary serialization capability.

use atomic_types::{DecodedFields, SchemaFormat};
use thiserror::Error;

/// Failure reported by a codec implementation.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct CodecError(pub String);

/// Binary payload codec, consumed as a black box.
///
/// The codec interprets each attribute's type tag; this core never does.
/// Implementations are not called for empty payloads or empty formats — the
/// decode pipeline short-circuits those to an empty mapping first.
pub trait PayloadCodec: Send + Sync {
    /// Decodes `bytes` laid out according to `format`.
    fn decode(&self, format: &SchemaFormat, bytes: &[u8]) -> Result<DecodedFields, CodecError>;

    /// Inverse of [`decode`](PayloadCodec::decode).
    fn encode(&self, format: &SchemaFormat, fields: &DecodedFields) -> Result<Vec<u8>, CodecError>;
}
