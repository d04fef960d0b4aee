//! Error types for the reader layer.

use crate::codec::CodecError;
use atomic_ledger::LedgerError;
use thiserror::Error;

/// Result type for reader operations.
pub type ReaderResult<T> = Result<T, ReaderError>;

/// Errors that can occur while resolving and decoding entities.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// Transport failure, propagated unchanged from the ledger layer.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// No schema row exists for the requested (collection, schema) pair;
    /// decoding cannot proceed. Distinct from an absent format field on an
    /// existing row, which decodes to nothing.
    #[error("schema {schema} not found in collection {collection}")]
    SchemaNotFound { collection: String, schema: String },

    /// A template decode was attempted without a collection reference.
    #[error("no collection provided")]
    MissingCollection,

    /// A row is missing a column the decode pipeline requires.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// The binary codec rejected a payload.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// A payload column held something other than bytes.
    #[error(transparent)]
    Payload(#[from] atomic_types::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
