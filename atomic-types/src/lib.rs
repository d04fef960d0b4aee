//! Core type definitions for atomic-index.
//!
//! This crate defines the fundamental types shared by the ledger, reader,
//! and model crates:
//! - [`Network`] — the closed set of ledger deployments we read from
//! - [`RawRecord`] — an opaque table row as returned by the remote ledger
//! - [`SchemaFormat`] / [`FormatAttribute`] — the ordered field layout used
//!   to decode a row's binary payload
//! - [`DecodedFields`] — the mapping produced by decoding a payload
//!
//! Transport, decoding, and normalization logic live in their own crates,
//! not here.

mod format;
mod network;
mod record;

pub use format::{FormatAttribute, SchemaFormat};
pub use network::Network;
pub use record::{DecodedFields, RawRecord};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid payload encoding: {0}")]
    InvalidPayload(String),

    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}
