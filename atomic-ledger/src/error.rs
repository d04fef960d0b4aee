//! Error types for the ledger layer.

use thiserror::Error;

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors that can occur talking to the remote ledger node.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Transport-level failure (connection, timeout, malformed response).
    #[error("network error: {0}")]
    Network(String),

    /// The node answered with a non-success HTTP status.
    #[error("ledger api error: status {status}: {body}")]
    Api { status: u16, body: String },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
