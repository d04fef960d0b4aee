//! Remote table access for atomic-index.
//!
//! The ledger node exposes its contract tables through a paginated key-range
//! scan API. This crate wraps that capability behind:
//! - [`LedgerClient`] — the async trait the rest of the workspace consumes
//! - [`HttpLedgerClient`] — the production `reqwest` adapter
//!   (`POST {endpoint}/v1/chain/get_table_rows`)
//! - [`TableScanner`] — cursor pagination (`scan_all`) and single-row
//!   lookups (`scan_one`) on top of any client
//!
//! Transport failures propagate unchanged; no retry or backoff happens at
//! this layer.

mod client;
mod error;
mod request;
mod scanner;

pub use client::{HttpLedgerClient, LedgerClient, LedgerConfig};
pub use error::{LedgerError, LedgerResult};
pub use request::{TableRequest, TableRowsPage};
pub use scanner::TableScanner;
