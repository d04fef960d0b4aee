//! Decode-format lookup.
//!
//! Collections share one global format stored on the contract's config row;
//! templates use the format of their named schema, scoped to the owning
//! collection.

use crate::error::{ReaderError, ReaderResult};
use atomic_ledger::{LedgerClient, TableRequest, TableScanner};
use atomic_types::SchemaFormat;
use tracing::debug;

/// Resolves the [`SchemaFormat`] applicable to a record.
pub struct FormatResolver<C: LedgerClient> {
    scanner: TableScanner<C>,
    contract: String,
}

impl<C: LedgerClient> FormatResolver<C> {
    pub fn new(scanner: TableScanner<C>, contract: impl Into<String>) -> Self {
        Self {
            scanner,
            contract: contract.into(),
        }
    }

    /// The global collection format from the contract's config row.
    ///
    /// A missing row or a config row without a `collection_format` field
    /// yields the empty sentinel — "decode nothing", not an error.
    pub async fn collection_format(&self) -> ReaderResult<SchemaFormat> {
        let request = TableRequest::new(&self.contract, &self.contract, "config");
        let Some(mut row) = self.scanner.scan_one(request).await? else {
            debug!("no config row; using empty collection format");
            return Ok(SchemaFormat::empty());
        };

        match row.remove("collection_format") {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(SchemaFormat::empty()),
        }
    }

    /// The format of one schema within a collection.
    ///
    /// A missing schema row is a caller error: without it the template's
    /// payload bytes cannot be interpreted.
    pub async fn schema_format(
        &self,
        collection: &str,
        schema_name: &str,
    ) -> ReaderResult<SchemaFormat> {
        let request = TableRequest::new(&self.contract, collection, "schemas")
            .with_exact_key(schema_name);
        let Some(mut row) = self.scanner.scan_one(request).await? else {
            return Err(ReaderError::SchemaNotFound {
                collection: collection.to_string(),
                schema: schema_name.to_string(),
            });
        };

        debug!(collection, schema_name, "resolved schema format");
        match row.remove("format") {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(SchemaFormat::empty()),
        }
    }
}
