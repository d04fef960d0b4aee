//! High-level read operations over the asset contract's tables.

use crate::codec::PayloadCodec;
use crate::decoder;
use crate::error::{ReaderError, ReaderResult};
use crate::resolver::FormatResolver;
use atomic_ledger::{LedgerClient, TableRequest, TableScanner};
use atomic_types::{Network, RawRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Configuration for the reader: contract accounts and scan page size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// The asset contract owning collections/schemas/templates/config.
    pub contract: String,
    /// The tooling contract owning the account whitelist tables.
    pub tools_contract: String,
    /// Rows per page for bulk scans.
    pub page_size: u32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            contract: "atomicassets".to_string(),
            tools_contract: "atomhubtools".to_string(),
            page_size: 100,
        }
    }
}

/// Reads and decodes collections, templates and schemas from one ledger
/// deployment.
///
/// Each resolution is a single logical thread of control: sequential
/// suspending fetches, fresh request objects, no shared mutable state.
pub struct AtomicReader<C: LedgerClient, P: PayloadCodec> {
    scanner: TableScanner<C>,
    resolver: FormatResolver<C>,
    codec: Arc<P>,
    config: ReaderConfig,
    network: Network,
}

impl<C: LedgerClient, P: PayloadCodec> AtomicReader<C, P> {
    pub fn new(client: Arc<C>, codec: Arc<P>, network: Network, config: ReaderConfig) -> Self {
        let scanner = TableScanner::new(client);
        let resolver = FormatResolver::new(scanner.clone(), config.contract.clone());
        Self {
            scanner,
            resolver,
            codec,
            config,
            network,
        }
    }

    /// A reader with the default contract accounts and page size.
    pub fn with_defaults(client: Arc<C>, codec: Arc<P>, network: Network) -> Self {
        Self::new(client, codec, network, ReaderConfig::default())
    }

    /// The deployment this reader is tagged with.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The format resolver, for callers that need formats directly.
    pub fn resolver(&self) -> &FormatResolver<C> {
        &self.resolver
    }

    fn contract_request(&self, table: &str) -> TableRequest {
        TableRequest::new(&self.config.contract, &self.config.contract, table)
            .with_limit(self.config.page_size)
    }

    fn scoped_request(&self, scope: &str, table: &str) -> TableRequest {
        TableRequest::new(&self.config.contract, scope, table).with_limit(self.config.page_size)
    }

    /// The contract's global config row, if any.
    pub async fn get_config(&self) -> ReaderResult<Option<RawRecord>> {
        Ok(self.scanner.scan_one(self.contract_request("config")).await?)
    }

    /// One page of the tooling contract's account whitelist table.
    pub async fn get_collection_filters(&self) -> ReaderResult<Vec<RawRecord>> {
        let request = TableRequest::new(
            &self.config.tools_contract,
            &self.config.tools_contract,
            "acclists",
        )
        .with_limit(self.config.page_size);
        let page = self.scanner.client().fetch_table_rows(&request).await?;
        Ok(page.rows)
    }

    /// One collection by name, decoded. Absence is not an error.
    pub async fn get_collection(&self, collection: &str) -> ReaderResult<Option<RawRecord>> {
        let request = self
            .contract_request("collections")
            .with_exact_key(collection);
        let Some(row) = self.scanner.scan_one(request).await? else {
            warn!(collection, "collection not found");
            return Ok(None);
        };

        let format = self.resolver.collection_format().await?;
        let decoded = decoder::decode_collection_record(self.codec.as_ref(), &format, row)?;
        Ok(Some(decoded))
    }

    /// All whitelisted collections, decoded sequentially in scan order.
    pub async fn get_collections(&self, whitelist: &[String]) -> ReaderResult<Vec<RawRecord>> {
        let request = self.contract_request("collections");
        let rows = self
            .scanner
            .scan_all_where(request, |row| {
                row.get_str("collection_name")
                    .is_some_and(|name| whitelist.iter().any(|w| w == name))
            })
            .await?;

        // One format lookup serves the whole batch; the collection format is
        // global, not per-collection.
        let format = self.resolver.collection_format().await?;

        let mut decoded = Vec::with_capacity(rows.len());
        for row in rows {
            if row.is_empty() {
                warn!("skipping non-collection row in collections scan");
                continue;
            }
            decoded.push(decoder::decode_collection_record(
                self.codec.as_ref(),
                &format,
                row,
            )?);
        }
        Ok(decoded)
    }

    /// One schema row, raw. The schemas table carries no binary payload.
    pub async fn get_schema(
        &self,
        collection: &str,
        schema_name: &str,
    ) -> ReaderResult<Option<RawRecord>> {
        let request = self
            .scoped_request(collection, "schemas")
            .with_exact_key(schema_name);
        Ok(self.scanner.scan_one(request).await?)
    }

    /// All schemas of a collection, each carrying a collection
    /// back-reference.
    pub async fn get_schemas(&self, collection: &str) -> ReaderResult<Vec<RawRecord>> {
        let request = self
            .scoped_request(collection, "schemas")
            .with_lower_bound("");
        let mut rows = self.scanner.scan_all(request).await?;
        for row in &mut rows {
            row.insert(
                "collection",
                serde_json::json!({ "collection_name": collection }),
            );
        }
        Ok(rows)
    }

    /// One template by id, decoded against its schema's format. Absence is
    /// not an error.
    pub async fn get_template(
        &self,
        collection: &str,
        template_id: &str,
    ) -> ReaderResult<Option<RawRecord>> {
        let request = self
            .scoped_request(collection, "templates")
            .with_exact_key(template_id);
        let Some(row) = self.scanner.scan_one(request).await? else {
            warn!(collection, template_id, "unable to find template in collection");
            return Ok(None);
        };

        Ok(Some(self.decode_template(row, collection).await?))
    }

    /// All templates of a collection, decoded sequentially in scan order.
    pub async fn get_templates(&self, collection: &str) -> ReaderResult<Vec<RawRecord>> {
        let request = self
            .scoped_request(collection, "templates")
            .with_lower_bound("");
        let rows = self.scanner.scan_all(request).await?;

        let mut decoded = Vec::with_capacity(rows.len());
        for row in rows {
            if row.is_empty() {
                warn!(collection, "skipping non-template row in templates scan");
                continue;
            }
            decoded.push(self.decode_template(row, collection).await?);
        }
        Ok(decoded)
    }

    async fn decode_template(&self, row: RawRecord, collection: &str) -> ReaderResult<RawRecord> {
        let schema_name = row
            .get_str("schema_name")
            .ok_or_else(|| ReaderError::MalformedRecord("template row without schema_name".into()))?
            .to_string();
        let format = self.resolver.schema_format(collection, &schema_name).await?;
        decoder::decode_template_record(self.codec.as_ref(), &format, row, collection)
    }
}
