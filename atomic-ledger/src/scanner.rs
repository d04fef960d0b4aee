//! Cursor-based pagination over a remote table.

use crate::client::LedgerClient;
use crate::error::LedgerResult;
use crate::request::TableRequest;
use atomic_types::RawRecord;
use std::sync::Arc;
use tracing::debug;

/// Walks a table to exhaustion or looks up single rows.
///
/// The scanner owns no state beyond its client handle; every scan works on a
/// fresh copy of the caller's request.
pub struct TableScanner<C: LedgerClient> {
    client: Arc<C>,
}

impl<C: LedgerClient> Clone for TableScanner<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: LedgerClient> TableScanner<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Shared handle to the underlying client.
    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    /// Fetches every page of the table, in page order.
    pub async fn scan_all(&self, request: TableRequest) -> LedgerResult<Vec<RawRecord>> {
        self.scan_all_where(request, |_| true).await
    }

    /// Fetches every page, keeping only rows the predicate accepts.
    ///
    /// The predicate never affects pagination: all pages are walked to
    /// completion regardless of how many rows it discards. The loop
    /// terminates when the node clears the `more` flag; an upper bound and
    /// page size set by the caller are preserved across pages.
    pub async fn scan_all_where<F>(
        &self,
        mut request: TableRequest,
        mut predicate: F,
    ) -> LedgerResult<Vec<RawRecord>>
    where
        F: FnMut(&RawRecord) -> bool,
    {
        let mut rows = Vec::new();

        loop {
            let page = self.client.fetch_table_rows(&request).await?;
            debug!(
                table = %request.table,
                scope = %request.scope,
                fetched = page.rows.len(),
                more = page.more,
                "scanned table page"
            );

            rows.extend(page.rows.into_iter().filter(&mut predicate));

            if page.more {
                request.lower_bound = page.next_key;
            } else {
                break;
            }
        }

        Ok(rows)
    }

    /// Issues exactly one fetch with page size 1 and returns the first row.
    ///
    /// Used for equality lookups via matching lower/upper bounds.
    pub async fn scan_one(&self, request: TableRequest) -> LedgerResult<Option<RawRecord>> {
        let page = self.client.fetch_table_rows(&request.with_limit(1)).await?;
        Ok(page.rows.into_iter().next())
    }
}
