//! Ledger node client: the capability trait and its reqwest adapter.

use crate::error::{LedgerError, LedgerResult};
use crate::request::{TableRequest, TableRowsPage};
use async_trait::async_trait;
use atomic_types::Network;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Configuration for a ledger node connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Base URL of the node's chain API (e.g. `https://wax.greymass.com`).
    pub endpoint: String,
    /// Which deployment this endpoint serves.
    pub network: Network,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://wax.greymass.com".to_string(),
            network: Network::Wax,
            timeout_secs: 30,
        }
    }
}

/// Abstract table-rows fetch capability.
///
/// One call returns one page; pagination lives in
/// [`TableScanner`](crate::TableScanner), not here.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    async fn fetch_table_rows(&self, request: &TableRequest) -> LedgerResult<TableRowsPage>;
}

/// Production client speaking the node's HTTP chain API.
#[derive(Debug, Clone)]
pub struct HttpLedgerClient {
    config: LedgerConfig,
    client: Client,
}

impl HttpLedgerClient {
    /// Creates a client for the configured endpoint.
    pub fn new(config: LedgerConfig) -> LedgerResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LedgerError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// The deployment this client reads from.
    pub fn network(&self) -> Network {
        self.config.network
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl LedgerClient for HttpLedgerClient {
    async fn fetch_table_rows(&self, request: &TableRequest) -> LedgerResult<TableRowsPage> {
        debug!(
            table = %request.table,
            scope = %request.scope,
            lower_bound = request.lower_bound.as_deref().unwrap_or(""),
            "fetching table rows"
        );

        let response = self
            .client
            .post(format!("{}/v1/chain/get_table_rows", self.config.endpoint))
            .json(request)
            .send()
            .await
            .map_err(|e| LedgerError::Network(format!("get_table_rows failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LedgerError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| LedgerError::Network(format!("failed to parse table rows: {e}")))
    }
}
