//! The schema document variant.

use crate::collection::{opt_str_field, str_field};
use atomic_types::{Network, RawRecord, SchemaFormat};
use serde::{Deserialize, Serialize};

/// A normalized schema, ready for indexing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDoc {
    pub schema_name: String,
    pub collection_name: String,
    /// The declared field layout, order preserved.
    pub format: SchemaFormat,
    pub contract: Option<String>,
    pub network: Network,
    pub created_at_time: Option<String>,
    pub created_at_block: Option<String>,
}

impl SchemaDoc {
    /// Builds a document from a schema record carrying its collection
    /// back-reference. Total: an unparseable or absent format degrades to
    /// the empty format.
    pub fn from_record(record: &RawRecord, network: Network) -> Self {
        let format = record
            .get("format")
            .and_then(|f| serde_json::from_value(f.clone()).ok())
            .unwrap_or_else(SchemaFormat::empty);
        let collection_name = record
            .get("collection")
            .and_then(|c| c.get("collection_name"))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        Self {
            schema_name: str_field(record, "schema_name"),
            collection_name,
            format,
            contract: opt_str_field(record, "contract"),
            network,
            created_at_time: opt_str_field(record, "created_at_time"),
            created_at_block: opt_str_field(record, "created_at_block"),
        }
    }

    /// Deterministic identifier:
    /// `{network}-schema-{collection_name}-{schema_name}`.
    #[must_use]
    pub fn unique_id(&self) -> String {
        [
            self.network.as_str(),
            "schema",
            &self.collection_name,
            &self.schema_name,
        ]
        .join("-")
    }
}
