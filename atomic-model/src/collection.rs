//! The collection document variant.

use atomic_types::{Network, RawRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A normalized collection, ready for indexing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionDoc {
    pub collection_name: String,
    pub name: String,
    pub img: String,
    pub description: String,
    /// JSON-encoded text as stored on chain; the parsed forms live in `data`.
    pub images: String,
    pub socials: String,
    pub creator_info: String,
    pub allow_notify: bool,
    pub authorized_accounts: Vec<String>,
    pub notify_accounts: Vec<String>,
    pub market_fee: String,
    /// The decoded payload mapping, with known text fields parsed.
    pub data: Value,
    pub author: String,
    pub contract: Option<String>,
    pub network: Network,
    pub created_at_time: Option<String>,
    pub created_at_block: Option<String>,
}

impl CollectionDoc {
    /// Builds a document from a decoded collection record.
    ///
    /// Total: absent fields degrade to empty strings/lists, an absent `data`
    /// sub-object to an empty one.
    pub fn from_record(record: &RawRecord, network: Network) -> Self {
        let data = record
            .get("data")
            .cloned()
            .unwrap_or_else(|| Value::Object(Default::default()));
        let description = data
            .get("description")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        Self {
            collection_name: str_field(record, "collection_name"),
            name: str_field(record, "name"),
            img: str_field(record, "img"),
            description,
            images: str_field(record, "images"),
            socials: str_field(record, "socials"),
            creator_info: str_field(record, "creator_info"),
            allow_notify: record.get_bool("allow_notify").unwrap_or(false),
            authorized_accounts: str_list(record, "authorized_accounts"),
            notify_accounts: str_list(record, "notify_accounts"),
            market_fee: str_field(record, "market_fee"),
            data,
            author: str_field(record, "author"),
            contract: opt_str_field(record, "contract"),
            network,
            created_at_time: opt_str_field(record, "created_at_time"),
            created_at_block: opt_str_field(record, "created_at_block"),
        }
    }

    /// Deterministic identifier: `{network}-collection-{collection_name}`.
    #[must_use]
    pub fn unique_id(&self) -> String {
        [self.network.as_str(), "collection", &self.collection_name].join("-")
    }
}

pub(crate) fn str_field(record: &RawRecord, column: &str) -> String {
    record.get_str(column).unwrap_or_default().to_string()
}

pub(crate) fn opt_str_field(record: &RawRecord, column: &str) -> Option<String> {
    record.get_str(column).map(str::to_string)
}

pub(crate) fn str_list(record: &RawRecord, column: &str) -> Vec<String> {
    record
        .get(column)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
