//! The template document variant.

use crate::collection::{opt_str_field, str_field};
use atomic_types::{Network, RawRecord, SchemaFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A normalized template, ready for indexing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDoc {
    pub template_id: u64,
    pub collection_name: String,
    pub schema_name: String,
    pub name: String,
    pub img: String,
    pub description: String,
    /// The decoded immutable payload mapping.
    pub immutable_data: Value,
    pub is_transferable: bool,
    pub is_burnable: bool,
    pub issued_supply: u64,
    pub max_supply: u64,
    pub contract: Option<String>,
    pub network: Network,
    pub created_at_time: Option<String>,
    pub created_at_block: Option<String>,
}

impl TemplateDoc {
    /// Builds a document from a decoded template record.
    ///
    /// Total: absent fields degrade to empty/zero values, and the
    /// description resolves through the fallback chain below.
    pub fn from_record(record: &RawRecord, network: Network) -> Self {
        Self {
            template_id: record.get_u64("template_id").unwrap_or_default(),
            collection_name: back_reference(record, "collection_name"),
            schema_name: str_field(record, "schema_name"),
            name: str_field(record, "name"),
            img: str_field(record, "img"),
            description: description_fallback(record),
            immutable_data: record
                .get("immutable_data")
                .cloned()
                .unwrap_or_else(|| Value::Object(Default::default())),
            is_transferable: record.get_bool("transferable").unwrap_or(false),
            is_burnable: record.get_bool("burnable").unwrap_or(false),
            issued_supply: record.get_u64("issued_supply").unwrap_or_default(),
            max_supply: record.get_u64("max_supply").unwrap_or_default(),
            contract: opt_str_field(record, "contract"),
            network,
            created_at_time: opt_str_field(record, "created_at_time"),
            created_at_block: opt_str_field(record, "created_at_block"),
        }
    }

    /// Deterministic identifier: `{network}-template-{template_id}`.
    #[must_use]
    pub fn unique_id(&self) -> String {
        [
            self.network.as_str(),
            "template",
            &self.template_id.to_string(),
        ]
        .join("-")
    }
}

/// A field of the record's `collection` back-reference.
fn back_reference(record: &RawRecord, field: &str) -> String {
    record
        .get("collection")
        .and_then(|c| c.get(field))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Resolves a template description. Deterministic and order-sensitive:
/// the first format entry (in declared order) that is string-typed and named
/// `description` or `desc` supplies the value; failing that, the parent
/// collection's display name; failing that, empty. Never fails.
fn description_fallback(record: &RawRecord) -> String {
    let format = record
        .get("schema")
        .and_then(|s| s.get("format"))
        .and_then(|f| serde_json::from_value::<SchemaFormat>(f.clone()).ok());

    if let Some(format) = format {
        let candidate = format.attributes().iter().find(|attr| {
            attr.type_tag == "string" && matches!(attr.name.as_str(), "description" | "desc")
        });
        if let Some(attr) = candidate {
            if let Some(value) = decoded_str(record, &attr.name) {
                return value.to_string();
            }
        }
    }

    back_reference(record, "name")
}

/// Looks up a decoded value: the `data` sub-object first, then
/// `immutable_data`, then the top-level merged fields.
fn decoded_str<'a>(record: &'a RawRecord, name: &str) -> Option<&'a str> {
    for source in ["data", "immutable_data"] {
        if let Some(value) = record
            .get(source)
            .and_then(|d| d.get(name))
            .and_then(|v| v.as_str())
        {
            return Some(value);
        }
    }
    record.get_str(name)
}
