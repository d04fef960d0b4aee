//! Request and response shapes for the table-rows API.

use atomic_types::RawRecord;
use serde::{Deserialize, Serialize};

/// A key-range scan request against one contract table.
///
/// `lower_bound` / `upper_bound` are inclusive filters on the table's
/// primary key. Between pages only the scanner mutates `lower_bound`
/// (replacing it with the returned cursor); callers never touch bounds of an
/// in-flight scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRequest {
    /// Ask the node to decode rows to JSON rather than raw ABI hex.
    pub json: bool,
    /// Contract account that owns the table.
    pub code: String,
    /// Namespace the rows are partitioned under (commonly a collection).
    pub scope: String,
    /// Table name.
    pub table: String,
    /// Maximum rows per page.
    pub limit: u32,
    /// Walk the key range in reverse.
    pub reverse: bool,
    /// Include the RAM payer column in each row.
    pub show_payer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<String>,
}

impl TableRequest {
    /// A forward JSON scan with the default page size of 100.
    pub fn new(code: impl Into<String>, scope: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            json: true,
            code: code.into(),
            scope: scope.into(),
            table: table.into(),
            limit: 100,
            reverse: false,
            show_payer: false,
            lower_bound: None,
            upper_bound: None,
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_lower_bound(mut self, lower_bound: impl Into<String>) -> Self {
        self.lower_bound = Some(lower_bound.into());
        self
    }

    /// Equality lookup: matching inclusive bounds on both ends.
    #[must_use]
    pub fn with_exact_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.lower_bound = Some(key.clone());
        self.upper_bound = Some(key);
        self
    }
}

/// One page of a table scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRowsPage {
    pub rows: Vec<RawRecord>,
    /// Set while further pages remain.
    #[serde(default)]
    pub more: bool,
    /// Continuation cursor for the next page's lower bound.
    #[serde(default)]
    pub next_key: Option<String>,
}

impl TableRowsPage {
    /// A terminal page holding the given rows.
    pub fn last(rows: Vec<RawRecord>) -> Self {
        Self {
            rows,
            more: false,
            next_key: None,
        }
    }

    /// A non-terminal page pointing at the next cursor.
    pub fn partial(rows: Vec<RawRecord>, next_key: impl Into<String>) -> Self {
        Self {
            rows,
            more: true,
            next_key: Some(next_key.into()),
        }
    }
}
