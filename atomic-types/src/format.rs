//! Schema formats: the ordered field layouts that drive payload decoding.

use serde::{Deserialize, Serialize};

/// One entry of a schema format: a field name plus an opaque type tag.
///
/// Type tags (`string`, `image`, `uint64`, ...) are interpreted entirely by
/// the external binary codec; this core only compares them as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatAttribute {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
}

impl FormatAttribute {
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
        }
    }
}

/// An ordered sequence of [`FormatAttribute`]s.
///
/// Order is significant: it defines the byte layout the codec expects, and
/// the template description fallback scans entries in declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaFormat(Vec<FormatAttribute>);

impl SchemaFormat {
    pub fn new(attributes: Vec<FormatAttribute>) -> Self {
        Self(attributes)
    }

    /// The "decode nothing" sentinel used when no format row exists.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The attributes in declared order.
    pub fn attributes(&self) -> &[FormatAttribute] {
        &self.0
    }
}

impl From<Vec<FormatAttribute>> for SchemaFormat {
    fn from(attributes: Vec<FormatAttribute>) -> Self {
        Self(attributes)
    }
}

impl<'a> IntoIterator for &'a SchemaFormat {
    type Item = &'a FormatAttribute;
    type IntoIter = std::slice::Iter<'a, FormatAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
