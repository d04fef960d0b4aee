//! Normalized search documents for atomic-index.
//!
//! Three variant shapes are produced for downstream indexing:
//! - [`CollectionDoc`] — a grouping of digital assets
//! - [`TemplateDoc`] — a reusable asset blueprint
//! - [`SchemaDoc`] — a named field layout
//!
//! Each builder is total: it copies a fixed set of fields from a decoded
//! record, degrades to empty values where fields are absent, tags the result
//! with its [`Network`](atomic_types::Network), and derives a deterministic
//! unique identifier. Documents are immutable after construction and are not
//! persisted here — indexing is the caller's business.

mod collection;
mod schema;
mod template;

pub use collection::CollectionDoc;
pub use schema::SchemaDoc;
pub use template::TemplateDoc;
