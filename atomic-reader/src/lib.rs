//! Schema-driven decode pipeline for atomic-index.
//!
//! Reads rows from the asset contract's tables and turns their binary
//! payloads into structured records:
//! - [`PayloadCodec`] — the external binary serialization capability
//! - [`FormatResolver`] — looks up the decode format for collections and
//!   per-schema templates
//! - [`decoder`] — ordered field-precedence merges of raw and decoded fields
//! - [`AtomicReader`] — the high-level read operations (collections,
//!   templates, schemas, config, whitelist filters)
//!
//! Every bulk read decodes rows sequentially in scan order; nothing here
//! fans out concurrently or retries.

pub mod decoder;

mod codec;
mod error;
mod reader;
mod resolver;

pub use codec::{CodecError, PayloadCodec};
pub use error::{ReaderError, ReaderResult};
pub use reader::{AtomicReader, ReaderConfig};
pub use resolver::FormatResolver;
