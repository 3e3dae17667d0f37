//! Command and agent documents
//!
//! A document is a text blob with an optional leading metadata block delimited
//! by `---` and a body. Only the `description` field of the metadata block is
//! ever read.

pub mod agents;
pub mod header;
pub(crate) mod listing;

pub use agents::{AgentEntry, AgentMap, AgentNaming};
pub use header::{parse_document, strip_metadata, ParsedDocument, METADATA_SEPARATOR};
