//! Metadata header parsing.
//!
//! The header convention is fixed: the document must start with `---`, the
//! text is split on the separator into at most three segments, and the
//! second segment is searched for a `description:` line. Anything that does
//! not fit degrades to an empty description and the original text as body.

use regex::Regex;
use std::sync::LazyLock;

/// Separator that opens and closes the metadata block.
pub const METADATA_SEPARATOR: &str = "---";

static DESCRIPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"description:\s*(.*)").expect("Invalid description regex"));

/// Description and body extracted from a command document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedDocument {
    /// Value of the `description` field; empty when absent or a block scalar.
    pub description: String,
    /// Document content after the metadata block.
    pub body: String,
}

/// Split a document into its metadata segment and trimmed body.
///
/// Returns `None` when the text does not open with the separator or has no
/// closing separator.
fn split_metadata(text: &str) -> Option<(&str, &str)> {
    if !text.starts_with(METADATA_SEPARATOR) {
        return None;
    }
    let mut segments = text.splitn(3, METADATA_SEPARATOR);
    let _leading = segments.next()?;
    let metadata = segments.next()?;
    let body = segments.next()?;
    Some((metadata, body.trim()))
}

/// Parse a command document into its description and body.
///
/// Never fails: a missing or malformed header yields an empty description
/// and the original text as body.
pub fn parse_document(text: &str) -> ParsedDocument {
    match split_metadata(text) {
        Some((metadata, body)) => ParsedDocument {
            description: extract_description(metadata),
            body: body.to_string(),
        },
        None => ParsedDocument {
            description: String::new(),
            body: text.to_string(),
        },
    }
}

/// Return the body of a document with its metadata block removed.
///
/// Used for agent documents, whose metadata is discarded.
pub fn strip_metadata(text: &str) -> &str {
    split_metadata(text).map(|(_, body)| body).unwrap_or(text)
}

fn extract_description(metadata: &str) -> String {
    let Some(captures) = DESCRIPTION_PATTERN.captures(metadata) else {
        return String::new();
    };
    let raw = captures.get(1).map(|m| m.as_str()).unwrap_or("").trim();
    let value = strip_quotes(raw);

    // Block scalars (`|`, `>`) carry their text on following lines; leave the
    // description empty so the caller can fall back.
    if value == "|" || value == ">" {
        return String::new();
    }
    value.to_string()
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
