//! Format detection and decoding for query files.
//!
//! Detection is an explicit ordered chain: the grouped/Compass format first,
//! then the simple array form, then a single flat object, and finally
//! plain-text line-splitting. Structured decoding tries JSON and YAML; the
//! blob's shape hint only decides which of the two is attempted first.
//! Parsing never fails — malformed input degrades to plain text.

mod compass;
mod plaintext;
mod simple;


use crate::query::Query;
use crate::source::{RawBlob, ShapeHint};
use serde_json::Value;

/// Result of parsing one blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBlob {
    /// Canonical queries, in source order.
    pub queries: Vec<Query>,
    /// Records dropped for an empty cypher after trimming.
    pub dropped: usize,
    /// Degradation note (unrecognized structure, plain-text fallback, ...).
    pub note: Option<String>,
}

/// Parse one blob into canonical queries.
///
/// Pure function: the same blob always yields the same sequence.
pub fn parse(blob: &RawBlob) -> ParsedBlob {
    if let Some(value) = decode_structured(blob) {
        if value.is_object() || value.is_array() {
            for decode in [compass::decode, simple::decode, simple::decode_single] {
                if let Some(records) = decode(&value) {
                    return canonicalize(records, &blob.origin);
                }
            }

            return ParsedBlob {
                queries: Vec::new(),
                dropped: 0,
                note: Some(format!("{}: unrecognized structured format", blob.origin)),
            };
        }
        // スカラー値はYAMLが素のテキストを受理したケース。テキスト扱いに落とす。
    }

    let mut parsed = plaintext::parse(blob);

    if parsed.note.is_none() && matches!(blob.hint, ShapeHint::Json | ShapeHint::Yaml) {
        parsed.note = Some(format!(
            "{}: structured parse failed, treated as plain text",
            blob.origin
        ));
    }

    parsed
}

/// Decode the blob into a structured value, trying JSON and YAML in the
/// order suggested by the shape hint.
fn decode_structured(blob: &RawBlob) -> Option<Value> {
    let decoders: [fn(&str) -> Option<Value>; 2] = match blob.hint {
        ShapeHint::Yaml => [decode_yaml, decode_json],
        _ => [decode_json, decode_yaml],
    };

    decoders.iter().find_map(|decode| decode(&blob.content))
}

fn decode_json(content: &str) -> Option<Value> {
    serde_json::from_str(content).ok()
}

fn decode_yaml(content: &str) -> Option<Value> {
    serde_yaml::from_str(content).ok()
}

/// A record as it appears in a structured source, before canonicalization.
#[derive(Debug, Clone)]
struct RawRecord {
    name: Option<String>,
    description: Option<String>,
    cypher: String,
    category: Option<String>,
}

/// Trim cypher, drop empty records, and fill in placeholder names.
fn canonicalize(records: Vec<RawRecord>, origin: &str) -> ParsedBlob {
    let mut parsed = ParsedBlob::default();

    for (index, record) in records.into_iter().enumerate() {
        let cypher = record.cypher.trim();
        if cypher.is_empty() {
            parsed.dropped += 1;
            continue;
        }

        parsed.queries.push(Query {
            name: record
                .name
                .unwrap_or_else(|| Query::untitled(index + 1)),
            description: record.description,
            cypher: cypher.to_string(),
            category: record.category,
        });
    }

    if parsed.queries.is_empty() && parsed.dropped == 0 {
        parsed.note = Some(format!("{origin}: file contained no queries"));
    }

    parsed
}
