//! Plain-text fallback: one query per line.

use super::ParsedBlob;
use crate::query::Query;
use crate::source::RawBlob;

/// Line prefixes treated as comments.
const COMMENT_PREFIXES: [&str; 2] = ["#", "//"];

pub(super) fn parse(blob: &RawBlob) -> ParsedBlob {
    let mut parsed = ParsedBlob::default();

    for line in blob.content.lines() {
        let line = line.trim();
        if line.is_empty() || COMMENT_PREFIXES.iter().any(|p| line.starts_with(p)) {
            continue;
        }

        parsed.queries.push(Query {
            name: Query::line_name(parsed.queries.len() + 1),
            description: None,
            cypher: line.to_string(),
            category: None,
        });
    }

    if parsed.queries.is_empty() {
        parsed.note = Some(format!("{}: no queries found", blob.origin));
    }

    parsed
}
