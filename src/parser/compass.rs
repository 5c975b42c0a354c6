//! Grouped/Compass format.
//!
//! A top-level object with a `queries` list; each group carries a shared
//! `name`/`category` and a `queryList` of individual entries. The `final`
//! flag on an entry is accepted for compatibility with Compass exports but
//! does not affect import.

use super::RawRecord;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct CompassFile {
    queries: Vec<CompassGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompassGroup {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    query_list: Vec<CompassEntry>,
}

#[derive(Debug, Deserialize)]
struct CompassEntry {
    #[serde(default)]
    query: Option<String>,
    #[serde(default, rename = "final")]
    _final: Option<bool>,
}

/// Flatten every `queryList` entry into one record per query, sharing the
/// group's name and category.
pub(super) fn decode(value: &Value) -> Option<Vec<RawRecord>> {
    if !value.get("queries").is_some_and(Value::is_array) {
        return None;
    }

    let file: CompassFile = serde_json::from_value(value.clone()).ok()?;

    let mut records = Vec::new();
    for group in file.queries {
        for entry in group.query_list {
            records.push(RawRecord {
                name: group.name.clone(),
                description: None,
                cypher: entry.query.unwrap_or_default(),
                category: group.category.clone(),
            });
        }
    }

    Some(records)
}
