//! Simple array format and its single-object variant.

use super::RawRecord;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct SimpleQuery {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl From<SimpleQuery> for RawRecord {
    fn from(record: SimpleQuery) -> Self {
        RawRecord {
            name: record.name,
            description: record.description,
            cypher: record.query.unwrap_or_default(),
            category: None,
        }
    }
}

/// A top-level array of flat records.
pub(super) fn decode(value: &Value) -> Option<Vec<RawRecord>> {
    if !value.is_array() {
        return None;
    }

    let records: Vec<SimpleQuery> = serde_json::from_value(value.clone()).ok()?;
    Some(records.into_iter().map(RawRecord::from).collect())
}

/// A single flat record at the top level.
pub(super) fn decode_single(value: &Value) -> Option<Vec<RawRecord>> {
    if !value.get("query").is_some_and(Value::is_string) {
        return None;
    }

    let record: SimpleQuery = serde_json::from_value(value.clone()).ok()?;
    Some(vec![record.into()])
}
