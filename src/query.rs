//! Canonical query record.
//!
//! Every source format is decoded into this flat representation before
//! submission. Import order is preserved end to end.

/// A single saved query ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Display name shown in the BloodHound UI.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// The raw Cypher text. Never empty after canonicalization.
    pub cypher: String,
    /// Grouping label (grouped/Compass format only).
    pub category: Option<String>,
}

impl Query {
    /// Placeholder name for structured records that carry none.
    pub fn untitled(index: usize) -> String {
        format!("Untitled Query {index}")
    }

    /// Synthesized name for plain-text lines.
    pub fn line_name(index: usize) -> String {
        format!("Query {index}")
    }
}
