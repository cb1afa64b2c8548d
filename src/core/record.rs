//! Search result records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a [`Record`].
///
/// The search service sends ids either as strings or as integers; both are
/// normalised to their textual form so equality is well defined.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// One search result entry.
///
/// Records are immutable once received; identity is `id`.
///
/// # Example
///
/// ```rust
/// use hitlist::core::{Record, RecordId};
///
/// let record = Record {
///     id: RecordId::from(1),
///     title: "A".to_string(),
///     url: "u".to_string(),
///     author: "x".to_string(),
///     comment_count: 0,
///     score: 1,
/// };
///
/// assert_eq!(record.id.as_str(), "1");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    pub url: String,
    pub author: String,
    pub comment_count: u64,
    pub score: i64,
}
