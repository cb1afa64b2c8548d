//! Persisted result sets.
//!
//! A snapshot lets the visible result list survive a restart: the
//! controller writes one after every applied fetch or dismissal and reads
//! it back on construction.

use crate::core::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of the visible result list.
///
/// # Example
///
/// ```rust
/// use hitlist::snapshot::Snapshot;
///
/// let snapshot = Snapshot::new("react", Vec::new());
/// let json = snapshot.to_json().unwrap();
/// let restored = Snapshot::from_json(&json).unwrap();
///
/// assert_eq!(restored.id, snapshot.id);
/// assert_eq!(restored.search_term, "react");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,

    /// Search term at the time of saving
    pub search_term: String,

    /// Records in display order
    pub records: Vec<Record>,
}

impl Snapshot {
    pub fn new(search_term: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            saved_at: Utc::now(),
            search_term: search_term.into(),
            records,
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate a snapshot.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let mut seen = HashSet::new();
        for record in &self.records {
            if !seen.insert(&record.id) {
                return Err(SnapshotError::ValidationFailed(format!(
                    "duplicate record id '{}'",
                    record.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RecordId;
    use serde_json::Value;

    fn record(id: &str) -> Record {
        Record {
            id: RecordId::from(id),
            title: "t".to_string(),
            url: "u".to_string(),
            author: "a".to_string(),
            comment_count: 1,
            score: 2,
        }
    }

    #[test]
    fn round_trip_preserves_records() {
        let snapshot = Snapshot::new("rust", vec![record("1"), record("2")]);
        let restored = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut json: Value =
            serde_json::from_str(&Snapshot::new("rust", Vec::new()).to_json().unwrap()).unwrap();
        json["version"] = Value::from(99);

        let err = Snapshot::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::UnsupportedVersion {
                found: 99,
                supported: SNAPSHOT_VERSION
            }
        ));
    }

    #[test]
    fn duplicate_ids_fail_validation() {
        let snapshot = Snapshot::new("rust", vec![record("1"), record("1")]);
        let err = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap_err();
        assert!(matches!(err, SnapshotError::ValidationFailed(_)));
    }

    #[test]
    fn garbage_is_deserialization_error() {
        let err = Snapshot::from_json("not json").unwrap_err();
        assert!(matches!(err, SnapshotError::DeserializationFailed(_)));
    }

    #[test]
    fn new_snapshots_get_distinct_ids() {
        assert_ne!(Snapshot::new("a", Vec::new()).id, Snapshot::new("a", Vec::new()).id);
    }
}
