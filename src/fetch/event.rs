//! Events accepted by the fetch reducer.

use super::error::ProgrammingError;
use crate::core::{Record, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Events that drive the fetch state machine.
///
/// The wire form is `{"type": "FETCH_SUCCESS", "payload": [...]}`, with
/// `payload` omitted for events that carry none.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FetchEvent {
    /// A new cycle started.
    FetchInit,
    /// The latest cycle returned these records.
    FetchSuccess(Vec<Record>),
    /// The latest cycle failed.
    FetchFailure,
    /// Drop the record with this id from the result list.
    RemoveRecord(RecordId),
}

const KINDS: [&str; 4] = [
    "FETCH_INIT",
    "FETCH_SUCCESS",
    "FETCH_FAILURE",
    "REMOVE_RECORD",
];

impl FetchEvent {
    /// Wire name of the event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FetchInit => KINDS[0],
            Self::FetchSuccess(_) => KINDS[1],
            Self::FetchFailure => KINDS[2],
            Self::RemoveRecord(_) => KINDS[3],
        }
    }

    /// True for the events that end a cycle.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::FetchSuccess(_) | Self::FetchFailure)
    }

    /// Decode an event from its wire form.
    ///
    /// An unknown `type` is a programming error and is reported as such
    /// rather than ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hitlist::fetch::{FetchEvent, ProgrammingError};
    /// use serde_json::json;
    ///
    /// let event = FetchEvent::decode(json!({"type": "FETCH_INIT"})).unwrap();
    /// assert_eq!(event, FetchEvent::FetchInit);
    ///
    /// let err = FetchEvent::decode(json!({"type": "FETCH_RETRY"})).unwrap_err();
    /// assert!(matches!(err, ProgrammingError::UnknownEvent { .. }));
    /// ```
    pub fn decode(value: Value) -> Result<Self, ProgrammingError> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ProgrammingError::MissingKind)?
            .to_string();

        if !KINDS.contains(&kind.as_str()) {
            return Err(ProgrammingError::UnknownEvent { kind });
        }

        serde_json::from_value(value).map_err(|e| ProgrammingError::MalformedEvent {
            kind,
            message: e.to_string(),
        })
    }
}
