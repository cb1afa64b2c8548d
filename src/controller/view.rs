//! Values exchanged with the presentation layer.

use crate::core::{Record, RecordId};
use crate::fetch::{FetchState, Settlement};
use serde::{Deserialize, Serialize};

/// Everything the presentation layer renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchView {
    pub search_term: String,
    pub records: Vec<Record>,
    pub is_loading: bool,
    pub is_error: bool,
}

impl SearchView {
    pub(crate) fn new(search_term: String, state: &FetchState) -> Self {
        Self {
            search_term,
            records: state.records().to_vec(),
            is_loading: state.is_loading(),
            is_error: state.is_error(),
        }
    }
}

/// User events forwarded by the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Intent {
    /// The search input changed.
    InputChange(String),
    /// The search form was submitted.
    Submit,
    /// The user dismissed a record.
    Remove(RecordId),
}

/// Result of [`submit_search`](super::SearchController::submit_search).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The term was empty; nothing was dispatched.
    Skipped,
    /// The cycle ran; its terminal event was applied or discarded.
    Settled(Settlement),
}

impl SubmitOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Settled(s) if s.is_applied())
    }
}
