//! Pure transition function for fetch state.

use super::event::FetchEvent;
use crate::core::{FetchPhase, Record, RecordId};
use serde::{Deserialize, Serialize};

/// Current result list plus the phase of the latest fetch.
///
/// The loading and error flags are derived from `phase`, so they can never
/// be raised together.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchState {
    records: Vec<Record>,
    phase: FetchPhase,
}

impl FetchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State seeded with previously persisted records.
    pub fn restored(records: Vec<Record>) -> Self {
        Self {
            records,
            phase: FetchPhase::Success,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn is_error(&self) -> bool {
        self.phase.is_error()
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.records.iter().any(|r| &r.id == id)
    }
}

/// Apply one event to a state, returning the next state.
///
/// This is a pure function. Terminal events are only meaningful while a
/// fetch is loading; outside `Loading` they leave the state unchanged.
///
/// # Example
///
/// ```rust
/// use hitlist::core::{Record, RecordId};
/// use hitlist::fetch::{reduce, FetchEvent, FetchState};
///
/// let record = Record {
///     id: RecordId::from(1),
///     title: "A".into(),
///     url: "u".into(),
///     author: "x".into(),
///     comment_count: 0,
///     score: 1,
/// };
///
/// let state = reduce(FetchState::new(), FetchEvent::FetchInit);
/// assert!(state.is_loading());
///
/// let state = reduce(state, FetchEvent::FetchSuccess(vec![record]));
/// assert!(!state.is_loading() && !state.is_error());
/// assert_eq!(state.records().len(), 1);
///
/// let state = reduce(state, FetchEvent::RemoveRecord(RecordId::from(1)));
/// assert!(state.records().is_empty());
/// ```
pub fn reduce(state: FetchState, event: FetchEvent) -> FetchState {
    match (state.phase, event) {
        (_, FetchEvent::FetchInit) => FetchState {
            phase: FetchPhase::Loading,
            ..state
        },
        (FetchPhase::Loading, FetchEvent::FetchSuccess(records)) => FetchState {
            records,
            phase: FetchPhase::Success,
        },
        (FetchPhase::Loading, FetchEvent::FetchFailure) => FetchState {
            phase: FetchPhase::Failure,
            ..state
        },
        (_, FetchEvent::FetchSuccess(_)) | (_, FetchEvent::FetchFailure) => state,
        (_, FetchEvent::RemoveRecord(id)) => {
            let FetchState { mut records, phase } = state;
            records.retain(|r| r.id != id);
            FetchState { records, phase }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64) -> Record {
        Record {
            id: RecordId::from(id),
            title: format!("title {id}"),
            url: format!("https://example.com/{id}"),
            author: "author".to_string(),
            comment_count: id,
            score: id as i64,
        }
    }

    fn loaded(ids: &[u64]) -> FetchState {
        let state = reduce(FetchState::new(), FetchEvent::FetchInit);
        reduce(
            state,
            FetchEvent::FetchSuccess(ids.iter().copied().map(record).collect()),
        )
    }

    #[test]
    fn initial_state_is_idle_and_empty() {
        let state = FetchState::new();
        assert_eq!(state.phase(), FetchPhase::Idle);
        assert!(state.records().is_empty());
        assert!(!state.is_loading());
        assert!(!state.is_error());
    }

    #[test]
    fn init_keeps_stale_records_visible() {
        let state = reduce(loaded(&[1, 2]), FetchEvent::FetchInit);
        assert!(state.is_loading());
        assert!(!state.is_error());
        assert_eq!(state.records().len(), 2);
    }

    #[test]
    fn init_clears_error() {
        let state = reduce(FetchState::new(), FetchEvent::FetchInit);
        let state = reduce(state, FetchEvent::FetchFailure);
        assert!(state.is_error());

        let state = reduce(state, FetchEvent::FetchInit);
        assert!(state.is_loading());
        assert!(!state.is_error());
    }

    #[test]
    fn success_replaces_records_entirely() {
        let state = reduce(loaded(&[1, 2, 3]), FetchEvent::FetchInit);
        let state = reduce(state, FetchEvent::FetchSuccess(vec![record(9)]));

        let ids: Vec<&str> = state.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["9"]);
        assert_eq!(state.phase(), FetchPhase::Success);
    }

    #[test]
    fn failure_keeps_records() {
        let state = reduce(loaded(&[1, 2]), FetchEvent::FetchInit);
        let state = reduce(state, FetchEvent::FetchFailure);

        assert!(state.is_error());
        assert!(!state.is_loading());
        assert_eq!(state.records().len(), 2);
    }

    #[test]
    fn terminal_events_outside_loading_are_ignored() {
        let before = loaded(&[1]);

        let after = reduce(before.clone(), FetchEvent::FetchSuccess(vec![record(5)]));
        assert_eq!(after, before);

        let after = reduce(before.clone(), FetchEvent::FetchFailure);
        assert_eq!(after, before);

        let idle = FetchState::new();
        assert_eq!(reduce(idle.clone(), FetchEvent::FetchFailure), idle);
    }

    #[test]
    fn remove_filters_and_keeps_order() {
        let state = reduce(loaded(&[1, 2, 3]), FetchEvent::RemoveRecord(RecordId::from(2)));
        let ids: Vec<&str> = state.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(state.phase(), FetchPhase::Success);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let before = loaded(&[1, 2]);
        let after = reduce(before.clone(), FetchEvent::RemoveRecord(RecordId::from(99)));
        assert_eq!(after, before);
    }

    #[test]
    fn remove_while_loading_stays_loading() {
        let state = reduce(loaded(&[1, 2]), FetchEvent::FetchInit);
        let state = reduce(state, FetchEvent::RemoveRecord(RecordId::from(1)));
        assert!(state.is_loading());
        assert_eq!(state.records().len(), 1);
    }

    #[test]
    fn restored_state_counts_as_success() {
        let state = FetchState::restored(vec![record(4)]);
        assert_eq!(state.phase(), FetchPhase::Success);
        assert!(state.contains(&RecordId::from(4)));
    }
}
