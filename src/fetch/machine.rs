//! Tagged fetch machine enforcing last-request-wins.

use super::event::FetchEvent;
use super::reducer::{reduce, FetchState};
use crate::client::FetchError;
use crate::core::{FetchPhase, PhaseHistory, PhaseTransition, Record, RecordId};
use chrono::Utc;

/// Sequence number assigned to a fetch cycle when it starts.
pub type Tag = u64;

/// What happened to a terminal event handed to [`FetchMachine::settle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    /// The event belonged to the latest cycle and was applied.
    Applied { tag: Tag, phase: FetchPhase },

    /// A newer cycle has started since; the event was discarded.
    Stale { tag: Tag, latest: Tag },

    /// The latest cycle had already settled; the event was discarded.
    Duplicate { tag: Tag },
}

impl Settlement {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Owns the fetch state and applies events one at a time.
///
/// Every cycle gets a tag from [`begin`](Self::begin). A terminal event is
/// applied only when its tag is the latest one issued, so a slow response
/// can never overwrite the result of a more recent request.
///
/// # Example
///
/// ```rust
/// use hitlist::fetch::{FetchMachine, Settlement};
///
/// let mut machine = FetchMachine::new();
/// let first = machine.begin();
/// let second = machine.begin();
///
/// let late = machine.settle(first, Ok(Vec::new()));
/// assert!(matches!(late, Settlement::Stale { .. }));
/// assert!(machine.state().is_loading());
///
/// assert!(machine.settle(second, Ok(Vec::new())).is_applied());
/// assert!(!machine.state().is_loading());
/// ```
#[derive(Clone, Debug)]
pub struct FetchMachine {
    state: FetchState,
    latest: Tag,
    latest_settled: bool,
    history: PhaseHistory,
}

impl Default for FetchMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchMachine {
    pub fn new() -> Self {
        Self::with_history(PhaseHistory::new())
    }

    /// Create a machine whose phase history retains at most `limit` entries.
    pub fn with_history_limit(limit: usize) -> Self {
        Self::with_history(PhaseHistory::with_limit(limit))
    }

    fn with_history(history: PhaseHistory) -> Self {
        Self {
            state: FetchState::new(),
            latest: 0,
            latest_settled: true,
            history,
        }
    }

    /// Seed the result list from persisted records.
    pub fn restore(&mut self, records: Vec<Record>) {
        let from = self.state.phase();
        self.state = FetchState::restored(records);
        self.record_transition(from, self.latest);
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Tag of the most recently started cycle, zero before the first.
    pub fn latest_tag(&self) -> Tag {
        self.latest
    }

    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    /// Start a new cycle: dispatch `FETCH_INIT` and return its tag.
    pub fn begin(&mut self) -> Tag {
        self.latest += 1;
        self.latest_settled = false;
        self.apply(self.latest, FetchEvent::FetchInit);
        self.latest
    }

    /// Finish the cycle identified by `tag`.
    ///
    /// Dispatches `FETCH_SUCCESS` for `Ok` and `FETCH_FAILURE` for `Err`,
    /// unless the cycle has been superseded or already settled.
    pub fn settle(&mut self, tag: Tag, outcome: Result<Vec<Record>, FetchError>) -> Settlement {
        if tag != self.latest {
            tracing::debug!(tag, latest = self.latest, "discarding stale fetch result");
            return Settlement::Stale {
                tag,
                latest: self.latest,
            };
        }
        if self.latest_settled {
            tracing::debug!(tag, "discarding duplicate fetch result");
            return Settlement::Duplicate { tag };
        }

        let event = match outcome {
            Ok(records) => FetchEvent::FetchSuccess(records),
            Err(_) => FetchEvent::FetchFailure,
        };
        self.latest_settled = true;
        self.apply(tag, event);

        Settlement::Applied {
            tag,
            phase: self.state.phase(),
        }
    }

    /// Dispatch `REMOVE_RECORD`. Returns whether a record was removed.
    pub fn remove(&mut self, id: &RecordId) -> bool {
        let present = self.state.contains(id);
        self.apply(self.latest, FetchEvent::RemoveRecord(id.clone()));
        present
    }

    fn apply(&mut self, tag: Tag, event: FetchEvent) {
        let from = self.state.phase();
        let kind = event.kind();
        self.state = reduce(std::mem::take(&mut self.state), event);

        tracing::debug!(
            tag,
            event = kind,
            from = from.name(),
            to = self.state.phase().name(),
            records = self.state.records().len(),
            "applied fetch event"
        );
        self.record_transition(from, tag);
    }

    fn record_transition(&mut self, from: FetchPhase, tag: Tag) {
        let to = self.state.phase();
        if from != to {
            self.history = self.history.record(PhaseTransition {
                from,
                to,
                at: Utc::now(),
                tag,
            });
        }
    }
}
