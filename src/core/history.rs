//! Phase transition history.
//!
//! Keeps a bounded, ordered log of the phase changes a fetch machine went
//! through, tagged with the cycle that caused them.

use super::phase::FetchPhase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Default number of transitions retained.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Record of a single phase transition.
///
/// # Example
///
/// ```rust
/// use hitlist::core::{FetchPhase, PhaseTransition};
/// use chrono::Utc;
///
/// let transition = PhaseTransition {
///     from: FetchPhase::Idle,
///     to: FetchPhase::Loading,
///     at: Utc::now(),
///     tag: 1,
/// };
/// assert_eq!(transition.tag, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// The phase being left
    pub from: FetchPhase,
    /// The phase being entered
    pub to: FetchPhase,
    /// When the transition was applied
    pub at: DateTime<Utc>,
    /// Sequence number of the cycle that caused it
    pub tag: u64,
}

/// Ordered, bounded history of phase transitions.
///
/// `record` returns a new history, leaving the original untouched. Once the
/// limit is reached the oldest transitions are dropped first.
///
/// # Example
///
/// ```rust
/// use hitlist::core::{FetchPhase, PhaseHistory, PhaseTransition};
/// use chrono::Utc;
///
/// let history = PhaseHistory::new()
///     .record(PhaseTransition {
///         from: FetchPhase::Idle,
///         to: FetchPhase::Loading,
///         at: Utc::now(),
///         tag: 1,
///     })
///     .record(PhaseTransition {
///         from: FetchPhase::Loading,
///         to: FetchPhase::Success,
///         at: Utc::now(),
///         tag: 1,
///     });
///
/// let path = history.path();
/// assert_eq!(path, vec![FetchPhase::Idle, FetchPhase::Loading, FetchPhase::Success]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhaseHistory {
    transitions: VecDeque<PhaseTransition>,
    limit: usize,
}

impl Default for PhaseHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseHistory {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history retaining at most `limit` transitions.
    /// A limit of zero is treated as one.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        if transitions.len() == self.limit {
            transitions.pop_front();
        }
        transitions.push_back(transition);
        Self {
            transitions,
            limit: self.limit,
        }
    }

    /// Phases traversed: the `from` of the oldest retained transition,
    /// then the `to` of each transition.
    pub fn path(&self) -> Vec<FetchPhase> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the oldest and newest retained transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.at.signed_duration_since(first.at).to_std().ok()
    }

    pub fn transitions(&self) -> impl Iterator<Item = &PhaseTransition> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: FetchPhase, to: FetchPhase, tag: u64) -> PhaseTransition {
        PhaseTransition {
            from,
            to,
            at: Utc::now(),
            tag,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = PhaseHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn record_is_immutable() {
        let history = PhaseHistory::new();
        let next = history.record(transition(FetchPhase::Idle, FetchPhase::Loading, 1));

        assert_eq!(history.len(), 0);
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn path_follows_recorded_order() {
        let history = PhaseHistory::new()
            .record(transition(FetchPhase::Idle, FetchPhase::Loading, 1))
            .record(transition(FetchPhase::Loading, FetchPhase::Failure, 1))
            .record(transition(FetchPhase::Failure, FetchPhase::Loading, 2));

        assert_eq!(
            history.path(),
            vec![
                FetchPhase::Idle,
                FetchPhase::Loading,
                FetchPhase::Failure,
                FetchPhase::Loading,
            ]
        );
    }

    #[test]
    fn limit_drops_oldest_first() {
        let history = PhaseHistory::with_limit(2)
            .record(transition(FetchPhase::Idle, FetchPhase::Loading, 1))
            .record(transition(FetchPhase::Loading, FetchPhase::Success, 1))
            .record(transition(FetchPhase::Success, FetchPhase::Loading, 2));

        let tags: Vec<u64> = history.transitions().map(|t| t.tag).collect();
        assert_eq!(tags, vec![1, 2]);
        assert_eq!(history.path()[0], FetchPhase::Loading);
    }

    #[test]
    fn zero_limit_still_keeps_latest() {
        let history = PhaseHistory::with_limit(0)
            .record(transition(FetchPhase::Idle, FetchPhase::Loading, 1));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn single_transition_has_zero_duration() {
        let history =
            PhaseHistory::new().record(transition(FetchPhase::Idle, FetchPhase::Loading, 1));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history =
            PhaseHistory::new().record(transition(FetchPhase::Idle, FetchPhase::Loading, 3));

        let json = serde_json::to_string(&history).unwrap();
        let restored: PhaseHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 1);
        assert_eq!(restored.transitions().next().map(|t| t.tag), Some(3));
    }
}
