//! Lifecycle phase of a fetch cycle.
//!
//! The phase is the single source of truth for the loading and error flags,
//! so the two can never be raised together.

use serde::{Deserialize, Serialize};

/// Phase of the fetch state machine.
///
/// # Example
///
/// ```rust
/// use hitlist::core::FetchPhase;
///
/// assert!(FetchPhase::Loading.is_loading());
/// assert!(FetchPhase::Failure.is_error());
/// assert!(FetchPhase::Success.is_settled());
/// assert!(!FetchPhase::Idle.is_settled());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum FetchPhase {
    /// No fetch has been issued yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch succeeded.
    Success,
    /// The latest fetch failed.
    Failure,
}

impl FetchPhase {
    /// Name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading",
            Self::Success => "Success",
            Self::Failure => "Failure",
        }
    }

    /// True once a terminal event has been applied.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure)
    }
}
