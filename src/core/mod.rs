//! Core value types.
//!
//! This module holds the plain data the rest of the crate moves around:
//! - `Record` and `RecordId` for search results
//! - `FetchPhase` for the fetch lifecycle
//! - `PhaseHistory` for diagnostics on phase changes
//!
//! Nothing in here performs I/O.

mod history;
mod phase;
mod record;

pub use history::{PhaseHistory, PhaseTransition, DEFAULT_HISTORY_LIMIT};
pub use phase::FetchPhase;
pub use record::{Record, RecordId};
