//! Fetch state machine.
//!
//! A pure reducer over [`FetchState`] plus a [`FetchMachine`] that tags each
//! cycle and enforces last-request-wins.
//!
//! # Example
//!
//! ```rust
//! use hitlist::fetch::{reduce, FetchEvent, FetchState};
//!
//! let state = reduce(FetchState::new(), FetchEvent::FetchInit);
//! let state = reduce(state, FetchEvent::FetchFailure);
//!
//! assert!(state.is_error());
//! assert!(!state.is_loading());
//! ```

mod error;
mod event;
mod machine;
mod reducer;

pub use error::ProgrammingError;
pub use event::FetchEvent;
pub use machine::{FetchMachine, Settlement, Tag};
pub use reducer::{reduce, FetchState};
