//! Hitlist: a last-request-wins search state machine.
//!
//! Hitlist keeps the state behind a "search and dismiss" result list: a
//! persisted search term, a fetch lifecycle whose transitions are a pure
//! reducer, and an ordering discipline that makes sure only the most recent
//! request ever reaches the view.
//!
//! # Core Concepts
//!
//! - **Reducer**: `fetch::reduce` maps `(FetchState, FetchEvent)` to the
//!   next state with no side effects
//! - **Tags**: every fetch cycle gets a sequence number; stale results are
//!   discarded instead of applied
//! - **Persisted values**: `store::PersistentValue` mirrors the search term
//!   into a durable store after every change
//!
//! # Example
//!
//! ```rust
//! use hitlist::client::{FetchError, RequestTarget, SearchClient};
//! use hitlist::config::Config;
//! use hitlist::core::{Record, RecordId};
//! use hitlist::store::MemoryStore;
//! use hitlist::SearchController;
//! use std::sync::Arc;
//!
//! struct OneHit;
//!
//! #[async_trait::async_trait]
//! impl SearchClient for OneHit {
//!     async fn search(&self, _target: &RequestTarget) -> Result<Vec<Record>, FetchError> {
//!         Ok(vec![Record {
//!             id: RecordId::from(1),
//!             title: "A".into(),
//!             url: "u".into(),
//!             author: "x".into(),
//!             comment_count: 0,
//!             score: 1,
//!         }])
//!     }
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let controller =
//!     SearchController::new(Config::default(), OneHit, Arc::new(MemoryStore::new())).unwrap();
//!
//! controller.submit_search().await.unwrap();
//! assert_eq!(controller.view().records.len(), 1);
//!
//! controller.remove_record(&RecordId::from(1)).unwrap();
//! assert!(controller.view().records.is_empty());
//! # });
//! ```

pub mod client;
pub mod config;
pub mod controller;
pub mod core;
pub mod fetch;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use controller::{Intent, SearchController, SearchView, SubmitOutcome};
pub use core::{FetchPhase, Record, RecordId};
pub use fetch::{reduce, FetchEvent, FetchState};
