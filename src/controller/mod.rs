//! Search controller.
//!
//! Owns the persisted search term, starts fetch cycles against the
//! configured endpoint, and forwards dismissals to the fetch machine.

mod cycle;
mod view;

pub use view::{Intent, SearchView, SubmitOutcome};

use crate::client::{RequestTarget, SearchClient};
use crate::config::{Config, ConfigError};
use crate::core::{PhaseHistory, Record, RecordId};
use crate::fetch::{FetchMachine, FetchState};
use crate::snapshot::Snapshot;
use crate::store::{PersistentValue, StoreError, ValueStore};
use cycle::PendingCycle;
use parking_lot::Mutex;
use reqwest::Url;
use std::future::Future;
use std::sync::Arc;

/// Composes the persisted search term with the fetch machine.
///
/// All methods take `&self`; locks are never held across an `.await`, so
/// several submits may be in flight at once and only the latest one's
/// outcome reaches the view.
pub struct SearchController<C> {
    config: Config,
    endpoint: Url,
    client: C,
    store: Arc<dyn ValueStore>,
    term: Mutex<PersistentValue>,
    machine: Mutex<FetchMachine>,
}

impl<C: SearchClient> SearchController<C> {
    /// Build a controller, reading the search term (and, when enabled, the
    /// result snapshot) from `store`.
    pub fn new(config: Config, client: C, store: Arc<dyn ValueStore>) -> Result<Self, ConfigError> {
        let endpoint = config.endpoint_url()?;
        let term = PersistentValue::load(
            Arc::clone(&store),
            config.search_key.clone(),
            config.default_term.clone(),
            config.write_policy,
        );

        let mut machine = FetchMachine::with_history_limit(config.history_limit);
        if config.persist_results {
            if let Some(snapshot) = load_snapshot(store.as_ref(), &config.results_key) {
                machine.restore(snapshot.records);
            }
        }

        Ok(Self {
            config,
            endpoint,
            client,
            store,
            term: Mutex::new(term),
            machine: Mutex::new(machine),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn search_term(&self) -> String {
        self.term.lock().get().to_string()
    }

    /// Update the search term and persist it. Does not fetch.
    pub fn set_search_term(&self, text: impl Into<String>) -> Result<(), StoreError> {
        self.term.lock().set(text)
    }

    /// Start a fetch cycle for the current term.
    ///
    /// The term is captured and `FETCH_INIT` dispatched when this is called,
    /// not when the returned future is first polled. An empty term yields
    /// [`SubmitOutcome::Skipped`] without touching the fetch state.
    ///
    /// The only error is a surfaced failure to persist the result snapshot.
    pub fn submit_search(
        &self,
    ) -> impl Future<Output = Result<SubmitOutcome, StoreError>> + Send + '_ {
        let cycle = self.prepare();
        async move {
            let Some(cycle) = cycle else {
                tracing::debug!("empty search term, submit skipped");
                return Ok(SubmitOutcome::Skipped);
            };

            tracing::debug!(tag = cycle.tag(), "awaiting search response");
            let outcome = self.client.search(cycle.target()).await;
            let settlement = cycle.settle(outcome);

            if settlement.is_applied() {
                self.save_snapshot()?;
            }
            Ok(SubmitOutcome::Settled(settlement))
        }
    }

    fn prepare(&self) -> Option<PendingCycle<'_>> {
        let term = self.search_term();
        if term.is_empty() {
            return None;
        }
        let target = RequestTarget::new(&self.endpoint, &term);
        Some(PendingCycle::begin(&self.machine, target))
    }

    /// Dismiss a record without refetching. Returns whether it was present.
    pub fn remove_record(&self, id: &RecordId) -> Result<bool, StoreError> {
        let removed = self.machine.lock().remove(id);
        if removed {
            self.save_snapshot()?;
        }
        Ok(removed)
    }

    /// Apply one presentation event and return the resulting view.
    pub async fn handle(&self, intent: Intent) -> Result<SearchView, StoreError> {
        match intent {
            Intent::InputChange(text) => self.set_search_term(text)?,
            Intent::Submit => {
                self.submit_search().await?;
            }
            Intent::Remove(id) => {
                self.remove_record(&id)?;
            }
        }
        Ok(self.view())
    }

    /// Submit the persisted term if `search_on_start` is configured.
    pub async fn start(&self) -> Result<SubmitOutcome, StoreError> {
        if self.config.search_on_start {
            self.submit_search().await
        } else {
            Ok(SubmitOutcome::Skipped)
        }
    }

    /// Flush pending store writes before exit.
    pub fn shutdown(&self) -> Result<(), StoreError> {
        let result = self.store.flush();
        self.config.write_policy.resolve("*", result)
    }

    pub fn view(&self) -> SearchView {
        let term = self.search_term();
        SearchView::new(term, self.machine.lock().state())
    }

    pub fn fetch_state(&self) -> FetchState {
        self.machine.lock().state().clone()
    }

    pub fn history(&self) -> PhaseHistory {
        self.machine.lock().history().clone()
    }

    fn save_snapshot(&self) -> Result<(), StoreError> {
        if !self.config.persist_results {
            return Ok(());
        }

        let records: Vec<Record> = self.machine.lock().state().records().to_vec();
        let snapshot = Snapshot::new(self.search_term(), records);
        let key = self.config.results_key.as_str();

        let result = snapshot
            .to_json()
            .map_err(|e| StoreError::Serialization(e.to_string()))
            .and_then(|json| self.store.set(key, &json));
        self.config.write_policy.resolve(key, result)
    }
}

fn load_snapshot(store: &dyn ValueStore, key: &str) -> Option<Snapshot> {
    let json = match store.get(key) {
        Ok(json) => json?,
        Err(error) => {
            tracing::warn!(key, %error, "failed to read result snapshot");
            return None;
        }
    };

    match Snapshot::from_json(&json) {
        Ok(snapshot) => {
            tracing::debug!(key, records = snapshot.records.len(), "restored result snapshot");
            Some(snapshot)
        }
        Err(error) => {
            tracing::warn!(key, %error, "ignoring unreadable result snapshot");
            None
        }
    }
}

impl<C> std::fmt::Debug for SearchController<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("endpoint", &self.endpoint.as_str())
            .field("term", &*self.term.lock())
            .finish_non_exhaustive()
    }
}
