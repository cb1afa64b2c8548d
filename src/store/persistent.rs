//! A single string value mirrored into a [`ValueStore`].

use super::error::StoreError;
use super::ValueStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What to do when a write to the durable store fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritePolicy {
    /// Log a warning and carry on with the in-memory value
    #[default]
    Ignore,

    /// Return the error to the caller
    Surface,
}

impl WritePolicy {
    /// Resolve the outcome of a store write according to this policy.
    pub fn resolve(self, key: &str, result: Result<(), StoreError>) -> Result<(), StoreError> {
        match (result, self) {
            (Ok(()), _) => Ok(()),
            (Err(error), Self::Ignore) => {
                tracing::warn!(key, %error, "ignoring failed store write");
                Ok(())
            }
            (Err(error), Self::Surface) => Err(error),
        }
    }
}

/// One string value owned in memory and mirrored to a durable store.
///
/// Mutations go through [`set`](Self::set), which updates the value and
/// then runs the persist hook. The hook's failure handling is decided by
/// the [`WritePolicy`]; the in-memory value is updated either way.
///
/// # Example
///
/// ```rust
/// use hitlist::store::{MemoryStore, PersistentValue, ValueStore, WritePolicy};
/// use std::sync::Arc;
///
/// let store = Arc::new(MemoryStore::new());
/// let mut term = PersistentValue::load(store.clone(), "search", "React", WritePolicy::Ignore);
/// assert_eq!(term.get(), "React");
///
/// term.set("rust").unwrap();
/// assert_eq!(store.get("search").unwrap().as_deref(), Some("rust"));
/// ```
pub struct PersistentValue {
    key: String,
    value: String,
    store: Arc<dyn ValueStore>,
    policy: WritePolicy,
}

impl PersistentValue {
    /// Read `key` from the store, falling back to `default`.
    ///
    /// An empty stored value counts as absent. A failed read is logged and
    /// also falls back to `default`.
    pub fn load(
        store: Arc<dyn ValueStore>,
        key: impl Into<String>,
        default: impl Into<String>,
        policy: WritePolicy,
    ) -> Self {
        let key = key.into();
        let value = match store.get(&key) {
            Ok(Some(value)) if !value.is_empty() => value,
            Ok(_) => default.into(),
            Err(error) => {
                tracing::warn!(key = %key, %error, "failed to read persisted value, using default");
                default.into()
            }
        };

        Self {
            key,
            value,
            store,
            policy,
        }
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    /// Replace the value and persist it.
    pub fn set(&mut self, value: impl Into<String>) -> Result<(), StoreError> {
        self.value = value.into();
        self.on_change()
    }

    fn on_change(&self) -> Result<(), StoreError> {
        let result = self.store.set(&self.key, &self.value);
        self.policy.resolve(&self.key, result)
    }
}

impl std::fmt::Debug for PersistentValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistentValue")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
