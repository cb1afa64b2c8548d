//! Durable key-value storage for user preferences.
//!
//! [`ValueStore`] is the seam to the durable store; [`PersistentValue`]
//! keeps one value in memory and mirrors each change into it.

use parking_lot::RwLock;
use std::collections::HashMap;

pub mod error;
mod file;
mod persistent;

pub use error::StoreError;
pub use file::FileStore;
pub use persistent::{PersistentValue, WritePolicy};

/// String-keyed durable store of string values.
///
/// `set` must be durable before it returns. A missing key is `Ok(None)`,
/// never an error.
pub trait ValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Push any buffered writes to durable storage.
    fn flush(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Process-local store, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
