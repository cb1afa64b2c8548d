//! Store error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the durable store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("Store I/O failed at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file does not hold a JSON object of strings
    #[error("Store contents are corrupt: {0}")]
    Corrupt(String),

    /// Encoding the store contents failed
    #[error("Store serialization failed: {0}")]
    Serialization(String),

    /// The store refused the operation
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
