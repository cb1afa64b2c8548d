//! Controller configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration.
//!
//! ```rust
//! use hitlist::config::Config;
//!
//! let config = Config::from_toml_str(r#"
//!     default_term = "rust"
//!     write_policy = "surface"
//! "#).unwrap();
//!
//! assert_eq!(config.default_term, "rust");
//! assert_eq!(config.search_key, "search");
//! ```

use crate::core::DEFAULT_HISTORY_LIMIT;
use crate::store::WritePolicy;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";
pub const DEFAULT_TERM: &str = "React";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search endpoint; the term is appended as `?query=`
    pub endpoint: String,

    /// Search term used when none has been persisted
    pub default_term: String,

    /// Store key holding the search term
    pub search_key: String,

    /// Store key holding the result snapshot
    pub results_key: String,

    pub request_timeout_secs: u64,

    /// Handling of failed store writes
    pub write_policy: WritePolicy,

    /// Persist the visible result list across restarts
    pub persist_results: bool,

    /// Submit the persisted term when the controller starts
    pub search_on_start: bool,

    /// Phase transitions retained for diagnostics
    pub history_limit: usize,

    /// Location of the file store; platform data dir when unset
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_term: DEFAULT_TERM.to_string(),
            search_key: "search".to_string(),
            results_key: "stories".to_string(),
            request_timeout_secs: 10,
            write_policy: WritePolicy::Ignore,
            persist_results: false,
            search_on_start: false,
            history_limit: DEFAULT_HISTORY_LIMIT,
            store_path: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.endpoint_url()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Parsed endpoint. Only `http` and `https` endpoints are accepted.
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason,
        };

        let url = Url::parse(&self.endpoint).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Configured store path, or `<data dir>/hitlist/store.json`.
    pub fn resolved_store_path(&self) -> PathBuf {
        self.store_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("hitlist")
                .join("store.json")
        })
    }
}
