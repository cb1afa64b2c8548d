//! Network collaborator for search requests.
//!
//! The controller only depends on the [`SearchClient`] trait, so tests can
//! substitute scripted clients for the HTTP one.

mod error;
mod http;
mod response;

pub use error::{FetchError, FieldError, ParseError};
pub use http::HttpSearchClient;
pub use response::parse_hits;

use crate::core::Record;
use async_trait::async_trait;
use reqwest::Url;
use std::fmt;
use std::sync::Arc;

/// Query parameter carrying the search term.
pub const QUERY_PARAM: &str = "query";

/// Concrete input of one fetch cycle: endpoint plus the captured term.
///
/// # Example
///
/// ```rust
/// use hitlist::client::RequestTarget;
/// use reqwest::Url;
///
/// let endpoint = Url::parse("https://hn.algolia.com/api/v1/search").unwrap();
/// let target = RequestTarget::new(&endpoint, "rust lang");
///
/// assert_eq!(
///     target.url().as_str(),
///     "https://hn.algolia.com/api/v1/search?query=rust+lang"
/// );
/// assert_eq!(target.term(), "rust lang");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTarget {
    url: Url,
    term: String,
}

impl RequestTarget {
    pub fn new(endpoint: &Url, term: &str) -> Self {
        let mut url = endpoint.clone();
        url.query_pairs_mut().append_pair(QUERY_PARAM, term);
        Self {
            url,
            term: term.to_string(),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Issues a search request and returns the parsed records.
///
/// Implementations report transport and parse problems as [`FetchError`];
/// they do not retry.
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, target: &RequestTarget) -> Result<Vec<Record>, FetchError>;
}

#[async_trait]
impl<C: SearchClient + ?Sized> SearchClient for Arc<C> {
    async fn search(&self, target: &RequestTarget) -> Result<Vec<Record>, FetchError> {
        (**self).search(target).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Url {
        Url::parse("https://hn.algolia.com/api/v1/search").unwrap()
    }

    #[test]
    fn term_is_url_encoded() {
        let target = RequestTarget::new(&endpoint(), "c++ & rust");
        assert_eq!(
            target.url().query(),
            Some("query=c%2B%2B+%26+rust")
        );
    }

    #[test]
    fn existing_query_parameters_are_kept() {
        let endpoint = Url::parse("https://example.com/search?tags=story").unwrap();
        let target = RequestTarget::new(&endpoint, "react");
        assert_eq!(target.url().query(), Some("tags=story&query=react"));
    }

    #[test]
    fn display_shows_full_url() {
        let target = RequestTarget::new(&endpoint(), "react");
        assert_eq!(
            target.to_string(),
            "https://hn.algolia.com/api/v1/search?query=react"
        );
    }
}
