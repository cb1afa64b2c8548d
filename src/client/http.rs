//! HTTP implementation of [`SearchClient`].

use super::error::FetchError;
use super::response::parse_hits;
use super::{RequestTarget, SearchClient};
use crate::core::Record;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Searches over HTTP with `reqwest`.
///
/// Timeouts are enforced by the underlying client and surface as
/// [`FetchError::Timeout`].
#[derive(Clone, Debug)]
pub struct HttpSearchClient {
    client: Client,
}

impl HttpSearchClient {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SearchClient for HttpSearchClient {
    async fn search(&self, target: &RequestTarget) -> Result<Vec<Record>, FetchError> {
        let response = self
            .client
            .get(target.url().clone())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        Ok(parse_hits(&body)?)
    }
}

fn transport(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(error.to_string())
    }
}
