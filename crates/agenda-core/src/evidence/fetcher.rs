//! Page fetching.
//!
//! [`HttpPageFetcher`] is the production implementation; tests substitute
//! `MockPageFetcher` (enabled with the `mock` feature).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::debug;

use super::error::FetchError;
use crate::constants::{BROWSER_USER_AGENT, DEFAULT_FETCH_TIMEOUT};

#[async_trait]
/// Retrieves the raw HTML of an article page.
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns its body. Anything other than HTTP 200 is an error.
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError>;
}

/// reqwest-backed fetcher with a browser-like user agent and a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    http: HttpClient,
    timeout: Duration,
}

impl HttpPageFetcher {
    /// Creates a fetcher whose every request is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .map_err(|e| FetchError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, timeout })
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for HttpPageFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_TIMEOUT).unwrap_or_else(|_| Self {
            http: HttpClient::new(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(url, status = status.as_u16(), "Page fetch returned non-200");
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
