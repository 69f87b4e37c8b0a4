use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::error::FetchError;
use super::fetcher::PageFetcher;

#[derive(Debug, Clone)]
/// Canned response for a URL.
pub enum MockPage {
    /// 200 with this body.
    Html(String),
    /// Non-200 status.
    Status(u16),
    /// Connection-level failure.
    Unreachable,
    /// 200 with this body after a delay.
    Slow(Duration, String),
}

#[derive(Default, Clone)]
/// In-memory [`PageFetcher`]. Unknown URLs behave as [`MockPage::Unreachable`].
pub struct MockPageFetcher {
    pages: Arc<RwLock<HashMap<String, MockPage>>>,
    requests: Arc<RwLock<Vec<String>>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a response for `url`.
    pub fn with_page(self, url: impl Into<String>, page: MockPage) -> Self {
        self.pages.write().insert(url.into(), page);
        self
    }

    /// Registers a 200 response with `html`.
    pub fn with_html(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.with_page(url, MockPage::Html(html.into()))
    }

    /// URLs requested so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.read().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.read().len()
    }
}

#[async_trait]
impl PageFetcher for MockPageFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        self.requests.write().push(url.to_string());

        let page = self.pages.read().get(url).cloned();
        match page {
            Some(MockPage::Html(body)) => Ok(body),
            Some(MockPage::Status(code)) => Err(FetchError::Status(code)),
            Some(MockPage::Slow(delay, body)) => {
                tokio::time::sleep(delay).await;
                Ok(body)
            }
            Some(MockPage::Unreachable) | None => Err(FetchError::Request(format!(
                "connection refused: {url}"
            ))),
        }
    }
}
