use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, instrument};

use super::error::FetchError;
use super::excerpt::extract_excerpt;
use super::fetcher::PageFetcher;
use super::types::{ArticleRecord, EvidenceItem};
use crate::constants::{DEFAULT_EXCERPT_WORDS, DEFAULT_FETCH_CONCURRENCY, DEFAULT_FETCH_TIMEOUT};

/// Excerpt used when a page was fetched but held no readable text.
pub const EMPTY_PAGE_PLACEHOLDER: &str = "No readable text found on the page.";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Configuration for [`EvidenceCollector`].
pub struct CollectorConfig {
    /// Timeout applied to each page fetch independently.
    pub fetch_timeout: Duration,
    /// Word budget per excerpt.
    pub excerpt_words: usize,
    /// Max fetches in flight at once.
    pub concurrency: usize,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            excerpt_words: DEFAULT_EXCERPT_WORDS,
            concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }
}

/// Turns article records into evidence items with best-effort page excerpts.
pub struct EvidenceCollector<F: PageFetcher> {
    fetcher: F,
    config: CollectorConfig,
}

impl<F: PageFetcher> std::fmt::Debug for EvidenceCollector<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvidenceCollector")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<F: PageFetcher> EvidenceCollector<F> {
    pub fn new(fetcher: F, config: CollectorConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Collects evidence for every record, preserving input order.
    ///
    /// Fetch failures are folded into placeholder excerpts; this never fails.
    #[instrument(skip(self, records), fields(records = records.len()))]
    pub async fn collect(&self, records: &[ArticleRecord]) -> Vec<EvidenceItem> {
        let width = self.config.concurrency.max(1);

        let pending: Vec<_> = records
            .iter()
            .map(|record| self.collect_one(record))
            .collect();

        stream::iter(pending)
            .buffered(width)
            .collect::<Vec<_>>()
            .await
    }

    /// Builds one evidence item, fetching its page excerpt.
    pub async fn collect_one(&self, record: &ArticleRecord) -> EvidenceItem {
        let item = EvidenceItem::from_record(record);

        // The fetcher carries its own timeout; this one also bounds fetchers that don't.
        let fetched =
            match tokio::time::timeout(self.config.fetch_timeout, self.fetcher.fetch_html(&record.url))
                .await
            {
                Ok(result) => result,
                Err(_) => Err(FetchError::Timeout),
            };

        let excerpt = match fetched {
            Ok(html) => {
                let text = extract_excerpt(&html, self.config.excerpt_words);
                if text.is_empty() {
                    EMPTY_PAGE_PLACEHOLDER.to_string()
                } else {
                    text
                }
            }
            Err(e) => {
                debug!(url = %record.url, error = %e, "Excerpt fetch failed");
                placeholder_for(&e)
            }
        };

        item.with_excerpt(excerpt)
    }
}

/// Explanatory excerpt text for a failed fetch.
pub fn placeholder_for(err: &FetchError) -> String {
    match err {
        FetchError::Status(code) => format!("Could not fetch content (HTTP {code})."),
        FetchError::Timeout => "Could not fetch content (timed out).".to_string(),
        other => format!("Error extracting content: {other}"),
    }
}
