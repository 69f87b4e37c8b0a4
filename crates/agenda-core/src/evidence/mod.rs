//! Evidence collection.
//!
//! Article records become [`EvidenceItem`]s enriched with a best-effort excerpt of
//! the live page. Fetching goes through the [`PageFetcher`] seam so tests never
//! touch the network.

/// Bounded, order-preserving collector.
pub mod collector;
/// Fetch error types.
pub mod error;
/// HTML to text.
pub mod excerpt;
/// Page fetcher trait and HTTP implementation.
pub mod fetcher;
#[cfg(any(test, feature = "mock"))]
/// In-memory page fetcher (enabled with `mock` feature).
pub mod mock;
/// Record and item types.
pub mod types;


pub use collector::{CollectorConfig, EMPTY_PAGE_PLACEHOLDER, EvidenceCollector, placeholder_for};
pub use error::FetchError;
pub use excerpt::{extract_excerpt, truncate_words, visible_text};
pub use fetcher::{HttpPageFetcher, PageFetcher};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockPage, MockPageFetcher};
pub use types::{ArticleRecord, EvidenceItem, publisher_from_url};
