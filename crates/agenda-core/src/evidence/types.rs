use serde::{Deserialize, Serialize};
use url::Url;

/// Article row handed to the engine: the persisted fields relevant to scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Article headline.
    pub title: String,
    /// Absolute URL of the article.
    pub url: String,
    /// Short summary, if any.
    #[serde(default)]
    pub description: Option<String>,
}

impl ArticleRecord {
    /// Creates a record with a description.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: Some(description.into()),
        }
    }

    /// Creates a record without a description.
    pub fn without_description(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: None,
        }
    }

    /// Normalized publisher for this record's URL (see [`publisher_from_url`]).
    pub fn publisher(&self) -> String {
        publisher_from_url(&self.url)
    }
}

/// One piece of evidence, built fresh for each analysis and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceItem {
    pub title: String,
    pub url: String,
    /// Normalized host; empty when the URL has no parseable host.
    pub publisher: String,
    pub description: Option<String>,
    /// Page text or a placeholder explaining why it is missing.
    pub excerpt: Option<String>,
}

impl EvidenceItem {
    /// Builds an item from a record without fetching anything.
    pub fn from_record(record: &ArticleRecord) -> Self {
        Self {
            title: record.title.clone(),
            url: record.url.clone(),
            publisher: record.publisher(),
            description: record.description.clone(),
            excerpt: None,
        }
    }

    /// Attaches an excerpt.
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }
}

/// Lowercased URL host with a leading `www.` removed.
///
/// Returns an empty string for malformed URLs and for URLs without a host
/// (e.g. `mailto:`), so callers never have to handle a parse error.
pub fn publisher_from_url(raw: &str) -> String {
    let Ok(parsed) = Url::parse(raw.trim()) else {
        return String::new();
    };

    let Some(host) = parsed.host_str() else {
        return String::new();
    };

    let host = host.to_lowercase();
    match host.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => host,
    }
}
