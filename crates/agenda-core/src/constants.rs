//! Cross-cutting, shared constants.
//!
//! The scoring weights and thresholds are part of the rating contract: changing any of
//! them changes which rating a given evidence set receives.

use std::time::Duration;

/// Points contributed by each evidence item.
pub const POINTS_PER_ARTICLE: u32 = 10;
/// Points contributed by each distinct publisher.
pub const POINTS_PER_DOMAIN: u32 = 15;
/// Points contributed by each item mentioning a quality keyword.
pub const POINTS_PER_QUALITY_MATCH: u32 = 10;

/// Minimum points for a `High` rating.
pub const HIGH_THRESHOLD: u32 = 65;
/// Minimum points for a `Medium` rating.
pub const MEDIUM_THRESHOLD: u32 = 35;

/// Lowercase substrings that mark an item as citing substantive material.
pub const QUALITY_KEYWORDS: [&str; 15] = [
    "report",
    "study",
    "evidence",
    "confirmed",
    "analysis",
    "data",
    "statistics",
    "review",
    "official",
    "survey",
    "court",
    "verdict",
    "proof",
    "science",
    "research",
];

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);
pub const MAX_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

pub const DEFAULT_EXCERPT_WORDS: usize = 200;

pub const DEFAULT_FETCH_CONCURRENCY: usize = 4;

pub const DEFAULT_ANALYZER_TIMEOUT: Duration = Duration::from_secs(45);
pub const MAX_ANALYZER_TIMEOUT: Duration = Duration::from_secs(45);

pub const DEFAULT_ANALYZER_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const DEFAULT_ANALYZER_MODEL: &str = "gpt-4o-mini";

/// Browser-like identity for page fetches; many publishers reject unknown agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Appended to excerpts cut at the word budget.
pub const TRUNCATION_MARKER: &str = "...";
