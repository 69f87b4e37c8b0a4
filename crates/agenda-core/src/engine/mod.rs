//! Claim analysis orchestration.
//!
//! ```text
//! records ─► empty? ──yes──► heuristic "no evidence" (Low)
//!               │
//!               no
//!               ▼
//!          collector ─► analyzer? ──ok──► external verdict
//!                           │
//!                  none / any error
//!                           ▼
//!                       heuristic
//! ```
//!
//! The engine never fails: every degraded path ends in a [`ScoreResult`].

/// Result types.
pub mod types;


pub use types::{Analysis, ScoreSource};

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::analyzer::{Analyzer, build_analyzer};
use crate::config::Config;
use crate::evidence::{
    ArticleRecord, EvidenceCollector, FetchError, HttpPageFetcher, PageFetcher,
};
use crate::scoring::{ScoreResult, score_heuristic};

/// Fallback scorer consulted when no external verdict is available.
pub type HeuristicFn = fn(&str, &[ArticleRecord]) -> ScoreResult;

/// Rates claims against their article evidence.
///
/// Holds no mutable state; one instance is shared by every request.
pub struct EvidenceEngine<F: PageFetcher> {
    collector: EvidenceCollector<F>,
    analyzer: Option<Arc<dyn Analyzer>>,
    heuristic: HeuristicFn,
}

impl<F: PageFetcher> std::fmt::Debug for EvidenceEngine<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvidenceEngine")
            .field("collector", &self.collector)
            .field("has_analyzer", &self.analyzer.is_some())
            .finish()
    }
}

impl EvidenceEngine<HttpPageFetcher> {
    /// Builds the production engine: HTTP page fetcher plus the analyzer, if a
    /// credential is configured.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let collector_config = config.collector_config();
        let fetcher = HttpPageFetcher::new(collector_config.fetch_timeout)?;
        let analyzer = build_analyzer(&config.analyzer_config());

        Ok(Self::new(
            EvidenceCollector::new(fetcher, collector_config),
            analyzer,
        ))
    }
}

impl<F: PageFetcher> EvidenceEngine<F> {
    pub fn new(collector: EvidenceCollector<F>, analyzer: Option<Arc<dyn Analyzer>>) -> Self {
        Self {
            collector,
            analyzer,
            heuristic: score_heuristic,
        }
    }

    /// Replaces the fallback scorer (defaults to [`score_heuristic`]).
    pub fn with_heuristic(mut self, heuristic: HeuristicFn) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn collector(&self) -> &EvidenceCollector<F> {
        &self.collector
    }

    pub fn has_analyzer(&self) -> bool {
        self.analyzer.is_some()
    }

    /// Rates `claim` against `records`.
    ///
    /// A successful analyzer verdict pre-empts the heuristic. Analyzer failures
    /// are logged and fall through; they are never surfaced to the caller.
    #[instrument(skip(self, claim, records), fields(records = records.len()))]
    pub async fn analyze(&self, claim: &str, records: &[ArticleRecord]) -> Analysis {
        if records.is_empty() {
            info!("No evidence recorded; skipping collection");
            return Analysis::heuristic((self.heuristic)(claim, records));
        }

        let evidence = self.collector.collect(records).await;

        if let Some(analyzer) = &self.analyzer {
            match analyzer.analyze(claim, &evidence).await {
                Ok(verdict) => {
                    info!(score = %verdict.score, "External analyzer verdict");
                    return Analysis::external(verdict.into_result(claim));
                }
                Err(e) => {
                    warn!(error = %e, "External analyzer failed; falling back to heuristic");
                }
            }
        }

        let result = (self.heuristic)(claim, records);
        info!(score = %result.score, "Heuristic verdict");
        Analysis::heuristic(result)
    }
}
