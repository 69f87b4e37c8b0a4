//! Agenda library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! ## Engine
//! - [`EvidenceEngine`], [`Analysis`], [`ScoreSource`] - Claim analysis with fallback
//!
//! ## Evidence
//! - [`EvidenceCollector`], [`CollectorConfig`] - Bounded concurrent excerpt fetching
//! - [`PageFetcher`], [`HttpPageFetcher`] - Page retrieval seam
//! - [`ArticleRecord`], [`EvidenceItem`] - Scoring inputs
//!
//! ## Scoring
//! - [`score_heuristic`], [`Rating`], [`ScoreResult`] - Deterministic fallback scorer
//!
//! ## External analyzer
//! - [`Analyzer`], [`OpenAiAnalyzer`], [`AnalyzerConfig`] - Chat-completion adapter
//!
//! ## Storage
//! - [`AgendaStore`], [`InMemoryAgendaStore`] - Agendas, articles, share tokens
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod analyzer;
pub mod config;
pub mod constants;
pub mod engine;
pub mod evidence;
pub mod scoring;
pub mod store;

pub use analyzer::{
    Analyzer, AnalyzerConfig, AnalyzerError, OpenAiAnalyzer, Verdict, build_analyzer,
};
#[cfg(any(test, feature = "mock"))]
pub use analyzer::MockAnalyzer;
pub use config::{Config, ConfigError};
pub use engine::{Analysis, EvidenceEngine, HeuristicFn, ScoreSource};
pub use evidence::{
    ArticleRecord, CollectorConfig, EvidenceCollector, EvidenceItem, FetchError, HttpPageFetcher,
    PageFetcher, publisher_from_url,
};
#[cfg(any(test, feature = "mock"))]
pub use evidence::{MockPage, MockPageFetcher};
pub use scoring::{EvidenceSignals, Rating, ScoreResult, score_heuristic};
pub use store::{
    Agenda, AgendaStore, AnalysisSummary, Article, InMemoryAgendaStore, NewArticle, StoreError,
};
