//! External analyzer adapter.
//!
//! Optional delegation of the rating to an OpenAI-compatible chat-completion
//! service. It is an enhancement only: every failure is reported as an
//! [`AnalyzerError`] and the engine falls back to the heuristic.

/// Analyzer trait and HTTP client.
pub mod client;
/// Analyzer configuration.
pub mod config;
/// Analyzer error types.
pub mod error;
/// Factory helpers.
pub mod factory;
#[cfg(any(test, feature = "mock"))]
/// Scripted analyzer (enabled with `mock` feature).
pub mod mock;
/// Request construction.
pub mod prompt;
/// Reply parsing.
pub mod reply;


pub use client::{Analyzer, OpenAiAnalyzer};
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use factory::build_analyzer;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockAnalyzer;
pub use prompt::build_request;
pub use reply::{MISSING_REASONING, Verdict, message_content, parse_verdict, strip_code_fence};
