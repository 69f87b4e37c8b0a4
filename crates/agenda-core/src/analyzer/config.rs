use std::time::Duration;

use crate::constants::{DEFAULT_ANALYZER_MODEL, DEFAULT_ANALYZER_TIMEOUT, DEFAULT_ANALYZER_URL};

#[derive(Clone, PartialEq, Eq)]
/// Configuration for the external analyzer.
pub struct AnalyzerConfig {
    /// Bearer credential. The analyzer is disabled without one.
    pub api_key: Option<String>,
    /// OpenAI-compatible chat-completion endpoint.
    pub endpoint: String,
    pub model: String,
    /// Bound on the whole request.
    pub timeout: Duration,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ANALYZER_URL.to_string(),
            model: DEFAULT_ANALYZER_MODEL.to_string(),
            timeout: DEFAULT_ANALYZER_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for AnalyzerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AnalyzerConfig {
    /// Creates an enabled config for `endpoint`.
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns `true` when a non-blank credential is present.
    pub fn is_enabled(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}
