use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::{debug, instrument};

use super::config::AnalyzerConfig;
use super::error::AnalyzerError;
use super::prompt::build_request;
use super::reply::{Verdict, message_content, parse_verdict};
use crate::evidence::EvidenceItem;

#[async_trait]
/// Remote rating of a claim against its evidence.
pub trait Analyzer: Send + Sync {
    /// Rates `claim` using only `evidence`.
    async fn analyze(&self, claim: &str, evidence: &[EvidenceItem])
    -> Result<Verdict, AnalyzerError>;
}

/// Client for an OpenAI-compatible chat-completion endpoint.
pub struct OpenAiAnalyzer {
    http: HttpClient,
    config: AnalyzerConfig,
}

impl std::fmt::Debug for OpenAiAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiAnalyzer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OpenAiAnalyzer {
    /// Creates a client whose requests are bounded by `config.timeout`.
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AnalyzerError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

#[async_trait]
impl Analyzer for OpenAiAnalyzer {
    #[instrument(skip(self, claim, evidence), fields(model = %self.config.model, evidence = evidence.len()))]
    async fn analyze(
        &self,
        claim: &str,
        evidence: &[EvidenceItem],
    ) -> Result<Verdict, AnalyzerError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(AnalyzerError::MissingCredential)?;

        let request = build_request(&self.config.model, claim, evidence)?;

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AnalyzerError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let content = message_content(&body)?;

        debug!(content_len = content.len(), "Analyzer replied");

        parse_verdict(&content)
    }
}
