use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::client::Analyzer;
use super::error::AnalyzerError;
use super::reply::{Verdict, parse_verdict};
use crate::evidence::EvidenceItem;

#[derive(Debug, Clone)]
enum MockBehavior {
    Reply(String),
    Status(u16),
    Timeout,
}

#[derive(Debug, Clone)]
/// Scripted [`Analyzer`] that records every call.
///
/// Replies go through the real [`parse_verdict`], so fenced or malformed content
/// behaves as it would from the remote service.
pub struct MockAnalyzer {
    behavior: MockBehavior,
    calls: Arc<RwLock<Vec<(String, Vec<EvidenceItem>)>>>,
}

impl MockAnalyzer {
    /// Replies with `content` as the message body.
    pub fn replying(content: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Reply(content.into()))
    }

    /// Fails with a non-200 status.
    pub fn failing_with_status(status: u16) -> Self {
        Self::with_behavior(MockBehavior::Status(status))
    }

    /// Fails as if the request timed out.
    pub fn timing_out() -> Self {
        Self::with_behavior(MockBehavior::Timeout)
    }

    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().len()
    }

    /// `(claim, evidence)` of every call, in order.
    pub fn calls(&self) -> Vec<(String, Vec<EvidenceItem>)> {
        self.calls.read().clone()
    }
}

#[async_trait]
impl Analyzer for MockAnalyzer {
    async fn analyze(
        &self,
        claim: &str,
        evidence: &[EvidenceItem],
    ) -> Result<Verdict, AnalyzerError> {
        self.calls
            .write()
            .push((claim.to_string(), evidence.to_vec()));

        match &self.behavior {
            MockBehavior::Reply(content) => parse_verdict(content),
            MockBehavior::Status(code) => Err(AnalyzerError::Status(*code)),
            MockBehavior::Timeout => Err(AnalyzerError::Timeout),
        }
    }
}
