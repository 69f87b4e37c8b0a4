use serde::Serialize;

use crate::scoring::ScoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Which scorer produced an [`Analysis`].
pub enum ScoreSource {
    /// The external analyzer answered with a usable verdict.
    External,
    /// The deterministic fallback scorer.
    Heuristic,
}

impl ScoreSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreSource::External => "external",
            ScoreSource::Heuristic => "heuristic",
        }
    }
}

impl std::fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Outcome of [`EvidenceEngine::analyze`](super::EvidenceEngine::analyze).
pub struct Analysis {
    pub result: ScoreResult,
    pub source: ScoreSource,
}

impl Analysis {
    pub fn external(result: ScoreResult) -> Self {
        Self {
            result,
            source: ScoreSource::External,
        }
    }

    pub fn heuristic(result: ScoreResult) -> Self {
        Self {
            result,
            source: ScoreSource::Heuristic,
        }
    }
}
