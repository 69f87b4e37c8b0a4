use serde::{Deserialize, Serialize};

use crate::constants::{
    HIGH_THRESHOLD, MEDIUM_THRESHOLD, POINTS_PER_ARTICLE, POINTS_PER_DOMAIN,
    POINTS_PER_QUALITY_MATCH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Confidence that the evidence supports the claim. Ordered `Low < Medium < High`.
pub enum Rating {
    Low,
    Medium,
    High,
}

impl Rating {
    /// Maps a point total onto the fixed thresholds.
    pub fn from_points(points: u32) -> Self {
        if points >= HIGH_THRESHOLD {
            Rating::High
        } else if points >= MEDIUM_THRESHOLD {
            Rating::Medium
        } else {
            Rating::Low
        }
    }

    /// Parses `"low"`, `"Medium"`, `" HIGH "` and so on.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Rating::Low),
            "medium" => Some(Rating::Medium),
            "high" => Some(Rating::High),
            _ => None,
        }
    }

    /// Stable string used in JSON and response headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Low => "Low",
            Rating::Medium => "Medium",
            Rating::High => "High",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Outcome of one analysis.
pub struct ScoreResult {
    pub score: Rating,
    /// Never empty.
    pub reasoning: String,
    /// Echo of the analyzed claim.
    pub claim: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
/// The three counts the heuristic rating is derived from.
pub struct EvidenceSignals {
    /// Number of evidence items.
    pub count: u32,
    /// Distinct normalized publishers.
    pub domain_count: u32,
    /// Items mentioning at least one quality keyword.
    pub quality_matches: u32,
}

impl EvidenceSignals {
    pub fn new(count: u32, domain_count: u32, quality_matches: u32) -> Self {
        Self {
            count,
            domain_count,
            quality_matches,
        }
    }

    /// Weighted sum; saturates instead of overflowing.
    pub fn points(&self) -> u32 {
        self.count
            .saturating_mul(POINTS_PER_ARTICLE)
            .saturating_add(self.domain_count.saturating_mul(POINTS_PER_DOMAIN))
            .saturating_add(self.quality_matches.saturating_mul(POINTS_PER_QUALITY_MATCH))
    }

    pub fn rating(&self) -> Rating {
        Rating::from_points(self.points())
    }
}
