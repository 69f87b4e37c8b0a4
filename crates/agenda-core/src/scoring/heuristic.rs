//! Offline heuristic scorer.
//!
//! Pure: the same records always produce the same rating and reasoning. This is
//! the fallback that guarantees a rating exists even with no network at all.

use std::collections::BTreeSet;

use tracing::debug;

use super::types::{EvidenceSignals, Rating, ScoreResult};
use crate::constants::QUALITY_KEYWORDS;
use crate::evidence::ArticleRecord;

/// Reasoning returned when no evidence is attached.
pub const NO_EVIDENCE_REASONING: &str =
    "No evidence has been added for this claim yet, so there is nothing to support it.";

/// Scores `claim` from its article records.
pub fn score_heuristic(claim: &str, records: &[ArticleRecord]) -> ScoreResult {
    if records.is_empty() {
        return ScoreResult {
            score: Rating::Low,
            reasoning: NO_EVIDENCE_REASONING.to_string(),
            claim: claim.to_string(),
        };
    }

    let (signals, domains) = signals_and_domains(records);
    let score = signals.rating();

    debug!(
        count = signals.count,
        domain_count = signals.domain_count,
        quality_matches = signals.quality_matches,
        points = signals.points(),
        score = %score,
        "Heuristic score computed"
    );

    ScoreResult {
        score,
        reasoning: explain(score, &signals, &domains),
        claim: claim.to_string(),
    }
}

/// Counts behind the heuristic rating.
pub fn evidence_signals(records: &[ArticleRecord]) -> EvidenceSignals {
    signals_and_domains(records).0
}

/// True if title or description mentions any quality keyword (case-insensitive substring).
pub fn has_quality_keyword(record: &ArticleRecord) -> bool {
    let text = format!(
        "{} {}",
        record.title,
        record.description.as_deref().unwrap_or_default()
    )
    .to_lowercase();

    QUALITY_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

fn signals_and_domains(records: &[ArticleRecord]) -> (EvidenceSignals, BTreeSet<String>) {
    // Unparseable URLs have an empty publisher and contribute no domain.
    let domains: BTreeSet<String> = records
        .iter()
        .map(ArticleRecord::publisher)
        .filter(|p| !p.is_empty())
        .collect();
    let quality_matches = records.iter().filter(|r| has_quality_keyword(r)).count();

    let signals = EvidenceSignals::new(
        saturating_u32(records.len()),
        saturating_u32(domains.len()),
        saturating_u32(quality_matches),
    );
    (signals, domains)
}

fn explain(score: Rating, signals: &EvidenceSignals, domains: &BTreeSet<String>) -> String {
    let articles = plural(signals.count, "article", "articles");
    let sources = plural(signals.domain_count, "source", "sources");
    let quality = signals.quality_matches;

    match score {
        Rating::High => format!(
            "Strong support: {articles} from {sources}, {quality} of which cite reports, studies or official data."
        ),
        Rating::Medium => {
            let listed = if domains.is_empty() {
                String::new()
            } else {
                format!(
                    " ({})",
                    domains.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
                )
            };
            format!(
                "Moderate support: {articles} from {sources}{listed}, {quality} of which cite substantive material. More independent sources would strengthen the claim."
            )
        }
        Rating::Low => format!(
            "Weak support: only {articles} from {sources}, {quality} of which cite substantive material."
        ),
    }
}

fn plural(n: u32, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
