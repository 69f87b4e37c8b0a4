//! Claim-strength scoring.
//!
//! `points = count*10 + domain_count*15 + quality_matches*10`, then
//! `>= 65` is [`Rating::High`], `>= 35` is [`Rating::Medium`], anything lower is
//! [`Rating::Low`]. See [`crate::constants`] for the weights.

/// Deterministic fallback scorer.
pub mod heuristic;
/// Rating and result types.
pub mod types;


pub use heuristic::{NO_EVIDENCE_REASONING, evidence_signals, has_quality_keyword, score_heuristic};
pub use types::{EvidenceSignals, Rating, ScoreResult};
