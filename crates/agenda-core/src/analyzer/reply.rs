//! Parsing of the analyzer's message content.

use serde::Deserialize;
use serde_json::Value;

use super::error::AnalyzerError;
use crate::scoring::{Rating, ScoreResult};

/// Substituted when the reply has a score but no reasoning.
pub const MISSING_REASONING: &str = "The analyzer returned a rating without an explanation.";

#[derive(Debug, Clone, PartialEq, Eq)]
/// A rating produced by the external analyzer.
pub struct Verdict {
    pub score: Rating,
    pub reasoning: String,
}

impl Verdict {
    pub fn into_result(self, claim: &str) -> ScoreResult {
        ScoreResult {
            score: self.score,
            reasoning: self.reasoning,
            claim: claim.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RawVerdict {
    #[serde(default)]
    score: Option<String>,
    #[serde(default)]
    reasoning: Option<String>,
}

#[derive(Deserialize)]
struct CompletionBody {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    message: Option<CompletionMessage>,
}

#[derive(Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Extracts `choices[0].message.content` from a chat-completion body.
///
/// Only that path is read; providers that omit `id`, `object`, `index` or
/// other envelope fields are accepted.
pub fn message_content(body: &[u8]) -> Result<String, AnalyzerError> {
    let completion: CompletionBody =
        serde_json::from_slice(body).map_err(|e| AnalyzerError::MalformedReply(e.to_string()))?;

    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| AnalyzerError::MalformedReply("reply has no message content".into()))
}

/// Removes a surrounding markdown code fence (with optional language tag).
pub fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let body = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parses message content into a [`Verdict`].
///
/// A missing score defaults to `Low`; a missing or blank reasoning gets
/// [`MISSING_REASONING`]. Anything that is not a JSON object, or a score outside
/// the three ratings, is an error.
pub fn parse_verdict(content: &str) -> Result<Verdict, AnalyzerError> {
    let body = strip_code_fence(content);

    let value: Value =
        serde_json::from_str(body).map_err(|e| AnalyzerError::MalformedReply(e.to_string()))?;
    if !value.is_object() {
        return Err(AnalyzerError::MalformedReply(
            "expected a JSON object".to_string(),
        ));
    }

    let raw: RawVerdict =
        serde_json::from_value(value).map_err(|e| AnalyzerError::MalformedReply(e.to_string()))?;

    let score = match raw.score {
        Some(s) => Rating::parse(&s).ok_or(AnalyzerError::InvalidScore(s))?,
        None => Rating::Low,
    };

    let reasoning = raw
        .reasoning
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| MISSING_REASONING.to_string());

    Ok(Verdict { score, reasoning })
}
