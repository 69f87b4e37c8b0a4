//! Chat-completion request construction.

use async_openai::types::chat::CreateChatCompletionRequest;
use serde_json::json;

use super::error::AnalyzerError;
use crate::evidence::EvidenceItem;

pub const SYSTEM_PROMPT: &str = "You are an impartial evidence analyst. You rate how well a set of \
articles supports a claim. Reply with a single JSON object of the form \
{\"score\": \"Low\" | \"Medium\" | \"High\", \"reasoning\": \"...\"} and nothing else.";

pub const INSTRUCTIONS: &str = "Judge the claim only from the evidence listed here and do not assume \
facts that are not in it. If the evidence is thin, off-topic or its excerpts could not be fetched, \
lower your confidence. Answer with exactly two fields: score (Low, Medium or High) and reasoning.";

/// Builds the request body sent to the analyzer.
///
/// The user message is itself a JSON document holding the claim, every evidence
/// item (title, url, publisher, description, excerpt) and the instructions.
pub fn build_request(
    model: &str,
    claim: &str,
    evidence: &[EvidenceItem],
) -> Result<CreateChatCompletionRequest, AnalyzerError> {
    let user_content = json!({
        "claim": claim,
        "evidence": evidence,
        "instructions": INSTRUCTIONS,
    })
    .to_string();

    let request = json!({
        "model": model,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": user_content },
        ],
    });

    serde_json::from_value(request).map_err(|e| AnalyzerError::InvalidRequest(e.to_string()))
}
