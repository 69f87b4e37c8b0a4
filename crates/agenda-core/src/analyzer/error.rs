use thiserror::Error;

#[derive(Debug, Error)]
/// Reasons the external analyzer produced no usable verdict.
///
/// The engine treats every variant the same way: fall back to the heuristic.
pub enum AnalyzerError {
    /// No credential configured.
    #[error("analyzer credential not configured")]
    MissingCredential,

    /// The request could not be built.
    #[error("failed to build analyzer request: {0}")]
    InvalidRequest(String),

    /// The call exceeded the configured timeout.
    #[error("analyzer request timed out")]
    Timeout,

    /// Connection, TLS or protocol failure.
    #[error("analyzer request failed: {0}")]
    Request(String),

    /// Non-200 response.
    #[error("analyzer returned status {0}")]
    Status(u16),

    /// Response body or message content was not in the expected shape.
    #[error("malformed analyzer reply: {0}")]
    MalformedReply(String),

    /// The reply carried a score outside Low/Medium/High.
    #[error("analyzer returned unknown score '{0}'")]
    InvalidScore(String),
}

impl From<reqwest::Error> for AnalyzerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AnalyzerError::Timeout
        } else if err.is_decode() || err.is_body() {
            AnalyzerError::MalformedReply(err.to_string())
        } else {
            AnalyzerError::Request(err.to_string())
        }
    }
}
