use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by a [`PageFetcher`](super::PageFetcher).
///
/// The collector never propagates these; each one becomes an excerpt placeholder.
pub enum FetchError {
    /// The request did not complete within the per-page timeout.
    #[error("request timed out")]
    Timeout,

    /// Connection, TLS or protocol failure.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with something other than 200.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body could not be read or decoded.
    #[error("unreadable body: {0}")]
    Body(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_body() || err.is_decode() {
            FetchError::Body(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}
