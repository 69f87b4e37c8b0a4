use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors returned by an [`AgendaStore`](super::AgendaStore).
pub enum StoreError {
    #[error("agenda {0} not found")]
    AgendaNotFound(i64),

    #[error("article {0} not found")]
    ArticleNotFound(i64),

    #[error("no agenda is shared under this token")]
    ShareTokenNotFound,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
