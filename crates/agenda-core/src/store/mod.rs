//! Agenda and article persistence.
//!
//! An agenda is a claim (its title) plus the articles gathered as evidence.
//! The store also keeps the latest analysis summary and an optional share
//! token for read-only public access.

/// Store error types.
pub mod error;
/// In-memory implementation.
pub mod memory;
/// Persisted records.
pub mod model;


pub use error::StoreError;
pub use memory::InMemoryAgendaStore;
pub use model::{Agenda, AnalysisSummary, Article, NewArticle};

use async_trait::async_trait;

#[async_trait]
/// Storage backend for agendas and their articles.
///
/// Lists are ordered newest first. Blank titles and URLs are rejected with
/// [`StoreError::InvalidInput`].
pub trait AgendaStore: Send + Sync {
    async fn create_agenda(&self, title: &str) -> Result<Agenda, StoreError>;

    async fn list_agendas(&self) -> Result<Vec<Agenda>, StoreError>;

    async fn get_agenda(&self, id: i64) -> Result<Agenda, StoreError>;

    /// Deletes the agenda and every article attached to it.
    async fn delete_agenda(&self, id: i64) -> Result<(), StoreError>;

    async fn add_article(&self, agenda_id: i64, article: NewArticle) -> Result<Article, StoreError>;

    async fn list_articles(&self, agenda_id: i64) -> Result<Vec<Article>, StoreError>;

    async fn delete_article(&self, id: i64) -> Result<(), StoreError>;

    /// Returns the agenda's share token, generating a UUID v4 on first use.
    async fn ensure_share_token(&self, agenda_id: i64) -> Result<String, StoreError>;

    /// Looks up the agenda published under `token`.
    async fn find_shared(&self, token: &str) -> Result<Agenda, StoreError>;

    /// Replaces the agenda's stored analysis summary.
    async fn record_analysis(
        &self,
        agenda_id: i64,
        summary: AnalysisSummary,
    ) -> Result<Agenda, StoreError>;
}
