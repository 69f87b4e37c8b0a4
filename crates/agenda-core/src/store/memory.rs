use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::AgendaStore;
use super::error::StoreError;
use super::model::{Agenda, AnalysisSummary, Article, NewArticle};

#[derive(Default)]
struct Tables {
    next_agenda_id: i64,
    next_article_id: i64,
    agendas: BTreeMap<i64, Agenda>,
    articles: BTreeMap<i64, Article>,
}

/// Process-local [`AgendaStore`].
///
/// Ids are assigned from monotonically increasing counters starting at 1, so
/// "newest first" is descending id order. All data is lost on restart.
#[derive(Default)]
pub struct InMemoryAgendaStore {
    tables: RwLock<Tables>,
}

impl std::fmt::Debug for InMemoryAgendaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables = self.tables.read();
        f.debug_struct("InMemoryAgendaStore")
            .field("agendas", &tables.agendas.len())
            .field("articles", &tables.articles.len())
            .finish()
    }
}

impl InMemoryAgendaStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn required(field: &str, value: &str) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidInput(format!("{field} must not be blank")));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[async_trait]
impl AgendaStore for InMemoryAgendaStore {
    async fn create_agenda(&self, title: &str) -> Result<Agenda, StoreError> {
        let title = required("title", title)?;

        let mut tables = self.tables.write();
        tables.next_agenda_id += 1;
        let agenda = Agenda {
            id: tables.next_agenda_id,
            title,
            created_at: Utc::now(),
            share_token: None,
            analysis: None,
        };
        tables.agendas.insert(agenda.id, agenda.clone());

        debug!(agenda_id = agenda.id, "Agenda created");
        Ok(agenda)
    }

    async fn list_agendas(&self) -> Result<Vec<Agenda>, StoreError> {
        Ok(self.tables.read().agendas.values().rev().cloned().collect())
    }

    async fn get_agenda(&self, id: i64) -> Result<Agenda, StoreError> {
        self.tables
            .read()
            .agendas
            .get(&id)
            .cloned()
            .ok_or(StoreError::AgendaNotFound(id))
    }

    async fn delete_agenda(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.tables.write();
        tables
            .agendas
            .remove(&id)
            .ok_or(StoreError::AgendaNotFound(id))?;

        let before = tables.articles.len();
        tables.articles.retain(|_, article| article.agenda_id != id);

        debug!(
            agenda_id = id,
            articles_removed = before - tables.articles.len(),
            "Agenda deleted"
        );
        Ok(())
    }

    async fn add_article(&self, agenda_id: i64, article: NewArticle) -> Result<Article, StoreError> {
        let title = required("title", &article.title)?;
        let url = required("url", &article.url)?;

        let mut tables = self.tables.write();
        if !tables.agendas.contains_key(&agenda_id) {
            return Err(StoreError::AgendaNotFound(agenda_id));
        }

        tables.next_article_id += 1;
        let article = Article {
            id: tables.next_article_id,
            agenda_id,
            title,
            url,
            description: optional(article.description),
            image: optional(article.image),
            created_at: Utc::now(),
        };
        tables.articles.insert(article.id, article.clone());

        debug!(agenda_id, article_id = article.id, "Article added");
        Ok(article)
    }

    async fn list_articles(&self, agenda_id: i64) -> Result<Vec<Article>, StoreError> {
        let tables = self.tables.read();
        if !tables.agendas.contains_key(&agenda_id) {
            return Err(StoreError::AgendaNotFound(agenda_id));
        }

        Ok(tables
            .articles
            .values()
            .rev()
            .filter(|article| article.agenda_id == agenda_id)
            .cloned()
            .collect())
    }

    async fn delete_article(&self, id: i64) -> Result<(), StoreError> {
        self.tables
            .write()
            .articles
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::ArticleNotFound(id))
    }

    async fn ensure_share_token(&self, agenda_id: i64) -> Result<String, StoreError> {
        let mut tables = self.tables.write();
        let agenda = tables
            .agendas
            .get_mut(&agenda_id)
            .ok_or(StoreError::AgendaNotFound(agenda_id))?;

        let token = agenda
            .share_token
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone();
        Ok(token)
    }

    async fn find_shared(&self, token: &str) -> Result<Agenda, StoreError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(StoreError::ShareTokenNotFound);
        }

        self.tables
            .read()
            .agendas
            .values()
            .find(|agenda| agenda.share_token.as_deref() == Some(token))
            .cloned()
            .ok_or(StoreError::ShareTokenNotFound)
    }

    async fn record_analysis(
        &self,
        agenda_id: i64,
        summary: AnalysisSummary,
    ) -> Result<Agenda, StoreError> {
        let mut tables = self.tables.write();
        let agenda = tables
            .agendas
            .get_mut(&agenda_id)
            .ok_or(StoreError::AgendaNotFound(agenda_id))?;

        agenda.analysis = Some(summary);
        Ok(agenda.clone())
    }
}
