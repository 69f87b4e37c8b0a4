use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::evidence::ArticleRecord;
use crate::scoring::{Rating, ScoreResult};

/// Latest analysis stored on an agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub score: Rating,
    pub reasoning: String,
    pub analyzed_at: DateTime<Utc>,
    /// Number of articles the analysis saw.
    pub article_count: usize,
}

impl AnalysisSummary {
    pub fn from_result(result: &ScoreResult, article_count: usize) -> Self {
        Self {
            score: result.score,
            reasoning: result.reasoning.clone(),
            analyzed_at: Utc::now(),
            article_count,
        }
    }
}

/// A claim under investigation. The title is the claim text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agenda {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub share_token: Option<String>,
    pub analysis: Option<AnalysisSummary>,
}

/// An article attached to an agenda as evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub agenda_id: i64,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    /// Preview image URL.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Article {
    /// The fields the engine scores on.
    pub fn record(&self) -> ArticleRecord {
        ArticleRecord {
            title: self.title.clone(),
            url: self.url.clone(),
            description: self.description.clone(),
        }
    }
}

/// Input for [`AgendaStore::add_article`](super::AgendaStore::add_article).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewArticle {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
