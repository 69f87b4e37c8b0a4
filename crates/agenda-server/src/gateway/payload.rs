use serde::{Deserialize, Serialize};

use agenda::evidence::ArticleRecord;
use agenda::store::{Agenda, Article};

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub claim: String,
    #[serde(default)]
    pub articles: Vec<ArticleRecord>,
}

/// Body of `POST /agendas`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAgendaRequest {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareResponse {
    pub share_token: String,
}

/// Read-only view served under a share token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedAgendaResponse {
    pub agenda: Agenda,
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
    pub version: &'static str,
}
