use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use agenda::engine::Analysis;
use agenda::evidence::{ArticleRecord, PageFetcher};
use agenda::store::{AnalysisSummary, Article};

use crate::gateway::error::GatewayError;
use crate::gateway::make_response;
use crate::gateway::payload::AnalyzeRequest;
use crate::gateway::state::HandlerState;

/// Deserializes a request body, reporting schema errors as `400`.
pub fn parse_body<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, GatewayError> {
    serde_json::from_value(body)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))
}

/// `ScoreResult` body with the analysis source in the status header.
pub fn analysis_response(analysis: Analysis) -> Response {
    make_response(StatusCode::OK, analysis.source.as_str(), analysis.result)
}

/// Stateless analysis of a claim against caller-supplied articles.
#[instrument(skip(state, body), fields(articles = tracing::field::Empty))]
pub async fn analyze_handler<F>(
    State(state): State<HandlerState<F>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, GatewayError>
where
    F: PageFetcher + 'static,
{
    let request: AnalyzeRequest = parse_body(body)?;
    tracing::Span::current().record("articles", request.articles.len());

    let claim = request.claim.trim();
    if claim.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "claim must not be blank".to_string(),
        ));
    }

    let analysis = state.engine.analyze(claim, &request.articles).await;
    debug!(source = %analysis.source, score = %analysis.result.score, "Analysis complete");

    Ok(analysis_response(analysis))
}

/// Analyzes an agenda's title against its stored articles and records the
/// summary on the agenda.
#[instrument(skip(state))]
pub async fn analyze_agenda_handler<F>(
    State(state): State<HandlerState<F>>,
    Path(agenda_id): Path<i64>,
) -> Result<Response, GatewayError>
where
    F: PageFetcher + 'static,
{
    let agenda = state.store.get_agenda(agenda_id).await?;
    let records: Vec<ArticleRecord> = state
        .store
        .list_articles(agenda_id)
        .await?
        .iter()
        .map(Article::record)
        .collect();

    let analysis = state.engine.analyze(&agenda.title, &records).await;

    state
        .store
        .record_analysis(
            agenda_id,
            AnalysisSummary::from_result(&analysis.result, records.len()),
        )
        .await?;

    info!(
        agenda_id,
        source = %analysis.source,
        score = %analysis.result.score,
        articles = records.len(),
        "Agenda analyzed"
    );

    Ok(analysis_response(analysis))
}
