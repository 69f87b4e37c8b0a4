use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use tracing::instrument;

use agenda::evidence::PageFetcher;
use agenda::store::NewArticle;

use crate::gateway::error::GatewayError;
use crate::gateway::handler::parse_body;
use crate::gateway::payload::{CreateAgendaRequest, ShareResponse, SharedAgendaResponse};
use crate::gateway::state::HandlerState;
use crate::gateway::{AGENDA_STATUS_OK, make_response, no_content};

#[instrument(skip(state, body))]
pub async fn create_agenda_handler<F>(
    State(state): State<HandlerState<F>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, GatewayError>
where
    F: PageFetcher + 'static,
{
    let request: CreateAgendaRequest = parse_body(body)?;
    let agenda = state.store.create_agenda(&request.title).await?;
    Ok(make_response(StatusCode::CREATED, AGENDA_STATUS_OK, agenda))
}

#[instrument(skip(state))]
pub async fn list_agendas_handler<F>(
    State(state): State<HandlerState<F>>,
) -> Result<Response, GatewayError>
where
    F: PageFetcher + 'static,
{
    let agendas = state.store.list_agendas().await?;
    Ok(make_response(StatusCode::OK, AGENDA_STATUS_OK, agendas))
}

#[instrument(skip(state))]
pub async fn get_agenda_handler<F>(
    State(state): State<HandlerState<F>>,
    Path(agenda_id): Path<i64>,
) -> Result<Response, GatewayError>
where
    F: PageFetcher + 'static,
{
    let agenda = state.store.get_agenda(agenda_id).await?;
    Ok(make_response(StatusCode::OK, AGENDA_STATUS_OK, agenda))
}

/// Deletes the agenda together with its articles.
#[instrument(skip(state))]
pub async fn delete_agenda_handler<F>(
    State(state): State<HandlerState<F>>,
    Path(agenda_id): Path<i64>,
) -> Result<Response, GatewayError>
where
    F: PageFetcher + 'static,
{
    state.store.delete_agenda(agenda_id).await?;
    Ok(no_content())
}

#[instrument(skip(state, body))]
pub async fn add_article_handler<F>(
    State(state): State<HandlerState<F>>,
    Path(agenda_id): Path<i64>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, GatewayError>
where
    F: PageFetcher + 'static,
{
    let article: NewArticle = parse_body(body)?;
    let article = state.store.add_article(agenda_id, article).await?;
    Ok(make_response(StatusCode::CREATED, AGENDA_STATUS_OK, article))
}

#[instrument(skip(state))]
pub async fn list_articles_handler<F>(
    State(state): State<HandlerState<F>>,
    Path(agenda_id): Path<i64>,
) -> Result<Response, GatewayError>
where
    F: PageFetcher + 'static,
{
    let articles = state.store.list_articles(agenda_id).await?;
    Ok(make_response(StatusCode::OK, AGENDA_STATUS_OK, articles))
}

#[instrument(skip(state))]
pub async fn delete_article_handler<F>(
    State(state): State<HandlerState<F>>,
    Path(article_id): Path<i64>,
) -> Result<Response, GatewayError>
where
    F: PageFetcher + 'static,
{
    state.store.delete_article(article_id).await?;
    Ok(no_content())
}

/// Publishes the agenda, reusing its token if it already has one.
#[instrument(skip(state))]
pub async fn share_agenda_handler<F>(
    State(state): State<HandlerState<F>>,
    Path(agenda_id): Path<i64>,
) -> Result<Response, GatewayError>
where
    F: PageFetcher + 'static,
{
    let share_token = state.store.ensure_share_token(agenda_id).await?;
    Ok(make_response(
        StatusCode::OK,
        AGENDA_STATUS_OK,
        ShareResponse { share_token },
    ))
}

#[instrument(skip(state, token))]
pub async fn shared_agenda_handler<F>(
    State(state): State<HandlerState<F>>,
    Path(token): Path<String>,
) -> Result<Response, GatewayError>
where
    F: PageFetcher + 'static,
{
    let agenda = state.store.find_shared(&token).await?;
    let articles = state.store.list_articles(agenda.id).await?;
    Ok(make_response(
        StatusCode::OK,
        AGENDA_STATUS_OK,
        SharedAgendaResponse { agenda, articles },
    ))
}
