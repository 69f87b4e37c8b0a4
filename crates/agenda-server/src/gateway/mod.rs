//! HTTP gateway (Axum) for agendas, articles and claim analysis.
//!
//! This module is primarily used by the `agenda` server binary.

#![allow(missing_docs)]

pub mod agendas;
pub mod error;
pub mod handler;
pub mod payload;
pub mod state;

#[cfg(test)]
mod handler_tests;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use agendas::{
    add_article_handler, create_agenda_handler, delete_agenda_handler, delete_article_handler,
    get_agenda_handler, list_agendas_handler, list_articles_handler, share_agenda_handler,
    shared_agenda_handler,
};
pub use error::GatewayError;
pub use handler::{analyze_agenda_handler, analyze_handler};
pub use state::HandlerState;

use agenda::evidence::PageFetcher;

/// Response header carrying the outcome of every request.
pub const AGENDA_STATUS_HEADER: &str = "x-agenda-status";
pub const AGENDA_STATUS_OK: &str = "ok";
pub const AGENDA_STATUS_READY: &str = "ready";

pub fn create_router_with_state<F>(state: HandlerState<F>) -> Router
where
    F: PageFetcher + 'static,
{
    Router::new()
        .route("/", get(root_handler))
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/analyze", post(analyze_handler))
        .route(
            "/agendas",
            post(create_agenda_handler).get(list_agendas_handler),
        )
        .route(
            "/agendas/{id}",
            get(get_agenda_handler).delete(delete_agenda_handler),
        )
        .route(
            "/agendas/{id}/articles",
            post(add_article_handler).get(list_articles_handler),
        )
        .route("/agendas/{id}/analyze", post(analyze_agenda_handler))
        .route("/agendas/{id}/share", post(share_agenda_handler))
        .route("/articles/{id}", delete(delete_article_handler))
        .route("/shared/{token}", get(shared_agenda_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the browser frontend. Origins that are not valid header values are
/// skipped with a warning.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// JSON response with the status header set.
pub fn make_response<T: serde::Serialize>(
    status: StatusCode,
    agenda_status: &'static str,
    body: T,
) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(AGENDA_STATUS_HEADER, HeaderValue::from_static(agenda_status));

    (status, headers, Json(body)).into_response()
}

/// Empty `204` with the status header set.
pub fn no_content() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(AGENDA_STATUS_HEADER, HeaderValue::from_static(AGENDA_STATUS_OK));

    (StatusCode::NO_CONTENT, headers).into_response()
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub store: &'static str,
    pub analyzer_mode: &'static str,
}

#[tracing::instrument]
pub async fn root_handler() -> Response {
    make_response(
        StatusCode::OK,
        AGENDA_STATUS_OK,
        payload::BannerResponse {
            message: "Agenda evidence API",
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    make_response(
        StatusCode::OK,
        AGENDA_STATUS_OK,
        HealthResponse { status: "ok" },
    )
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<F>(State(state): State<HandlerState<F>>) -> Response
where
    F: PageFetcher + 'static,
{
    let store_ready = state.store.list_agendas().await.is_ok();

    let components = ComponentStatus {
        http: AGENDA_STATUS_READY,
        store: if store_ready { AGENDA_STATUS_READY } else { "error" },
        analyzer_mode: state.analyzer_mode(),
    };

    let (status_code, status_msg) = if store_ready {
        (StatusCode::OK, AGENDA_STATUS_OK)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "pending")
    };

    make_response(
        status_code,
        status_msg,
        ReadyResponse {
            status: status_msg,
            components,
        },
    )
}

pub async fn fallback_handler() -> GatewayError {
    GatewayError::NotFound("no such route".to_string())
}
