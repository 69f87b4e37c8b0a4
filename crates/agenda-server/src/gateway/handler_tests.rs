//! Router-level tests for the gateway handlers, driven through
//! `tower::ServiceExt::oneshot` with mocked page fetching and analysis.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::IntoResponse,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use agenda::analyzer::{Analyzer, MockAnalyzer};
use agenda::engine::EvidenceEngine;
use agenda::evidence::{CollectorConfig, EvidenceCollector, MockPageFetcher};
use agenda::store::{AgendaStore, InMemoryAgendaStore, NewArticle};

use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;
use crate::gateway::{AGENDA_STATUS_HEADER, cors_layer, create_router_with_state};

fn test_state(
    analyzer: Option<Arc<dyn Analyzer>>,
) -> (HandlerState<MockPageFetcher>, Arc<InMemoryAgendaStore>) {
    let fetcher = MockPageFetcher::new().with_html(
        "https://news.example/a",
        "<html><body><p>Inflation eased to 2% last month.</p></body></html>",
    );
    let engine = EvidenceEngine::new(
        EvidenceCollector::new(fetcher, CollectorConfig::default()),
        analyzer,
    );
    let store = Arc::new(InMemoryAgendaStore::new());
    let state = HandlerState::new(Arc::new(engine), store.clone());
    (state, store)
}

fn test_router() -> (Router, Arc<InMemoryAgendaStore>) {
    let (state, store) = test_state(None);
    (create_router_with_state(state), store)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn status_header(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(AGENDA_STATUS_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_healthz() {
        let (app, _) = test_router();
        let response = app.oneshot(empty_request("GET", "/healthz")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(status_header(&response), "ok");
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_root_banner() {
        let (app, _) = test_router();
        let response = app.oneshot(empty_request("GET", "/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["message"].as_str().unwrap().contains("Agenda"));
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_ready_reports_analyzer_mode() {
        let (app, _) = test_router();
        let response = app.oneshot(empty_request("GET", "/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["components"]["analyzer_mode"], "heuristic");
        assert_eq!(body["components"]["store"], "ready");

        let analyzer: Arc<dyn Analyzer> = Arc::new(MockAnalyzer::replying("{}"));
        let (state, _) = test_state(Some(analyzer));
        let response = create_router_with_state(state)
            .oneshot(empty_request("GET", "/ready"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["components"]["analyzer_mode"], "external");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (app, _) = test_router();
        let response = app.oneshot(empty_request("GET", "/nope")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(status_header(&response), "not_found");
        assert_eq!(body_json(response).await["code"], 404);
    }
}

mod analyze_tests {
    use super::*;

    #[tokio::test]
    async fn test_stateless_analyze_with_heuristic() {
        let (app, _) = test_router();
        let body = serde_json::json!({
            "claim": "Inflation is easing",
            "articles": [
                {"title": "Official data shows easing", "url": "https://news.example/a", "description": "Statistics office report"},
                {"title": "Markets react", "url": "https://other.example/b"}
            ]
        });

        let response = app.oneshot(json_request("POST", "/analyze", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(status_header(&response), "heuristic");
        let result = body_json(response).await;
        // 2*10 + 2*15 + 1*10
        assert_eq!(result["score"], "Medium");
        assert_eq!(result["claim"], "Inflation is easing");
        assert!(!result["reasoning"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_without_articles_is_low() {
        let (app, _) = test_router();
        let response = app
            .oneshot(json_request(
                "POST",
                "/analyze",
                serde_json::json!({"claim": "Nothing to see"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["score"], "Low");
    }

    #[tokio::test]
    async fn test_analyze_uses_external_verdict() {
        let analyzer: Arc<dyn Analyzer> = Arc::new(MockAnalyzer::replying(
            "```json\n{\"score\": \"High\", \"reasoning\": \"Official figures.\"}\n```",
        ));
        let (state, _) = test_state(Some(analyzer));
        let body = serde_json::json!({
            "claim": "Inflation is easing",
            "articles": [{"title": "t", "url": "https://news.example/a"}]
        });

        let response = create_router_with_state(state)
            .oneshot(json_request("POST", "/analyze", body))
            .await
            .unwrap();

        assert_eq!(status_header(&response), "external");
        let result = body_json(response).await;
        assert_eq!(result["score"], "High");
        assert_eq!(result["reasoning"], "Official figures.");
    }

    #[tokio::test]
    async fn test_blank_claim_rejected() {
        let (app, _) = test_router();
        let response = app
            .oneshot(json_request(
                "POST",
                "/analyze",
                serde_json::json!({"claim": "  ", "articles": []}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(status_header(&response), "invalid_request");
    }

    #[tokio::test]
    async fn test_schema_error_rejected() {
        let (app, _) = test_router();
        let response = app
            .oneshot(json_request(
                "POST",
                "/analyze",
                serde_json::json!({"articles": "not a list"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("Invalid request schema"));
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_agenda_analysis_is_recorded() {
        let (app, store) = test_router();
        let agenda = store.create_agenda("Inflation is easing").await.unwrap();
        store
            .add_article(
                agenda.id,
                NewArticle::new("Official report", "https://news.example/a"),
            )
            .await
            .unwrap();

        let response = app
            .oneshot(empty_request(
                "POST",
                &format!("/agendas/{}/analyze", agenda.id),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(status_header(&response), "heuristic");
        let result = body_json(response).await;
        assert_eq!(result["claim"], "Inflation is easing");

        let summary = store.get_agenda(agenda.id).await.unwrap().analysis.unwrap();
        assert_eq!(summary.article_count, 1);
        assert_eq!(summary.score.as_str(), result["score"]);
    }

    #[tokio::test]
    async fn test_agenda_analysis_missing_agenda() {
        let (app, _) = test_router();
        let response = app
            .oneshot(empty_request("POST", "/agendas/99/analyze"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

mod agenda_route_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_agenda() {
        let (app, store) = test_router();
        let response = app
            .oneshot(json_request(
                "POST",
                "/agendas",
                serde_json::json!({"title": "Rates will fall"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(status_header(&response), "ok");
        let body = body_json(response).await;
        assert_eq!(body["title"], "Rates will fall");
        assert!(body["share_token"].is_null());
        assert_eq!(store.list_agendas().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_blank_agenda_rejected() {
        let (app, _) = test_router();
        let response = app
            .oneshot(json_request(
                "POST",
                "/agendas",
                serde_json::json!({"title": ""}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_agenda_then_404() {
        let (app, store) = test_router();
        let agenda = store.create_agenda("claim").await.unwrap();
        let uri = format!("/agendas/{}", agenda.id);

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(status_header(&response), "ok");

        let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(status_header(&response), "not_found");
    }

    #[tokio::test]
    async fn test_add_and_list_articles() {
        let (app, store) = test_router();
        let agenda = store.create_agenda("claim").await.unwrap();
        let uri = format!("/agendas/{}/articles", agenda.id);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &uri,
                serde_json::json!({
                    "title": "Story",
                    "url": "https://news.example/a",
                    "description": "Summary",
                    "image": "https://img.example/a.png"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["agenda_id"], agenda.id);

        let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
        let listed = body_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["image"], "https://img.example/a.png");
    }

    #[tokio::test]
    async fn test_delete_missing_article() {
        let (app, _) = test_router();
        let response = app
            .oneshot(empty_request("DELETE", "/articles/5"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(
            body_json(response).await["error"]
                .as_str()
                .unwrap()
                .contains("article 5")
        );
    }

    #[tokio::test]
    async fn test_share_and_fetch_shared() {
        let (app, store) = test_router();
        let agenda = store.create_agenda("claim").await.unwrap();
        store
            .add_article(agenda.id, NewArticle::new("Story", "https://news.example/a"))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(empty_request("POST", &format!("/agendas/{}/share", agenda.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let token = body_json(response).await["share_token"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .oneshot(empty_request("GET", &format!("/shared/{token}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let shared = body_json(response).await;
        assert_eq!(shared["agenda"]["id"], agenda.id);
        assert_eq!(shared["agenda"]["share_token"], token.as_str());
        assert_eq!(shared["articles"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_share_token() {
        let (app, _) = test_router();
        let response = app
            .oneshot(empty_request("GET", "/shared/does-not-exist"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

mod error_tests {
    use super::*;
    use agenda::store::StoreError;

    #[tokio::test]
    async fn test_gateway_error_statuses() {
        let cases = [
            (GatewayError::InvalidRequest("x".into()), 400, "invalid_request"),
            (GatewayError::NotFound("x".into()), 404, "not_found"),
        ];

        for (err, code, header) in cases {
            let response = err.into_response();
            assert_eq!(response.status().as_u16(), code);
            assert_eq!(status_header(&response), header);
            assert_eq!(body_json(response).await["code"], code);
        }
    }

    #[test]
    fn test_store_error_mapping() {
        assert!(matches!(
            GatewayError::from(StoreError::AgendaNotFound(1)),
            GatewayError::NotFound(_)
        ));
        assert!(matches!(
            GatewayError::from(StoreError::ShareTokenNotFound),
            GatewayError::NotFound(_)
        ));
        assert!(matches!(
            GatewayError::from(StoreError::InvalidInput("blank".into())),
            GatewayError::InvalidRequest(ref m) if m == "blank"
        ));
    }

    #[tokio::test]
    async fn test_store_errors_are_client_errors() {
        let errors = [
            StoreError::AgendaNotFound(7),
            StoreError::ArticleNotFound(3),
            StoreError::ShareTokenNotFound,
            StoreError::InvalidInput("blank".into()),
        ];

        for err in errors {
            let response = GatewayError::from(err).into_response();
            assert!(response.status().is_client_error());
            assert!(!status_header(&response).is_empty());
        }
    }
}

mod cors_tests {
    use super::*;

    #[tokio::test]
    async fn test_allowed_origin_is_echoed() {
        let (app, _) = test_router();
        let app = app.layer(cors_layer(&["http://localhost:5173".to_string()]));

        let request = Request::builder()
            .method("GET")
            .uri("/healthz")
            .header("origin", "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:5173")
        );
    }

    #[tokio::test]
    async fn test_other_origin_not_allowed() {
        let (app, _) = test_router();
        let app = app.layer(cors_layer(&["http://localhost:5173".to_string()]));

        let request = Request::builder()
            .method("GET")
            .uri("/healthz")
            .header("origin", "http://evil.example")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert!(response.headers().get("access-control-allow-origin").is_none());
    }
}
