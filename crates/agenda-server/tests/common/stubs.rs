//! Stand-ins for the outside world: a news site and a chat-completion service.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tokio::sync::Mutex;

use super::harness::{ServerStartupError, TestServer, serve_router};

pub const ARTICLE_HTML: &str = r#"<html>
<head><title>Budget</title><style>p { color: red; }</style></head>
<body>
<nav>Home | World | Business</nav>
<article><h1>Council approves budget</h1><p>The city council voted 7-2 on Tuesday to approve the budget.</p></article>
<footer>Copyright</footer>
</body>
</html>"#;

/// Article pages:
/// `/article` (readable), `/slow` (never answers in time), `/gone` (404),
/// `/broken` (500), `/blank` (scripts only).
pub async fn spawn_page_host() -> Result<TestServer, ServerStartupError> {
    let app = Router::new()
        .route("/article", get(|| async { Html(ARTICLE_HTML) }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Html("<p>too late</p>")
            }),
        )
        .route("/gone", get(|| async { StatusCode::NOT_FOUND }))
        .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route(
            "/blank",
            get(|| async { Html("<html><body><script>var x = 1;</script></body></html>") }),
        );

    serve_router(app).await
}

#[derive(Debug, Clone)]
pub enum UpstreamReply {
    /// 200 with this message content.
    Content(String),
    /// 200 with only `choices[0].message`, as some compatible servers send.
    MinimalContent(String),
    /// Bare status, no completion body.
    Status(u16),
}

/// A captured upstream call.
#[derive(Debug, Clone)]
pub struct UpstreamCall {
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct UpstreamState {
    reply: UpstreamReply,
    calls: Arc<Mutex<Vec<UpstreamCall>>>,
}

pub struct StubUpstream {
    pub server: TestServer,
    calls: Arc<Mutex<Vec<UpstreamCall>>>,
}

impl StubUpstream {
    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.server.url())
    }

    pub async fn calls(&self) -> Vec<UpstreamCall> {
        self.calls.lock().await.clone()
    }
}

/// OpenAI-compatible `/v1/chat/completions` that always gives `reply`.
pub async fn spawn_upstream(reply: UpstreamReply) -> Result<StubUpstream, ServerStartupError> {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let state = UpstreamState {
        reply,
        calls: calls.clone(),
    };

    let app = Router::new()
        .route("/v1/chat/completions", post(completions))
        .with_state(state);

    Ok(StubUpstream {
        server: serve_router(app).await?,
        calls,
    })
}

async fn completions(
    State(state): State<UpstreamState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let model = body["model"].as_str().unwrap_or("unknown").to_string();

    state
        .calls
        .lock()
        .await
        .push(UpstreamCall { authorization, body });

    match &state.reply {
        UpstreamReply::Status(code) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        UpstreamReply::Content(content) => Json(serde_json::json!({
            "id": format!("chatcmpl-{}", uuid::Uuid::new_v4()),
            "object": "chat.completion",
            "created": chrono::Utc::now().timestamp() as u32,
            "model": model,
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }],
            "usage": {
                "prompt_tokens": 10,
                "completion_tokens": 10,
                "total_tokens": 20
            }
        }))
        .into_response(),
        UpstreamReply::MinimalContent(content) => Json(serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        }))
        .into_response(),
    }
}
