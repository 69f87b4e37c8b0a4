//! Test server harness.

use agenda::config::Config;
use agenda::engine::EvidenceEngine;
use agenda::store::InMemoryAgendaStore;
use agenda_server::gateway::{HandlerState, cors_layer, create_router_with_state};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    /// Chat-completion endpoint; `None` runs heuristic-only.
    pub analyzer_url: Option<String>,
    pub fetch_timeout: Duration,
    pub analyzer_timeout: Duration,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            analyzer_url: None,
            fetch_timeout: Duration::from_secs(1),
            analyzer_timeout: Duration::from_secs(2),
        }
    }
}

impl TestServerConfig {
    pub fn with_analyzer(mut self, url: impl Into<String>) -> Self {
        self.analyzer_url = Some(url.into());
        self
    }

    fn to_config(&self) -> Config {
        let mut config = Config {
            fetch_timeout: self.fetch_timeout,
            analyzer_timeout: self.analyzer_timeout,
            ..Config::default()
        };
        if let Some(url) = &self.analyzer_url {
            config.analyzer_api_key = Some(TEST_API_KEY.to_string());
            config.analyzer_url = url.clone();
        }
        config
    }
}

pub const TEST_API_KEY: &str = "sk-test-harness";

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Serves `app` on an ephemeral localhost port.
pub async fn serve_router(app: Router) -> Result<TestServer, ServerStartupError> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let local_addr = listener.local_addr()?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}

/// Spawns the gateway exactly as the binary wires it: real HTTP page fetcher,
/// real analyzer client (pointed at `config.analyzer_url` when set) and an
/// empty in-memory store.
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let config = config.to_config();
    config
        .validate()
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;

    let engine = EvidenceEngine::from_config(&config)
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;
    let store = Arc::new(InMemoryAgendaStore::new());

    let app = create_router_with_state(HandlerState::new(Arc::new(engine), store))
        .layer(cors_layer(&config.allowed_origins));

    serve_router(app).await
}
