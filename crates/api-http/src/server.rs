// HTTP Server
//
// REST boundary for the pattern queue. The route set is an explicit
// method+path table; anything unrecognized falls through to the fixed
// not-found body. The whole table can be mounted under a configurable
// prefix (deployments that version their API mount it at "/1.0").

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use thiserror::Error;
use tracing::info;

use drumline_core::application::PatternQueueService;

use crate::handler;
use crate::limit::RateLimiter;
use crate::shutdown::ShutdownToken;

const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_RATE_LIMIT_BURST: u32 = 200;
const DEFAULT_RATE_LIMIT_RATE: u32 = 100;

/// HTTP Server Configuration
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    /// Mount prefix for the whole route table, e.g. "/1.0".
    /// Empty mounts the routes at the root.
    pub api_prefix: String,
    pub rate_limit_burst: u32,
    pub rate_limit_per_sec: u32,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            api_prefix: String::new(),
            rate_limit_burst: DEFAULT_RATE_LIMIT_BURST,
            rate_limit_per_sec: DEFAULT_RATE_LIMIT_RATE,
        }
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("http server failed: {0}")]
    Serve(std::io::Error),
}

/// Shared handler state.
pub struct AppState {
    pub queue: Arc<PatternQueueService>,
    pub limiter: RateLimiter,
}

/// HTTP Server
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, queue: Arc<PatternQueueService>) -> Self {
        let limiter = RateLimiter::new(config.rate_limit_burst, config.rate_limit_per_sec);
        Self {
            config,
            state: Arc::new(AppState { queue, limiter }),
        }
    }

    /// Serve until the shutdown token fires, then drain and return.
    pub async fn start(self, shutdown: ShutdownToken) -> Result<(), ServerError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;

        let prefix = normalize_prefix(&self.config.api_prefix);
        let mount = if prefix.is_empty() { "/" } else { prefix.as_str() };
        info!(
            host = %self.config.host,
            port = self.config.port,
            mount = %mount,
            capacity = self.state.queue.capacity(),
            "HTTP server listening"
        );

        let router = app(self.state, &prefix);
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown.wait())
            .await
            .map_err(ServerError::Serve)
    }
}

/// Build the application router over shared state.
///
/// One entry per supported method+path pair; the fallback answers
/// everything else, including the bare prefix itself.
pub fn app(state: Arc<AppState>, api_prefix: &str) -> Router {
    let table = Router::new()
        .route("/health", get(handler::health))
        .route(
            "/patterns",
            get(handler::list_patterns).post(handler::submit_pattern),
        )
        .route(
            "/patterns/head",
            get(handler::peek_head).delete(handler::pop_head),
        )
        .route(
            "/patterns/head/pattern",
            get(handler::peek_head_payload).delete(handler::pop_head_payload),
        )
        .with_state(state);

    let prefix = normalize_prefix(api_prefix);
    let router = if prefix.is_empty() {
        table
    } else {
        Router::new().nest(&prefix, table)
    };

    router.fallback(handler::not_found)
}

/// Force a usable mount point: leading slash, no trailing slash.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
