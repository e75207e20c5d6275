//! Drumline - Main Entry Point
//!
//! Composition root: wires the queue engine to the HTTP boundary and owns
//! process lifecycle (logging, configuration, signals, shutdown).

mod telemetry;

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use drumline_api_http::{shutdown_channel, HttpServer, HttpServerConfig};
use drumline_core::application::PatternQueueService;
use drumline_core::port::id_provider::UuidProvider;
use drumline_core::port::time_provider::SystemTimeProvider;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_QUEUE_CAPACITY: usize = 16;
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging (JSON for production, pretty for development)
    let log_format = std::env::var("DRUMLINE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("Drumline v{} starting...", VERSION);

    // 1.1. Optional OpenTelemetry export
    if let Err(e) = telemetry::init_telemetry() {
        tracing::warn!(error = ?e, "Failed to initialize OpenTelemetry (continuing without it)");
    }

    // 2. Load configuration
    let capacity: usize = env_or("DRUMLINE_QUEUE_CAPACITY", DEFAULT_QUEUE_CAPACITY);
    anyhow::ensure!(capacity >= 1, "DRUMLINE_QUEUE_CAPACITY must be at least 1");

    let server_config = HttpServerConfig {
        host: std::env::var("DRUMLINE_HTTP_HOST")
            .unwrap_or_else(|_| HttpServerConfig::default().host),
        port: env_or("DRUMLINE_HTTP_PORT", HttpServerConfig::default().port),
        api_prefix: std::env::var("DRUMLINE_API_PREFIX").unwrap_or_default(),
        rate_limit_burst: env_or(
            "DRUMLINE_RATE_LIMIT_BURST",
            HttpServerConfig::default().rate_limit_burst,
        ),
        rate_limit_per_sec: env_or(
            "DRUMLINE_RATE_LIMIT_RATE",
            HttpServerConfig::default().rate_limit_per_sec,
        ),
    };

    // 3. Setup dependencies (DI wiring)
    let id_provider = Arc::new(UuidProvider);
    let time_provider = Arc::new(SystemTimeProvider);
    let queue = Arc::new(PatternQueueService::new(
        capacity,
        id_provider,
        time_provider,
    ));

    info!(capacity, "Queue initialized (empty, in-memory only)");

    // 4. Start HTTP server
    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let server = HttpServer::new(server_config, queue);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.start(shutdown_rx).await {
            tracing::error!(error = ?e, "HTTP server failed");
        }
    });

    info!("System ready. Press Ctrl+C to shutdown");

    // 5. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Draining...");

    // 6. Graceful shutdown, bounded
    shutdown_tx.shutdown();
    let _ = tokio::time::timeout(SHUTDOWN_GRACE, server_handle).await;

    info!("Shutdown complete.");

    Ok(())
}
