//! Voter API Server Binary
//!
//! This binary starts the HTTP API server for the voter service.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin voter-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=3000 REDIS_URL=redis://cache:6379 cargo run --bin voter-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 3000)
//! * `REDIS_URL` / `API_REDIS_URL` - Redis connection URL (default: redis://0.0.0.0:6379)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infra_redis::{RedisConfig, RedisStore, VoterRepository, DEFAULT_REDIS_URL};
use interface_api::{config::ApiConfig, create_router, AppState};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, establishes the Redis
/// connection, and starts the HTTP server. The Redis connection is
/// verified up front so a misconfigured store fails the process at
/// startup instead of surfacing on the first request.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The Redis server cannot be reached
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Voter API Server"
    );

    let store = connect_store(&config.redis_url).await?;
    let repository = Arc::new(VoterRepository::new(store));

    let app = create_router(AppState::from_repository(repository));

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to individual environment variables or defaults when the
/// prefixed form is incomplete. `REDIS_URL` without a prefix is honored
/// for parity with common Redis tooling.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| ApiConfig {
        host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000),
        redis_url: std::env::var("REDIS_URL")
            .or_else(|_| std::env::var("API_REDIS_URL"))
            .unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string()),
        log_level: std::env::var("API_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Connects to Redis and verifies the connection with a ping.
///
/// # Errors
///
/// Returns error if the Redis server cannot be reached
async fn connect_store(redis_url: &str) -> anyhow::Result<RedisStore> {
    tracing::info!(url = %redis_url, "Connecting to Redis...");

    let config = RedisConfig::new(redis_url);
    let store = RedisStore::connect(&config).await?;

    tracing::info!("Redis connection established");
    Ok(store)
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
