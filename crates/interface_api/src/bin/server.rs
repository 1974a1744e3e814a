//! Mortgage Core - API Server Binary
//!
//! This binary starts the HTTP API server for customer management and
//! mortgage simulation.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin mortgage-api
//!
//! # Run with environment variables
//! API_PORT=9000 API_DATABASE_URL=sqlite://data/mortgage.db cargo run --bin mortgage-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_DATABASE_URL` - SQLite connection URL (default: sqlite://mortgage.db)
//! * `API_MAX_CONNECTIONS` - Pool size (default: 5)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `RUST_LOG` - Overrides the log filter when set

use anyhow::Context;
use infra_db::{create_pool, run_migrations, DatabaseConfig};
use interface_api::{app_state_from_pool, config::ApiConfig, create_router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, opens the database, applies
/// migrations and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config()?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        database_url = %config.database_url,
        "Starting Mortgage Core API Server"
    );

    let db_config = DatabaseConfig::new(config.database_url.clone())
        .max_connections(config.max_connections);
    let pool = create_pool(db_config)
        .await
        .context("failed to open database")?;

    run_migrations(&pool)
        .await
        .context("failed to apply database migrations")?;
    tracing::info!("Database ready");

    let app = create_router(app_state_from_pool(pool));

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads and validates the API configuration.
///
/// Falls back to defaults when the environment cannot be read.
fn load_config() -> anyhow::Result<ApiConfig> {
    let config = ApiConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Could not read API_* environment ({}), using defaults", e);
        ApiConfig::default()
    });
    config.validate()?;
    Ok(config)
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// In-flight requests complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
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
