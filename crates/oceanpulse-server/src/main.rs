//! `OceanPulse` server entry point.
//!
//! Wires configuration, the `PostgreSQL` pool, and the hazard API server
//! together, then serves until the process is told to stop.
//!
//! # Startup Sequence
//!
//! 1. Load `.env` for local development
//! 2. Initialize structured logging (tracing)
//! 3. Load configuration from environment variables
//! 4. Connect the `PostgreSQL` pool
//! 5. Serve the hazard API until `SIGINT`/`SIGTERM`
//! 6. Close the pool

mod config;

use std::sync::Arc;

use oceanpulse_api::{start_server, AppState, ServerConfig};
use oceanpulse_db::PostgresPool;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;

/// Application entry point.
///
/// Initializes logging, loads configuration, connects to `PostgreSQL`,
/// and runs the HTTP server until a shutdown signal arrives. The pool is
/// closed before the process exits, on both the clean and the error path.
///
/// # Errors
///
/// Returns an error if configuration loading, the database connection,
/// or the HTTP server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load .env for local development (absent in production).
    dotenvy::dotenv().ok();

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("oceanpulse-server starting");

    // 3. Load configuration from environment variables.
    let config = ServiceConfig::from_env()?;
    info!(host = config.host, port = config.port, "Configuration loaded");

    // 4. Connect the PostgreSQL pool.
    let db = PostgresPool::connect_url(&config.database_url).await?;

    // 5. Serve until a shutdown signal arrives.
    let server_config = ServerConfig {
        host: config.host,
        port: config.port,
    };
    let state = Arc::new(AppState::new(db.pool().clone()));
    let serve_result = start_server(&server_config, state).await;

    // 6. Close the pool on both exit paths before surfacing the result.
    db.close().await;
    serve_result?;

    info!("oceanpulse-server shutdown complete");
    Ok(())
}
