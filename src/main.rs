//! Wishhub Server — gift wishlist service with surprise protection.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use wishhub_core::config::AppConfig;
use wishhub_core::error::AppError;
use wishhub_core::traits::NotificationDispatcher;
use wishhub_service::notify::MailRelayDispatcher;

#[tokio::main]
async fn main() {
    let env = std::env::var("WISHHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Wishhub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = wishhub_database::DatabasePool::connect(&config.database).await?;
    wishhub_database::migration::run_migrations(db.pool()).await?;

    // ── Step 2: Notification dispatcher ──────────────────────────
    let dispatcher: Arc<dyn NotificationDispatcher> =
        Arc::new(MailRelayDispatcher::new(config.mail.clone()));
    tracing::info!(enabled = config.mail.enabled, "Mail dispatcher initialized");

    // ── Step 3: Wire state and router ────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = wishhub_api::AppState::build(config, db.into_pool(), dispatcher);
    let app = wishhub_api::build_router(state);

    // ── Step 4: Serve with graceful shutdown ─────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Wishhub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Wishhub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
