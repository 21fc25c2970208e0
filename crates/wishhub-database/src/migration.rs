//! Database migration runner.

use sqlx::PgPool;
use tracing::info;

use wishhub_core::error::AppError;

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::internal_with("Failed to run migrations", e))?;

    info!("Database migrations completed successfully");
    Ok(())
}
