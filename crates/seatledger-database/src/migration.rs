//! Database migration runner.

use sqlx::PgPool;
use tracing::info;

use seatledger_core::error::{AppError, ErrorKind};

/// Run all pending database migrations.
///
/// Creates the member ledger table and the twelve monthly partition
/// tables up front, so the partition registry never has to create a
/// collection lazily.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::StoreUnavailable,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}
