//! Schema bootstrap for the readings table
//!
//! Idempotent; invoked once at startup and never re-checked per request.

use sqlx::PgPool;

use super::DbError;

/// Create the readings table and its ordering index if absent.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::debug!("Applying migrations");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS readings (
            id SERIAL PRIMARY KEY,
            temp_co DOUBLE PRECISION,
            temp_room DOUBLE PRECISION,
            timestamp BIGINT,
            created_at TIMESTAMP DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_readings_timestamp ON readings (timestamp DESC)")
        .execute(pool)
        .await?;

    tracing::debug!("Migrations applied successfully");
    Ok(())
}
