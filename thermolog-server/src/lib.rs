//! thermolog-server: ingestion and retrieval of temperature telemetry
//!
//! Devices POST readings to `/data` with a shared secret; the front end
//! pages through them with GET. Readings live in a single PostgreSQL table.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{DbConfig, DbError, MemoryStore, ReadingRepo, ReadingStore};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;

/// Connect to PostgreSQL, verify the connection and bootstrap the schema.
///
/// Returns a store ready to hand to `AppState`.
pub async fn connect_store(config: &DbConfig) -> Result<ReadingRepo, DbError> {
    let pool = db::create_pool(config).await?;
    db::ping(&pool).await?;
    db::migrations::run(&pool).await?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        "database ready"
    );
    Ok(ReadingRepo::new(pool))
}
