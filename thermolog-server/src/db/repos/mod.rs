//! Reading store implementations
//!
//! `ReadingStore` is the seam handlers talk to. `ReadingRepo` is backed by
//! PostgreSQL; `MemoryStore` keeps rows in process for tests and demos.

pub mod memory;
pub mod readings;

use async_trait::async_trait;

use crate::models::{NewReading, Page, TemperatureReading};

pub use memory::MemoryStore;
pub use readings::ReadingRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence operations over the readings table (testable)
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Append one reading, returning the stored row with its assigned id.
    async fn insert(&self, reading: NewReading) -> Result<TemperatureReading, DbError>;

    /// Readings ordered by timestamp descending, windowed by `page`.
    ///
    /// Returns an empty vector when nothing matches.
    async fn query_page(&self, page: Page) -> Result<Vec<TemperatureReading>, DbError>;
}
