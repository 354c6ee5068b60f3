//! PostgreSQL reading repository
//!
//! Both operations are single statements, so an insert either lands whole
//! or not at all.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, ReadingStore};
use crate::models::{NewReading, Page, TemperatureReading};

/// Reading repository
#[derive(Clone)]
pub struct ReadingRepo {
    pool: PgPool,
}

impl ReadingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadingStore for ReadingRepo {
    async fn insert(&self, reading: NewReading) -> Result<TemperatureReading, DbError> {
        let row = sqlx::query_as::<_, TemperatureReading>(
            r#"
            INSERT INTO readings (temp_co, temp_room, timestamp)
            VALUES ($1, $2, $3)
            RETURNING id, temp_co, temp_room, timestamp
            "#,
        )
        .bind(reading.temp_co)
        .bind(reading.temp_room)
        .bind(reading.timestamp)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn query_page(&self, page: Page) -> Result<Vec<TemperatureReading>, DbError> {
        let rows = sqlx::query_as::<_, TemperatureReading>(
            r#"
            SELECT id, temp_co, temp_room, timestamp
            FROM readings
            ORDER BY timestamp DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
