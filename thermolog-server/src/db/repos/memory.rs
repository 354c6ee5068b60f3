//! In-process reading store for testing and local demos

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{DbError, ReadingStore};
use crate::models::{NewReading, Page, TemperatureReading};

#[derive(Default)]
struct Inner {
    rows: Vec<TemperatureReading>,
    last_id: i32,
    unavailable: bool,
}

/// Reading store backed by a vector
///
/// Ids increase strictly with insertion order. Every call, successful or
/// not, is counted so tests can assert that a path never touched the store.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent operations fail with `DbError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    /// Number of store operations attempted so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of rows held.
    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self) -> Result<MutexGuard<'_, Inner>, DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let inner = self.lock();
        if inner.unavailable {
            return Err(DbError::Unavailable("memory store marked unavailable".into()));
        }
        Ok(inner)
    }
}

#[async_trait]
impl ReadingStore for MemoryStore {
    async fn insert(&self, reading: NewReading) -> Result<TemperatureReading, DbError> {
        let mut inner = self.begin()?;
        inner.last_id += 1;
        let row = TemperatureReading {
            id: inner.last_id,
            temp_co: reading.temp_co,
            temp_room: reading.temp_room,
            timestamp: Some(reading.timestamp),
        };
        inner.rows.push(row.clone());
        Ok(row)
    }

    async fn query_page(&self, page: Page) -> Result<Vec<TemperatureReading>, DbError> {
        let inner = self.begin()?;
        let mut rows = inner.rows.clone();
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(0);
        Ok(rows.into_iter().skip(offset).take(limit).collect())
    }
}
