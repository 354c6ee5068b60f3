//! Application state shared across handlers

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::db::ReadingStore;
use crate::models::SecretKey;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn ReadingStore>,
    secret: SecretKey,
    index_path: PathBuf,
}

impl AppState {
    pub fn new(store: Arc<dyn ReadingStore>, secret: SecretKey, index_path: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                secret,
                index_path: index_path.into(),
            }),
        }
    }

    pub fn store(&self) -> &dyn ReadingStore {
        self.inner.store.as_ref()
    }

    pub fn secret(&self) -> &SecretKey {
        &self.inner.secret
    }

    /// HTML document served at `/`
    pub fn index_path(&self) -> &Path {
        &self.inner.index_path
    }
}
