//! HTTP server command
//!
//! Resolves settings, prepares the database and serves until shutdown.

use std::sync::Arc;

use anyhow::{Context, Result};
use thermolog_server::{connect_store, run_server, AppState};

use crate::config::ServeArgs;

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let settings = args
        .apply_env(&|key: &str| std::env::var(key).ok())
        .into_settings()?;

    tracing::debug!(db = ?settings.db, "resolved database settings");

    let store = connect_store(&settings.db)
        .await
        .context("Failed to prepare database")?;

    let state = AppState::new(Arc::new(store), settings.secret, settings.index_path);

    // Blocks until shutdown
    run_server(state, settings.server)
        .await
        .context("Server error")?;

    Ok(())
}
