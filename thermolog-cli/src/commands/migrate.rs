//! Schema bootstrap without serving

use anyhow::{Context, Result};
use clap::Args;
use thermolog_server::connect_store;

use crate::config::DbArgs;

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Create the readings table if it does not exist
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = args
        .db
        .apply_env(&|key: &str| std::env::var(key).ok())
        .to_config();

    connect_store(&config)
        .await
        .context("Failed to apply migrations")?;

    tracing::info!("Migrations complete");
    Ok(())
}
