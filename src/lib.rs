pub mod cli;
pub mod commands;
pub mod database;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

/// Parse arguments, open storage, run one command and print its JSON payload.
pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = cli::Cli::parse();
    let config = services::config::AppConfig::from_env();

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(async move {
        let pool = database::storage_repo::connect(&config.database_url)
            .await
            .with_context(|| format!("Failed to open database {}", config.database_url))?;
        log::info!("Database ready at {}", config.database_url);

        let identity = args.identity(&config);
        let auth = services::identity::AuthState::resolve(&identity).await;
        let user = auth.require_user()?.clone();

        let store = Arc::new(database::SqliteStore::new(pool));
        let state = commands::AppState::new(store, config);
        log::debug!("Resolving icons under {}", state.assets.root().display());

        let payload = cli::dispatch(&state, user, args.command).await?;
        println!("{}", serde_json::to_string_pretty(&payload)?);
        Ok(())
    })
}
