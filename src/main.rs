//! Gullery - Caves of Qud build code decoder for Discord
//!
//! A bot that watches chat for character build codes and replies with
//! a readable character sheet.

mod codes;
mod common;
mod config;
mod discord;

use anyhow::Result;
use tokio::signal;
use tracing::{error, info};

use codes::{CodeScanner, GameDataCatalog};
use config::{env::get_config_path, load_and_validate};
use discord::{build_client, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Gullery v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = get_config_path();
    info!("Loading configuration from {}...", config_path);

    let config = load_and_validate(&config_path).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        error!("Please ensure {} exists and is properly formatted.", config_path);
        error!("See config.example.conf for reference.");
        e
    })?;

    // Load game data tables
    let gamedata_path = config.gamedata_path();
    info!("Loading game data from {}...", gamedata_path);

    let catalog = GameDataCatalog::load(gamedata_path).map_err(|e| {
        error!("Failed to load game data: {}", e);
        e
    })?;
    info!(
        "Game data loaded: {} classes, {} mod tokens",
        catalog.class_count(),
        catalog.mod_count()
    );

    let scanner = CodeScanner::new()?;
    let state = AppState::new(&config, catalog, scanner);

    info!("Starting Discord bot...");
    let mut client = build_client(&config.discord.token, state).await?;
    let shard_manager = client.shard_manager.clone();

    tokio::select! {
        result = client.start() => {
            if let Err(e) = result {
                error!("Discord client error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received - closing gateway...");
            shard_manager.shutdown_all().await;
        }
    }

    info!("Exiting...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
