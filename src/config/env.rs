//! Environment variable overrides for configuration.
//!
//! Supports overriding config values with environment variables:
//! - `GULLERY_DISCORD_TOKEN` - Discord bot token
//! - `GULLERY_GAMEDATA_PATH` - game data tables file
//! - `GULLERY_CONFIG` - config file location

use std::env;

use crate::config::types::{Config, DataConfig};

/// Environment variable prefix for all config overrides.
const ENV_PREFIX: &str = "GULLERY";

/// Apply environment variable overrides to a config.
///
/// This allows the token to be provided via the environment instead
/// of the config file.
pub fn apply_env_overrides(mut config: Config) -> Config {
    if let Ok(token) = env::var(format!("{}_DISCORD_TOKEN", ENV_PREFIX)) {
        config.discord.token = token;
    }

    if let Ok(path) = env::var(format!("{}_GAMEDATA_PATH", ENV_PREFIX)) {
        config
            .data
            .get_or_insert_with(|| DataConfig { gamedata: None })
            .gamedata = Some(path);
    }

    config
}

/// Get the config file path from environment or use default.
///
/// Checks `GULLERY_CONFIG`, otherwise returns "gullery.conf".
pub fn get_config_path() -> String {
    env::var(format!("{}_CONFIG", ENV_PREFIX)).unwrap_or_else(|_| "gullery.conf".to_string())
}
