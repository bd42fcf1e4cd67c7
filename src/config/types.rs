//! Configuration type definitions.

use serde::Deserialize;

/// Default location of the game data tables, relative to the working
/// directory.
pub const DEFAULT_GAMEDATA_PATH: &str = "data/gamedata.json";

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub discord: DiscordConfig,
    pub decode: Option<DecodeConfig>,
    pub data: Option<DataConfig>,
}

/// Discord bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordConfig {
    pub token: String,
}

/// Where and for whom build codes get decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct DecodeConfig {
    /// Channel IDs to watch. When unset, every channel the bot can
    /// read is watched; direct messages are always answered.
    pub channels: Option<Vec<u64>>,
    /// User IDs whose messages are never scanned.
    pub ignore: Option<Vec<u64>>,
}

/// Game data file locations.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub gamedata: Option<String>,
}

impl Config {
    /// Path to the game data tables, falling back to the default.
    pub fn gamedata_path(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|data| data.gamedata.as_deref())
            .unwrap_or(DEFAULT_GAMEDATA_PATH)
    }
}
