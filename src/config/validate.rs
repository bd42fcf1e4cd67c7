//! Configuration validation.
//!
//! Validates configuration values and provides helpful error messages.

use crate::common::error::ConfigError;
use crate::config::types::Config;

/// Validate a configuration and return detailed errors.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if config.discord.token.is_empty() {
        errors.push("discord.token is required".to_string());
    }
    if config.discord.token == "YOUR_DISCORD_TOKEN_HERE" {
        errors.push("discord.token has not been configured (still using placeholder)".to_string());
    }

    if let Some(ref decode) = config.decode {
        if let Some(ref channels) = decode.channels {
            if channels.is_empty() {
                errors.push(
                    "decode.channels is empty - remove it to watch all channels".to_string(),
                );
            }
            for (i, channel) in channels.iter().enumerate() {
                if *channel == 0 {
                    errors.push(format!("decode.channels[{}] must be non-zero", i));
                }
            }
        }
        if let Some(ref ignore) = decode.ignore {
            for (i, user) in ignore.iter().enumerate() {
                if *user == 0 {
                    errors.push(format!("decode.ignore[{}] must be non-zero", i));
                }
            }
        }
    }

    if let Some(ref data) = config.data {
        if let Some(ref gamedata) = data.gamedata {
            if gamedata.is_empty() {
                errors.push("data.gamedata must not be empty".to_string());
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            message: errors.join("\n"),
        })
    }
}
