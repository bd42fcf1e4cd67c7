//! Discord message event handling.
//!
//! Watches incoming messages for build codes and replies with the
//! decoded character sheet. Decoding is synchronous and read-only, so
//! the shared state is a plain `Arc` behind serenity's data map.

use std::collections::HashSet;
use std::sync::Arc;

use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{error, info, warn};

use crate::codes::character::BuildEra;
use crate::codes::origin::{classify, CodeOrigin};
use crate::codes::scan::{CodeScanner, DecodeOutcome};
use crate::codes::sheet::make_sheet;
use crate::codes::GameDataCatalog;
use crate::config::types::Config;

/// Discord caps messages at 2000 characters.
const MAX_REPLY_LEN: usize = 2000;

/// Shared bot state, built once at startup.
pub struct AppState {
    pub catalog: GameDataCatalog,
    pub scanner: CodeScanner,
    /// Guild channels to watch; `None` watches everything.
    watched_channels: Option<HashSet<u64>>,
    /// Users whose messages are never scanned.
    ignored_users: HashSet<u64>,
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}

impl AppState {
    pub fn new(config: &Config, catalog: GameDataCatalog, scanner: CodeScanner) -> Self {
        let decode = config.decode.as_ref();
        Self {
            catalog,
            scanner,
            watched_channels: decode
                .and_then(|d| d.channels.as_ref())
                .map(|channels| channels.iter().copied().collect()),
            ignored_users: decode
                .and_then(|d| d.ignore.as_ref())
                .map(|users| users.iter().copied().collect())
                .unwrap_or_default(),
        }
    }

    /// Direct messages are always scanned; guild messages only in
    /// watched channels, and never for ignored users.
    fn should_scan(&self, is_dm: bool, channel_id: u64, author_id: u64) -> bool {
        if self.ignored_users.contains(&author_id) {
            return false;
        }
        if is_dm {
            return true;
        }
        match &self.watched_channels {
            Some(channels) => channels.contains(&channel_id),
            None => true,
        }
    }
}

/// Build the chat reply for a scan outcome, or nothing.
fn build_reply(outcome: &DecodeOutcome) -> Option<String> {
    match outcome {
        DecodeOutcome::Decoded { character, code } => {
            let sheet = make_sheet(character);
            let mut reply = format!("```less\n{sheet}\n```");
            if character.era == BuildEra::Pre202 {
                reply.push_str(&format!("**Build code:** {code}"));
                if classify(character) == CodeOrigin::Post202 {
                    reply.push_str(
                        "\nThis code seems to come from a newer game version; \
                         the attribute bonuses shown may be off.",
                    );
                }
            }
            if reply.len() > MAX_REPLY_LEN {
                return Some(
                    "I decoded that build, but the sheet is too large to post here.".to_string(),
                );
            }
            Some(reply)
        }
        DecodeOutcome::Malformed(error) => Some(format!(
            "That looks like a build code, but I could not read it: {error}"
        )),
        DecodeOutcome::NotRecognized => None,
    }
}

/// Discord event handler.
pub struct DecodeHandler;

#[async_trait]
impl EventHandler for DecodeHandler {
    async fn message(&self, ctx: Context, msg: Message) {
        // Ignore our own messages and other bots
        if msg.author.bot || msg.author.id == ctx.cache.current_user().id {
            return;
        }

        let data = ctx.data.read().await;
        let Some(state) = data.get::<AppState>() else {
            return;
        };

        let is_dm = msg.guild_id.is_none();
        if !state.should_scan(is_dm, msg.channel_id.get(), msg.author.id.get()) {
            return;
        }

        let outcome = state.scanner.scan(&msg.content, &state.catalog);
        if let DecodeOutcome::Malformed(ref error) = outcome {
            warn!("Undecodable build code from {}: {}", msg.author.name, error);
        }

        let Some(reply) = build_reply(&outcome) else {
            return;
        };

        if let Err(error) = msg.channel_id.say(&ctx.http, &reply).await {
            error!("Failed to post character sheet: {}", error);
        } else if let DecodeOutcome::Decoded { character, .. } = &outcome {
            info!(
                "Decoded a {} {} for {}",
                character.genotype.display(),
                character.class_name,
                msg.author.name
            );
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("Discord bot connected as {}", ready.user.name);
    }
}
