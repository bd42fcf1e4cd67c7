//! Discord bot setup and connection.

use std::sync::Arc;

use serenity::prelude::*;
use serenity::Client;

use crate::discord::handler::{AppState, DecodeHandler};

/// Build the Discord client with the decode handler installed.
pub async fn build_client(token: &str, state: AppState) -> Result<Client, serenity::Error> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let client = Client::builder(token, intents)
        .event_handler(DecodeHandler)
        .await?;

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(Arc::new(state));
    }

    Ok(client)
}
