use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, error::AppError, state::BotState};

/// Starts the Discord bot and runs until the gateway connection ends.
///
/// The bot only needs guild and guild message events: slash commands and buttons arrive
/// as interactions, and message deletions drop spawn sessions.
///
/// # Arguments
/// - `state` - Shared bot state with database, config, catalog and spawn registry
///
/// # Returns
/// - `Ok(())` - The client shut down cleanly
/// - `Err(AppError)` - Client initialization or gateway connection failed
pub async fn start_bot(state: BotState) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

    let token = state.config.discord_bot_token.clone();
    let handler = Handler::new(state);

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
