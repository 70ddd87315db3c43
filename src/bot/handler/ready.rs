//! Ready event handler.
//!
//! Registers the slash commands once the gateway handshake completes. Commands go to
//! the configured guild when `DISCORD_GUILD_ID` is set, which updates instantly, and
//! globally otherwise.

use serenity::all::{ActivityData, Command, Context, GuildId, Ready};

use crate::{bot::command, state::BotState};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state, used for the command registration target
/// - `ctx` - Discord context for HTTP calls and activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::playing("/spawn")));

    let commands = command::definitions();
    let count = commands.len();

    let result = match state.config.discord_guild_id {
        Some(guild_id) => GuildId::new(guild_id)
            .set_commands(&ctx.http, commands)
            .await
            .map(|_| format!("guild {}", guild_id)),
        None => Command::set_global_commands(&ctx.http, commands)
            .await
            .map(|_| "global scope".to_string()),
    };

    match result {
        Ok(target) => tracing::info!("Registered {} slash commands in {}", count, target),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
