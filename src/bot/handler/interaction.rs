use serenity::all::{Context, Interaction};

use crate::{
    bot::{command, component},
    state::BotState,
};

/// Routes an interaction to its slash command or button handler.
///
/// Handlers report their own user-facing errors; anything returned here failed to reach
/// the user and is only logged.
pub async fn handle_interaction(state: &BotState, ctx: Context, interaction: Interaction) {
    let result = match &interaction {
        Interaction::Command(cmd) => {
            tracing::debug!(
                "Command /{} from user {} in channel {}",
                cmd.data.name,
                cmd.user.id,
                cmd.channel_id
            );
            command::dispatch(state, &ctx, cmd).await
        }
        Interaction::Component(component) => component::dispatch(state, &ctx, component).await,
        _ => Ok(()),
    };

    if let Err(e) = result {
        tracing::error!("Failed to respond to interaction {}: {:?}", interaction.id(), e);
    }
}
