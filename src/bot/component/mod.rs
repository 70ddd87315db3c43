use serenity::all::{ComponentInteraction, Context};

use crate::{error::AppError, state::BotState};

pub mod claim;

/// Routes a component interaction by its custom id prefix.
pub async fn dispatch(
    state: &BotState,
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    match claim::parse_claim_custom_id(&interaction.data.custom_id) {
        Some(spawned_card_id) => {
            claim::handle_claim(state, ctx, interaction, spawned_card_id).await
        }
        None => {
            tracing::debug!("Ignoring unknown component {}", interaction.data.custom_id);
            Ok(())
        }
    }
}
