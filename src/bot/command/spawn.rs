use serenity::all::{
    CommandInteraction, Context, CreateAttachment, CreateCommand, EditInteractionResponse,
};

use crate::{
    bot::{
        command::{edit_content, report_error},
        embed,
    },
    error::AppError,
    model::spawn::SpawnOutcome,
    render::{render_spawn_image, RenderCard},
    service::{registry::SpawnSession, spawn::SpawnService},
    state::BotState,
};

pub const NAME: &str = "spawn";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Spawn random cards for everyone to claim")
}

/// Handles `/spawn`.
///
/// Persists the slots, posts them with one claim button each and records the session
/// under the posted message.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    command.defer(&ctx.http).await?;

    if let Err(e) = spawn(state, ctx, command).await {
        return report_error(ctx, command, e).await;
    }

    Ok(())
}

async fn spawn(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let channel_id = command.channel_id.get();
    let service = SpawnService::new(&state.db);

    let mut slots = match service
        .spawn(&state.catalog, state.config.spawn_settings(), channel_id)
        .await?
    {
        SpawnOutcome::Spawned(slots) => slots,
        SpawnOutcome::NoCardsAvailable => {
            return edit_content(
                ctx,
                command,
                "❌ No cards available! An admin can add some with `/upload_card`.",
            )
            .await;
        }
    };

    let image = match render_spawn_image(slots.iter().map(RenderCard::from).collect()).await {
        Ok(png) => Some(png),
        Err(e) => {
            tracing::error!("Failed to render spawn image in channel {}: {:?}", channel_id, e);
            None
        }
    };

    let session = SpawnSession::from_slots(channel_id, &slots);
    let mut response = EditInteractionResponse::new()
        .embed(embed::spawn_embed(&slots, image.is_some()))
        .components(embed::claim_buttons(&session));
    if let Some(png) = image {
        response = response.new_attachment(CreateAttachment::bytes(png, embed::SPAWN_IMAGE_NAME));
    }

    let message = match command.edit_response(&ctx.http, response).await {
        Ok(message) => message,
        Err(e) => {
            let slot_ids: Vec<i32> = slots.iter().map(|s| s.slot.id).collect();
            tracing::warn!(
                "Spawn message in channel {} was not posted, slots {:?} stay without a message",
                channel_id,
                slot_ids
            );
            return Err(e.into());
        }
    };
    let message_id = message.id.get();

    service.attach_message(&mut slots, message_id).await?;
    state.registry.insert(message_id, session).await;

    tracing::info!(
        "User {} spawned {} cards in channel {} (message {})",
        command.user.id,
        slots.len(),
        channel_id,
        message_id
    );

    Ok(())
}
