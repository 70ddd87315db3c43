use serenity::all::{CommandInteraction, Context, CreateCommand, EditInteractionResponse};

use crate::{
    bot::{
        command::{edit_content, report_error},
        embed,
    },
    error::AppError,
    service::collection::CollectionService,
    state::BotState,
};

pub const NAME: &str = "mycards";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("View your card collection")
}

/// Handles `/mycards` with an ephemeral collection summary.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    command.defer_ephemeral(&ctx.http).await?;

    let entries = match CollectionService::new(&state.db)
        .get_user_collection(command.user.id.get())
        .await
    {
        Ok(entries) => entries,
        Err(e) => return report_error(ctx, command, e).await,
    };

    if entries.is_empty() {
        return edit_content(
            ctx,
            command,
            "You don't have any cards yet! Claim some when they spawn with `/spawn`.",
        )
        .await;
    }

    let username = command.user.global_name.as_deref().unwrap_or(&command.user.name);
    command
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new().embed(embed::collection_embed(username, &entries)),
        )
        .await?;

    Ok(())
}
