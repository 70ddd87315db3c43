//! Slash command definitions and handlers.

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse,
};

use crate::{error::AppError, state::BotState};

pub mod admin;
pub mod mycards;
pub mod spawn;

/// Every slash command the bot registers.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        spawn::register(),
        mycards::register(),
        admin::register_upload(),
        admin::register_list(),
        admin::register_delete(),
        admin::register_info(),
    ]
}

/// Routes a slash command by name.
pub async fn dispatch(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    match command.data.name.as_str() {
        spawn::NAME => spawn::run(state, ctx, command).await,
        mycards::NAME => mycards::run(state, ctx, command).await,
        admin::UPLOAD_NAME
        | admin::LIST_NAME
        | admin::DELETE_NAME
        | admin::INFO_NAME => admin::run(state, ctx, command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            respond_ephemeral(ctx, command, "❌ Unknown command.").await
        }
    }
}

/// Sends an ephemeral reply as the initial interaction response.
pub async fn respond_ephemeral(
    ctx: &Context,
    command: &CommandInteraction,
    content: &str,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}

/// Replaces a deferred response with a text message.
pub async fn edit_content(
    ctx: &Context,
    command: &CommandInteraction,
    content: &str,
) -> Result<(), AppError> {
    command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;

    Ok(())
}

/// Logs a handler error and shows the generic message in the deferred response.
pub async fn report_error(
    ctx: &Context,
    command: &CommandInteraction,
    error: AppError,
) -> Result<(), AppError> {
    tracing::error!(
        "Command /{} from user {} failed: {:?}",
        command.data.name,
        command.user.id,
        error
    );

    edit_content(ctx, command, error.user_message()).await
}
