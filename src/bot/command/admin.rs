//! Administrator-only catalog commands.
//!
//! Registered with `ADMINISTRATOR` as default member permission; the permission is
//! checked again at runtime since server admins can override command visibility.

use serenity::all::{
    CommandDataOptionValue, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, EditInteractionResponse, Permissions,
};

use crate::{
    bot::{
        command::{edit_content, report_error, respond_ephemeral},
        embed,
    },
    error::AppError,
    service::admin::{CatalogAdminService, DeleteOutcome, UploadOutcome},
    state::BotState,
};

pub const UPLOAD_NAME: &str = "upload_card";
pub const LIST_NAME: &str = "list_cards";
pub const DELETE_NAME: &str = "delete_card";
pub const INFO_NAME: &str = "card_info";

pub fn register_upload() -> CreateCommand {
    CreateCommand::new(UPLOAD_NAME)
        .description("Upload a new card image (Admin only)")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Attachment,
                "image",
                "The card image to upload",
            )
            .required(true),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "name",
            "Custom name for the card (optional)",
        ))
}

pub fn register_list() -> CreateCommand {
    CreateCommand::new(LIST_NAME)
        .description("List all available card images (Admin only)")
        .default_member_permissions(Permissions::ADMINISTRATOR)
}

pub fn register_delete() -> CreateCommand {
    CreateCommand::new(DELETE_NAME)
        .description("Delete a card image (Admin only)")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "filename",
                "The filename to delete",
            )
            .required(true),
        )
}

pub fn register_info() -> CreateCommand {
    CreateCommand::new(INFO_NAME)
        .description("Get information about the card directory (Admin only)")
        .default_member_permissions(Permissions::ADMINISTRATOR)
}

/// Handles the admin commands after the permission check.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    if !is_admin(command) {
        return respond_ephemeral(
            ctx,
            command,
            "❌ You need administrator permissions to use this command.",
        )
        .await;
    }

    command.defer_ephemeral(&ctx.http).await?;

    let result = match command.data.name.as_str() {
        UPLOAD_NAME => upload(state, ctx, command).await,
        LIST_NAME => list(state, ctx, command).await,
        DELETE_NAME => delete(state, ctx, command).await,
        _ => info(state, ctx, command).await,
    };

    if let Err(e) = result {
        return report_error(ctx, command, e).await;
    }

    Ok(())
}

fn is_admin(command: &CommandInteraction) -> bool {
    command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator())
}

async fn upload(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let mut attachment = None;
    let mut custom_name = None;
    for option in &command.data.options {
        match (option.name.as_str(), &option.value) {
            ("image", CommandDataOptionValue::Attachment(id)) => {
                attachment = command.data.resolved.attachments.get(id);
            }
            ("name", CommandDataOptionValue::String(name)) => custom_name = Some(name.as_str()),
            _ => {}
        }
    }

    let Some(attachment) = attachment else {
        return edit_content(ctx, command, "❌ Please attach an image.").await;
    };

    let service = CatalogAdminService::new(&state.db, &state.catalog);
    let file_name = match service
        .check_upload(&attachment.filename, custom_name, u64::from(attachment.size))
        .await?
    {
        Ok(file_name) => file_name,
        Err(rejection) => return edit_content(ctx, command, &rejection.to_string()).await,
    };

    let bytes = attachment.download().await?;

    match service.store_upload(&file_name, &bytes).await? {
        UploadOutcome::Stored { file_name, card } => {
            tracing::info!(
                "Admin {} uploaded {} as card {}",
                command.user.id,
                file_name,
                card.id
            );
            edit_content(
                ctx,
                command,
                &format!(
                    "✅ Uploaded **{}** as `{}` ({:.1} KB).",
                    card.name,
                    file_name,
                    bytes.len() as f64 / 1024.0
                ),
            )
            .await
        }
        UploadOutcome::Rejected(rejection) => {
            edit_content(ctx, command, &rejection.to_string()).await
        }
    }
}

async fn list(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let scan = state.catalog.scan().await?;

    if !scan.exists {
        return edit_content(ctx, command, "❌ The card art directory does not exist.").await;
    }

    command
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new().embed(embed::catalog_listing_embed(&scan)),
        )
        .await?;

    Ok(())
}

async fn delete(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let file_name = command
        .data
        .options
        .iter()
        .find(|option| option.name == "filename")
        .and_then(|option| option.value.as_str())
        .unwrap_or_default();

    let service = CatalogAdminService::new(&state.db, &state.catalog);
    let content = match service.delete(file_name).await? {
        DeleteOutcome::Deleted => {
            tracing::info!("Admin {} deleted card art {}", command.user.id, file_name);
            format!("✅ Deleted `{}`. Existing collections keep the card.", file_name)
        }
        DeleteOutcome::NotFound => format!("❌ No card file named `{}`.", file_name),
        DeleteOutcome::InvalidName => "❌ Filenames cannot contain path separators.".to_string(),
    };

    edit_content(ctx, command, &content).await
}

async fn info(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let scan = state.catalog.scan().await?;
    let directory = state.catalog.directory().display().to_string();

    command
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new().embed(embed::catalog_info_embed(&directory, &scan)),
        )
        .await?;

    Ok(())
}
