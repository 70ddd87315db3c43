//! Claim button handling.
//!
//! The click is acknowledged first, then resolved against the database. The message
//! buttons are refreshed from the spawn session whatever the outcome, so a stale view
//! (e.g. after a restart) converges on the stored claim state.

use serenity::all::{
    ComponentInteraction, Context, CreateInteractionResponseFollowup, CreateMessage,
    EditInteractionResponse,
};

use crate::{
    bot::embed,
    error::AppError,
    model::claim::ClaimOutcome,
    service::{
        claim::ClaimService,
        registry::{SessionGuard, SpawnRegistry, SpawnSession},
        spawn::SpawnService,
    },
    state::BotState,
};

const CLAIM_PREFIX: &str = "claim:";

/// Custom id of the claim button for a slot.
pub fn claim_custom_id(spawned_card_id: i32) -> String {
    format!("{}{}", CLAIM_PREFIX, spawned_card_id)
}

/// Extracts the slot id from a claim button custom id.
pub fn parse_claim_custom_id(custom_id: &str) -> Option<i32> {
    custom_id.strip_prefix(CLAIM_PREFIX)?.parse().ok()
}

/// Handles a click on a claim button.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context for HTTP calls
/// - `interaction` - The button interaction
/// - `spawned_card_id` - Slot id parsed from the custom id
///
/// # Returns
/// - `Ok(())` - The user received a response
/// - `Err(AppError)` - Discord rejected the acknowledgement or the error reply
pub async fn handle_claim(
    state: &BotState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    spawned_card_id: i32,
) -> Result<(), AppError> {
    interaction.defer(&ctx.http).await?;

    let user_id = interaction.user.id.get();
    let outcome = match ClaimService::new(&state.db)
        .claim(spawned_card_id, user_id)
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(
                "Claim of slot {} by user {} failed: {:?}",
                spawned_card_id,
                user_id,
                e
            );
            return followup_ephemeral(ctx, interaction, e.user_message()).await;
        }
    };

    match outcome {
        ClaimOutcome::Claimed { slot, count } => {
            refresh_buttons(state, ctx, interaction, spawned_card_id, user_id).await;

            let announcement =
                CreateMessage::new().embed(embed::claim_announcement(user_id, &slot, count));
            if let Err(e) = interaction
                .channel_id
                .send_message(&ctx.http, announcement)
                .await
            {
                tracing::warn!(
                    "Failed to announce claim of slot {} in channel {}: {:?}",
                    spawned_card_id,
                    interaction.channel_id,
                    e
                );
            }

            Ok(())
        }
        ClaimOutcome::AlreadyClaimed { slot, owner } => {
            refresh_buttons(state, ctx, interaction, spawned_card_id, owner).await;

            let content = if owner == user_id {
                format!("You already claimed **{}**!", slot.card.name)
            } else {
                format!(
                    "❌ **{}** was already claimed by <@{}>!",
                    slot.card.name, owner
                )
            };
            followup_ephemeral(ctx, interaction, &content).await
        }
        ClaimOutcome::NotFound => {
            followup_ephemeral(ctx, interaction, "❌ This card is no longer available.").await
        }
    }
}

/// Marks the slot claimed in the session and re-renders the message buttons.
///
/// The session guard is held until Discord has applied the edit, so concurrent clicks
/// on one message edit it one after another and the last edit shows every claim.
/// Failures only affect presentation and are logged.
async fn refresh_buttons(
    state: &BotState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    spawned_card_id: i32,
    owner: u64,
) {
    let message_id = interaction.message.id.get();
    let spawns = SpawnService::new(&state.db);

    let mut session = match locked_session(&state.registry, &spawns, message_id).await {
        Ok(Some(session)) => session,
        Ok(None) => return,
        Err(e) => {
            tracing::error!("Failed to rebuild spawn session {}: {:?}", message_id, e);
            return;
        }
    };

    session.mark_claimed(spawned_card_id, owner);
    if session.is_fully_claimed() {
        tracing::debug!("All slots of spawn {} are claimed", message_id);
    }

    let edit = EditInteractionResponse::new().components(embed::claim_buttons(&session));
    if let Err(e) = interaction.edit_response(&ctx.http, edit).await {
        tracing::warn!("Failed to update buttons on spawn {}: {:?}", message_id, e);
    }
}

/// Locks the session of a spawn message, rebuilding it from the database when it is
/// not in memory (e.g. after a restart).
///
/// # Returns
/// - `Ok(Some(SessionGuard))` - Locked session
/// - `Ok(None)` - The message has no stored slots
/// - `Err(AppError)` - Database error while rebuilding
async fn locked_session(
    registry: &SpawnRegistry,
    spawns: &SpawnService<'_>,
    message_id: u64,
) -> Result<Option<SessionGuard>, AppError> {
    if let Some(session) = registry.lock(message_id).await {
        return Ok(Some(session));
    }

    let slots = spawns.load_session(message_id).await?;
    let Some(first) = slots.first() else {
        return Ok(None);
    };

    let session = SpawnSession::from_slots(first.slot.channel_id, &slots);
    tracing::debug!(
        "Rebuilt spawn session {} from {} stored slots",
        message_id,
        slots.len()
    );

    Ok(Some(registry.lock_or_insert(message_id, session).await))
}

async fn followup_ephemeral(
    ctx: &Context,
    interaction: &ComponentInteraction,
    content: &str,
) -> Result<(), AppError> {
    interaction
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .content(content)
                .ephemeral(true),
        )
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use test_utils::{
        builder::TestBuilder,
        factory::{card::CardFactory, spawned_card::SpawnedCardFactory},
    };

    use super::*;
    use crate::model::rarity::Rarity;

    #[test]
    fn parses_claim_custom_ids() {
        assert_eq!(parse_claim_custom_id(&claim_custom_id(42)), Some(42));
        assert_eq!(parse_claim_custom_id("claim:7"), Some(7));
        assert_eq!(parse_claim_custom_id("claim:"), None);
        assert_eq!(parse_claim_custom_id("claim:abc"), None);
        assert_eq!(parse_claim_custom_id("other:7"), None);
    }

    /// Tests locking a session that is not in memory.
    ///
    /// Expected: session rebuilt from stored slots in button order, with stored claims,
    /// and recorded in the registry
    #[tokio::test]
    async fn rebuilds_missing_session_from_database() -> Result<(), AppError> {
        let test = TestBuilder::new().with_card_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let dragon = CardFactory::new(db).name("Dragon").build().await?;
        let wolf = CardFactory::new(db).name("Wolf").build().await?;
        let second = SpawnedCardFactory::new(db, wolf.id)
            .channel_id("77")
            .message_id("900")
            .slot_index(1)
            .claimed_by("42")
            .build()
            .await?;
        let first = SpawnedCardFactory::new(db, dragon.id)
            .rarity("epic")
            .channel_id("77")
            .message_id("900")
            .slot_index(0)
            .build()
            .await?;

        let registry = SpawnRegistry::new();
        let session = locked_session(&registry, &SpawnService::new(db), 900)
            .await?
            .unwrap();

        assert_eq!(session.channel_id, 77);
        assert_eq!(session.slots.len(), 2);
        assert_eq!(session.slots[0].spawned_card_id, first.id);
        assert_eq!(session.slots[0].card_name, "Dragon");
        assert_eq!(session.slots[0].rarity, Rarity::Epic);
        assert_eq!(session.slots[0].claimed_by, None);
        assert_eq!(session.slots[1].spawned_card_id, second.id);
        assert_eq!(session.slots[1].claimed_by, Some(42));
        drop(session);

        assert!(registry.lock(900).await.is_some());

        Ok(())
    }

    /// Tests locking a session for a message without stored slots.
    #[tokio::test]
    async fn returns_none_for_unknown_message() -> Result<(), AppError> {
        let test = TestBuilder::new().with_card_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let registry = SpawnRegistry::new();
        let session = locked_session(&registry, &SpawnService::new(db), 900).await?;

        assert!(session.is_none());
        assert!(registry.lock(900).await.is_none());

        Ok(())
    }

    /// Tests that an in-memory session is used as is.
    ///
    /// Expected: the registry copy wins over the stored rows
    #[tokio::test]
    async fn prefers_session_in_memory() {
        let test = TestBuilder::new().with_card_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let registry = SpawnRegistry::new();
        registry
            .insert(
                900,
                SpawnSession {
                    channel_id: 5,
                    slots: Vec::new(),
                },
            )
            .await;

        let session = locked_session(&registry, &SpawnService::new(db), 900)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(session.channel_id, 5);
        assert!(session.slots.is_empty());
    }
}
