use serenity::all::{ChannelId, Context, GuildId, MessageId};

use crate::state::BotState;

/// Handle message deletion: a deleted spawn message can no longer be claimed from.
///
/// The slots stay in the database; only the in-memory session is dropped.
pub async fn handle_message_delete(
    state: &BotState,
    _ctx: Context,
    channel_id: ChannelId,
    message_id: MessageId,
    _guild_id: Option<GuildId>,
) {
    if state.registry.remove(message_id.get()).await {
        tracing::debug!(
            "Spawn message {} deleted in channel {}, session removed",
            message_id,
            channel_id
        );
    }
}
