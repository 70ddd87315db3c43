//! Spawned slot models.
//!
//! A spawn produces one `SpawnedCard` per slot. The data layer stores Discord snowflakes
//! as strings; conversion here parses them back to `u64` so the bot layer can build
//! serenity ids directly.

use chrono::{DateTime, Utc};

use crate::{
    error::{
        internal::{parse_snowflake, InternalError},
        AppError,
    },
    model::{card::Card, rarity::Rarity},
};

/// A persisted slot of a spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnedCard {
    /// Unique identifier of the slot, used in button custom ids.
    pub id: i32,
    /// Catalog card shown in this slot.
    pub card_id: i32,
    /// Rarity drawn for this slot.
    pub rarity: Rarity,
    /// Channel the spawn was posted in.
    pub channel_id: u64,
    /// Spawn message, `None` until the message has been posted.
    pub message_id: Option<u64>,
    /// Position of the slot's button within the spawn message.
    pub slot_index: i32,
    pub spawned_at: DateTime<Utc>,
    /// User that claimed the slot, if any.
    pub claimed_by: Option<u64>,
    pub claimed_at: Option<DateTime<Utc>>,
}

impl SpawnedCard {
    /// Converts an entity model to a spawned slot.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(SpawnedCard)` - The converted slot
    /// - `Err(InternalError)` - A stored snowflake or rarity could not be parsed
    pub fn from_entity(entity: entity::spawned_card::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            card_id: entity.card_id,
            rarity: entity.rarity.parse()?,
            channel_id: parse_snowflake(&entity.channel_id)?,
            message_id: entity
                .message_id
                .as_deref()
                .map(parse_snowflake)
                .transpose()?,
            slot_index: entity.slot_index,
            spawned_at: entity.spawned_at,
            claimed_by: entity
                .claimed_by
                .as_deref()
                .map(parse_snowflake)
                .transpose()?,
            claimed_at: entity.claimed_at,
        })
    }
}

/// A slot together with the card it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnSlot {
    pub slot: SpawnedCard,
    pub card: Card,
}

impl SpawnSlot {
    /// Builds a slot from a `find_also_related` row.
    ///
    /// # Returns
    /// - `Ok(SpawnSlot)` - Slot with its card
    /// - `Err(AppError::InternalErr)` - The referenced card row is missing or the slot
    ///   holds unparseable data
    pub fn from_entities(
        slot: entity::spawned_card::Model,
        card: Option<entity::card::Model>,
    ) -> Result<Self, AppError> {
        let card = card.ok_or_else(|| InternalError::MissingCard {
            card_id: slot.card_id,
            referenced_by: format!("spawned card {}", slot.id),
        })?;

        Ok(Self {
            slot: SpawnedCard::from_entity(slot)?,
            card: Card::from_entity(card),
        })
    }
}

/// Parameters for persisting one unclaimed slot.
#[derive(Debug, Clone)]
pub struct CreateSpawnedCardParam {
    pub card_id: i32,
    pub rarity: Rarity,
    /// Discord channel ID as u64.
    pub channel_id: u64,
    pub slot_index: i32,
    pub spawned_at: DateTime<Utc>,
}
