//! Spawned slot repository.
//!
//! Slots are never deleted. The only mutation after creation besides attaching the
//! message id is `claim`, a conditional update that succeeds for exactly one caller.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::spawned_card::{CreateSpawnedCardParam, SpawnSlot, SpawnedCard},
};

/// Repository for spawned slot rows.
pub struct SpawnedCardRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpawnedCardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Persists one unclaimed slot without a message id.
    ///
    /// # Arguments
    /// - `param` - Card, rarity, channel and position of the slot
    ///
    /// # Returns
    /// - `Ok(SpawnedCard)` - The created slot
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateSpawnedCardParam) -> Result<SpawnedCard, AppError> {
        let entity = entity::spawned_card::ActiveModel {
            card_id: ActiveValue::Set(param.card_id),
            rarity: ActiveValue::Set(param.rarity.as_str().to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            message_id: ActiveValue::Set(None),
            slot_index: ActiveValue::Set(param.slot_index),
            spawned_at: ActiveValue::Set(param.spawned_at),
            claimed_by: ActiveValue::Set(None),
            claimed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(SpawnedCard::from_entity(entity)?)
    }

    /// Links slots to the message their buttons were posted in.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_message_id(&self, ids: &[i32], message_id: u64) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::SpawnedCard::update_many()
            .col_expr(
                entity::spawned_card::Column::MessageId,
                Expr::value(message_id.to_string()),
            )
            .filter(entity::spawned_card::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Claims a slot for a user if and only if it is still unclaimed.
    ///
    /// Issues `UPDATE ... SET claimed_by, claimed_at WHERE id = ? AND claimed_by IS NULL`.
    /// The database serialises concurrent writers, so at most one call per slot ever
    /// affects a row.
    ///
    /// # Arguments
    /// - `id` - Slot id
    /// - `user_id` - Discord ID of the claimer
    /// - `at` - Claim timestamp
    ///
    /// # Returns
    /// - `Ok(true)` - The caller won the slot
    /// - `Ok(false)` - The slot is already claimed or does not exist
    /// - `Err(DbErr)` - Database error during update
    pub async fn claim(&self, id: i32, user_id: u64, at: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::SpawnedCard::update_many()
            .col_expr(
                entity::spawned_card::Column::ClaimedBy,
                Expr::value(user_id.to_string()),
            )
            .col_expr(entity::spawned_card::Column::ClaimedAt, Expr::value(at))
            .filter(entity::spawned_card::Column::Id.eq(id))
            .filter(entity::spawned_card::Column::ClaimedBy.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets a slot together with the card it shows.
    ///
    /// # Returns
    /// - `Ok(Some(SpawnSlot))` - Slot and card
    /// - `Ok(None)` - No slot with that id
    /// - `Err(AppError)` - Database error or inconsistent stored data
    pub async fn get_with_card(&self, id: i32) -> Result<Option<SpawnSlot>, AppError> {
        entity::prelude::SpawnedCard::find_by_id(id)
            .find_also_related(entity::prelude::Card)
            .one(self.db)
            .await?
            .map(|(slot, card)| SpawnSlot::from_entities(slot, card))
            .transpose()
    }

    /// Gets all slots of a spawn message in button order.
    ///
    /// Used to rebuild button state when the in-memory session is gone.
    ///
    /// # Arguments
    /// - `message_id` - Discord ID of the spawn message
    ///
    /// # Returns
    /// - `Ok(Vec<SpawnSlot>)` - Slots ordered by `slot_index`, empty for unknown messages
    /// - `Err(AppError)` - Database error or inconsistent stored data
    pub async fn get_by_message_id(&self, message_id: u64) -> Result<Vec<SpawnSlot>, AppError> {
        entity::prelude::SpawnedCard::find()
            .filter(entity::spawned_card::Column::MessageId.eq(message_id.to_string()))
            .order_by_asc(entity::spawned_card::Column::SlotIndex)
            .find_also_related(entity::prelude::Card)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(slot, card)| SpawnSlot::from_entities(slot, card))
            .collect()
    }
}
