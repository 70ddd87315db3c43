//! Spawned card factory for creating claimable slot entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating spawned slots with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let slot = SpawnedCardFactory::new(&db, card.id)
///     .rarity("epic")
///     .message_id("555")
///     .build()
///     .await?;
/// ```
pub struct SpawnedCardFactory<'a> {
    db: &'a DatabaseConnection,
    card_id: i32,
    rarity: String,
    channel_id: String,
    message_id: Option<String>,
    slot_index: i32,
    claimed_by: Option<String>,
}

impl<'a> SpawnedCardFactory<'a> {
    /// Creates a new SpawnedCardFactory with default values.
    ///
    /// Defaults:
    /// - rarity: `"common"`
    /// - channel_id: unique numeric string
    /// - message_id: `None`
    /// - slot_index: `0`
    /// - claimed_by: `None` (unclaimed)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `card_id` - Catalog card this slot shows
    pub fn new(db: &'a DatabaseConnection, card_id: i32) -> Self {
        Self {
            db,
            card_id,
            rarity: "common".to_string(),
            channel_id: (100_000_000 + next_id()).to_string(),
            message_id: None,
            slot_index: 0,
            claimed_by: None,
        }
    }

    /// Sets the slot rarity (lower-case tier name).
    pub fn rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = rarity.into();
        self
    }

    /// Sets the channel the slot was spawned in.
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Sets the spawn message the slot belongs to.
    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    /// Sets the position of the slot within its spawn.
    pub fn slot_index(mut self, slot_index: i32) -> Self {
        self.slot_index = slot_index;
        self
    }

    /// Marks the slot as already claimed by the given user.
    pub fn claimed_by(mut self, user_id: impl Into<String>) -> Self {
        self.claimed_by = Some(user_id.into());
        self
    }

    /// Builds and inserts the spawned slot into the database.
    ///
    /// # Returns
    /// - `Ok(entity::spawned_card::Model)` - Created slot
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::spawned_card::Model, DbErr> {
        let claimed_at = self.claimed_by.as_ref().map(|_| Utc::now());

        entity::spawned_card::ActiveModel {
            id: ActiveValue::NotSet,
            card_id: ActiveValue::Set(self.card_id),
            rarity: ActiveValue::Set(self.rarity),
            channel_id: ActiveValue::Set(self.channel_id),
            message_id: ActiveValue::Set(self.message_id),
            slot_index: ActiveValue::Set(self.slot_index),
            spawned_at: ActiveValue::Set(Utc::now()),
            claimed_by: ActiveValue::Set(self.claimed_by),
            claimed_at: ActiveValue::Set(claimed_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unclaimed common slot for the specified card.
///
/// Shorthand for `SpawnedCardFactory::new(db, card_id).build().await`.
pub async fn create_spawned_card(
    db: &DatabaseConnection,
    card_id: i32,
) -> Result<entity::spawned_card::Model, DbErr> {
    SpawnedCardFactory::new(db, card_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::card::create_card;

    #[tokio::test]
    async fn creates_unclaimed_slot_by_default() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_card_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let card = create_card(db).await?;
        let slot = create_spawned_card(db, card.id).await?;

        assert_eq!(slot.card_id, card.id);
        assert!(slot.claimed_by.is_none());
        assert!(slot.claimed_at.is_none());
        assert!(slot.message_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_claimed_slot() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_card_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let card = create_card(db).await?;
        let slot = SpawnedCardFactory::new(db, card.id)
            .claimed_by("42")
            .build()
            .await?;

        assert_eq!(slot.claimed_by.as_deref(), Some("42"));
        assert!(slot.claimed_at.is_some());

        Ok(())
    }
}
