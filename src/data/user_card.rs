//! User collection repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::{error::AppError, model::collection::CollectionEntry, model::rarity::Rarity};

/// Repository for collection entries.
pub struct UserCardRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserCardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds one claim of `(card, rarity)` to a user's collection.
    ///
    /// Creates the entry with a count of 1 or increments the existing one in a single
    /// `INSERT ... ON CONFLICT (user_id, card_id, rarity) DO UPDATE` statement.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the claimer
    /// - `card_id` - Claimed card
    /// - `rarity` - Rarity of the claimed slot
    /// - `at` - Claim timestamp
    ///
    /// # Returns
    /// - `Ok(i32)` - The entry's count after the increment
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn increment(
        &self,
        user_id: u64,
        card_id: i32,
        rarity: Rarity,
        at: DateTime<Utc>,
    ) -> Result<i32, DbErr> {
        let entity = entity::prelude::UserCard::insert(entity::user_card::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            card_id: ActiveValue::Set(card_id),
            rarity: ActiveValue::Set(rarity.as_str().to_string()),
            count: ActiveValue::Set(1),
            first_claimed_at: ActiveValue::Set(at),
            last_claimed_at: ActiveValue::Set(at),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_card::Column::UserId,
                entity::user_card::Column::CardId,
                entity::user_card::Column::Rarity,
            ])
            .value(
                entity::user_card::Column::Count,
                Expr::col(entity::user_card::Column::Count).add(1),
            )
            .update_column(entity::user_card::Column::LastClaimedAt)
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(entity.count)
    }

    /// Gets every collection entry of a user with its card name, unordered.
    ///
    /// # Returns
    /// - `Ok(Vec<CollectionEntry>)` - Entries, empty if the user never claimed
    /// - `Err(AppError)` - Database error or inconsistent stored data
    pub async fn get_by_user_id(&self, user_id: u64) -> Result<Vec<CollectionEntry>, AppError> {
        entity::prelude::UserCard::find()
            .filter(entity::user_card::Column::UserId.eq(user_id.to_string()))
            .find_also_related(entity::prelude::Card)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(entry, card)| CollectionEntry::from_entities(entry, card))
            .collect()
    }
}
