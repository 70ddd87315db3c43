//! User card factory for creating collection entries.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating collection entries with customizable fields.
pub struct UserCardFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    card_id: i32,
    rarity: String,
    count: i32,
}

impl<'a> UserCardFactory<'a> {
    /// Creates a new UserCardFactory with default values.
    ///
    /// Defaults:
    /// - rarity: `"common"`
    /// - count: `1`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Discord ID of the owner
    /// - `card_id` - Catalog card owned
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>, card_id: i32) -> Self {
        Self {
            db,
            user_id: user_id.into(),
            card_id,
            rarity: "common".to_string(),
            count: 1,
        }
    }

    /// Sets the rarity of the owned card.
    pub fn rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = rarity.into();
        self
    }

    /// Sets how many copies are owned.
    pub fn count(mut self, count: i32) -> Self {
        self.count = count;
        self
    }

    /// Builds and inserts the collection entry into the database.
    pub async fn build(self) -> Result<entity::user_card::Model, DbErr> {
        let now = Utc::now();

        entity::user_card::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            card_id: ActiveValue::Set(self.card_id),
            rarity: ActiveValue::Set(self.rarity),
            count: ActiveValue::Set(self.count),
            first_claimed_at: ActiveValue::Set(now),
            last_claimed_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a single common copy of a card owned by the user.
pub async fn create_user_card(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    card_id: i32,
) -> Result<entity::user_card::Model, DbErr> {
    UserCardFactory::new(db, user_id, card_id).build().await
}
