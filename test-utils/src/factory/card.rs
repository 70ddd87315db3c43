//! Card factory for creating catalog card entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let card = CardFactory::new(&db)
///     .name("Fire Elemental")
///     .image_path("art/fire-elemental.png")
///     .build()
///     .await?;
/// ```
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    image_path: String,
}

impl<'a> CardFactory<'a> {
    /// Creates a new CardFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Card {id}"`
    /// - image_path: `"art/card_{id}.png"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Card {}", id),
            image_path: format!("art/card_{}.png", id),
        }
    }

    /// Sets the card display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the card image path.
    pub fn image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = image_path.into();
        self
    }

    /// Builds and inserts the card entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::card::Model)` - Created card entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        entity::card::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            image_path: ActiveValue::Set(self.image_path),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a card with default values.
///
/// Shorthand for `CardFactory::new(db).build().await`.
pub async fn create_card(db: &DatabaseConnection) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db).build().await
}
