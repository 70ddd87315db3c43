//! Catalog card repository.

use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::card::{Card, UpsertCardParam};

/// Repository for catalog card rows.
pub struct CardRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the card for an image path or refreshes its name if the path is known.
    ///
    /// The row id of an existing path never changes, so earlier spawns and collection
    /// entries keep pointing at the same card.
    ///
    /// # Arguments
    /// - `param` - Derived name and image path of the catalog file
    ///
    /// # Returns
    /// - `Ok(Card)` - The inserted or existing card
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_by_image_path(&self, param: UpsertCardParam) -> Result<Card, DbErr> {
        let entity = entity::prelude::Card::insert(entity::card::ActiveModel {
            name: ActiveValue::Set(param.name),
            image_path: ActiveValue::Set(param.image_path),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::card::Column::ImagePath)
                .update_column(entity::card::Column::Name)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Card::from_entity(entity))
    }
}
