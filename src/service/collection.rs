use sea_orm::DatabaseConnection;

use crate::{
    data::user_card::UserCardRepository,
    error::AppError,
    model::collection::{sort_entries, CollectionEntry},
};

pub struct CollectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CollectionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's collection, rarest first and then by card name.
    ///
    /// # Returns
    /// - `Ok(Vec<CollectionEntry>)` - Entries, empty for a user without claims
    /// - `Err(AppError)` - Database error or inconsistent stored data
    pub async fn get_user_collection(
        &self,
        user_id: u64,
    ) -> Result<Vec<CollectionEntry>, AppError> {
        let mut entries = UserCardRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        sort_entries(&mut entries);

        Ok(entries)
    }
}
