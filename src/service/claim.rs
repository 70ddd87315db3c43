//! Claim resolution for spawned slots.

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    data::{spawned_card::SpawnedCardRepository, user_card::UserCardRepository},
    error::AppError,
    model::claim::ClaimOutcome,
};

pub struct ClaimService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClaimService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attempts to claim a slot for a user.
    ///
    /// The conditional update and the collection increment share one transaction, so a
    /// slot is never marked claimed without its owner being credited. The update runs
    /// first so the transaction takes the write lock before reading.
    ///
    /// # Arguments
    /// - `spawned_card_id` - Slot id from the button custom id
    /// - `user_id` - Discord ID of the clicking user
    ///
    /// # Returns
    /// - `Ok(ClaimOutcome::Claimed)` - The user won the slot and was credited
    /// - `Ok(ClaimOutcome::AlreadyClaimed)` - Another user owns the slot; nothing written
    /// - `Ok(ClaimOutcome::NotFound)` - No such slot
    /// - `Err(AppError)` - Database error; the transaction is rolled back
    pub async fn claim(
        &self,
        spawned_card_id: i32,
        user_id: u64,
    ) -> Result<ClaimOutcome, AppError> {
        let claimed_at = Utc::now();
        let txn = self.db.begin().await?;

        let (won, slot) = {
            let slot_repo = SpawnedCardRepository::new(&txn);
            let won = slot_repo.claim(spawned_card_id, user_id, claimed_at).await?;
            let slot = slot_repo.get_with_card(spawned_card_id).await?;
            (won, slot)
        };

        let Some(slot) = slot else {
            txn.rollback().await?;
            return Ok(ClaimOutcome::NotFound);
        };

        if !won {
            txn.rollback().await?;

            let owner = slot.slot.claimed_by.ok_or(DbErr::RecordNotUpdated)?;
            tracing::debug!(
                "User {} lost slot {} to {}",
                user_id,
                spawned_card_id,
                owner
            );

            return Ok(ClaimOutcome::AlreadyClaimed { slot, owner });
        }

        let count = UserCardRepository::new(&txn)
            .increment(user_id, slot.card.id, slot.slot.rarity, claimed_at)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} claimed {} ({}) from slot {}, now owns {}",
            user_id,
            slot.card.name,
            slot.slot.rarity,
            spawned_card_id,
            count
        );

        Ok(ClaimOutcome::Claimed { slot, count })
    }
}
