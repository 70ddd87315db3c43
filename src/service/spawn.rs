//! Spawning cards into a channel.

use chrono::Utc;
use rand::{seq::IndexedRandom, Rng};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{card::CardRepository, spawned_card::SpawnedCardRepository},
    error::AppError,
    model::{
        card::UpsertCardParam,
        catalog::CatalogEntry,
        rarity::Rarity,
        spawn::{SpawnDraw, SpawnOutcome, SpawnSettings, MAX_SPAWN_COUNT},
        spawned_card::{CreateSpawnedCardParam, SpawnSlot},
    },
    service::catalog::CardCatalog,
};

pub struct SpawnService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpawnService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Draws cards from the catalog and persists them as unclaimed slots.
    ///
    /// # Arguments
    /// - `catalog` - Art directory to draw from
    /// - `settings` - Slot count and replacement policy
    /// - `channel_id` - Channel the spawn is posted in
    ///
    /// # Returns
    /// - `Ok(SpawnOutcome::NoCardsAvailable)` - Catalog missing or empty, nothing written
    /// - `Ok(SpawnOutcome::Spawned)` - Persisted slots in button order
    /// - `Err(AppError)` - Directory or database error; no slot is written on failure
    pub async fn spawn(
        &self,
        catalog: &CardCatalog,
        settings: SpawnSettings,
        channel_id: u64,
    ) -> Result<SpawnOutcome, AppError> {
        let entries = catalog.entries().await?;
        if entries.is_empty() {
            tracing::info!(
                "Spawn in channel {} declined: no cards in {}",
                channel_id,
                catalog.directory().display()
            );
            return Ok(SpawnOutcome::NoCardsAvailable);
        }

        let draws = draw_slots(&entries, settings, &mut rand::rng());
        let slots = self.persist(draws, channel_id).await?;

        tracing::debug!(
            "Spawned {} slots in channel {} from {} catalog cards",
            slots.len(),
            channel_id,
            entries.len()
        );

        Ok(SpawnOutcome::Spawned(slots))
    }

    /// Writes drawn slots in one transaction, registering unseen catalog files as cards.
    ///
    /// # Returns
    /// - `Ok(Vec<SpawnSlot>)` - Created slots in draw order
    /// - `Err(AppError)` - Database error; the transaction is rolled back
    pub async fn persist(
        &self,
        draws: Vec<SpawnDraw>,
        channel_id: u64,
    ) -> Result<Vec<SpawnSlot>, AppError> {
        let txn = self.db.begin().await?;
        let spawned_at = Utc::now();

        let mut slots = Vec::with_capacity(draws.len());
        {
            let card_repo = CardRepository::new(&txn);
            let slot_repo = SpawnedCardRepository::new(&txn);

            for (index, draw) in draws.into_iter().enumerate() {
                let card = card_repo
                    .upsert_by_image_path(UpsertCardParam {
                        name: draw.entry.name,
                        image_path: draw.entry.path.to_string_lossy().into_owned(),
                    })
                    .await?;

                let slot = slot_repo
                    .create(CreateSpawnedCardParam {
                        card_id: card.id,
                        rarity: draw.rarity,
                        channel_id,
                        slot_index: index as i32,
                        spawned_at,
                    })
                    .await?;

                slots.push(SpawnSlot { slot, card });
            }
        }

        txn.commit().await?;

        Ok(slots)
    }

    /// Links persisted slots to the posted spawn message.
    pub async fn attach_message(
        &self,
        slots: &mut [SpawnSlot],
        message_id: u64,
    ) -> Result<(), AppError> {
        let ids: Vec<i32> = slots.iter().map(|s| s.slot.id).collect();

        SpawnedCardRepository::new(self.db)
            .set_message_id(&ids, message_id)
            .await?;

        for slot in slots.iter_mut() {
            slot.slot.message_id = Some(message_id);
        }

        Ok(())
    }

    /// Loads the slots of a spawn message from the database.
    ///
    /// Used when the in-memory session is missing, e.g. after a restart.
    pub async fn load_session(&self, message_id: u64) -> Result<Vec<SpawnSlot>, AppError> {
        SpawnedCardRepository::new(self.db)
            .get_by_message_id(message_id)
            .await
    }
}

/// Picks the cards and rarities of a spawn.
///
/// The slot count is clamped to `1..=MAX_SPAWN_COUNT` and, without replacement, to the
/// catalog size. Rarity is drawn independently for every slot.
///
/// # Arguments
/// - `entries` - Catalog entries, must not be empty for a non-empty result
/// - `settings` - Slot count and replacement policy
/// - `rng` - Random source
///
/// # Returns
/// - `Vec<SpawnDraw>` - Drawn slots in button order, empty for an empty catalog
pub fn draw_slots<R: Rng + ?Sized>(
    entries: &[CatalogEntry],
    settings: SpawnSettings,
    rng: &mut R,
) -> Vec<SpawnDraw> {
    let count = settings.count.clamp(1, MAX_SPAWN_COUNT);

    let picked: Vec<&CatalogEntry> = if settings.with_replacement {
        (0..count).filter_map(|_| entries.choose(rng)).collect()
    } else {
        entries
            .choose_multiple(rng, count.min(entries.len()))
            .collect()
    };

    picked
        .into_iter()
        .map(|entry| SpawnDraw {
            entry: entry.clone(),
            rarity: Rarity::roll(rng),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::{collections::HashSet, path::PathBuf};

    fn entries(count: usize) -> Vec<CatalogEntry> {
        (0..count)
            .map(|i| CatalogEntry {
                file_name: format!("card_{}.png", i),
                name: format!("Card {}", i),
                path: PathBuf::from(format!("art/card_{}.png", i)),
            })
            .collect()
    }

    #[test]
    fn draws_requested_count() {
        let mut rng = StdRng::seed_from_u64(1);

        let draws = draw_slots(&entries(5), SpawnSettings::default(), &mut rng);

        assert_eq!(draws.len(), 3);
    }

    #[test]
    fn replacement_allows_more_slots_than_cards() {
        let mut rng = StdRng::seed_from_u64(2);
        let settings = SpawnSettings {
            count: 5,
            with_replacement: true,
        };

        let draws = draw_slots(&entries(1), settings, &mut rng);

        assert_eq!(draws.len(), 5);
        assert!(draws.iter().all(|d| d.entry.file_name == "card_0.png"));
    }

    #[test]
    fn without_replacement_draws_distinct_cards() {
        let mut rng = StdRng::seed_from_u64(3);
        let settings = SpawnSettings {
            count: 5,
            with_replacement: false,
        };

        let draws = draw_slots(&entries(3), settings, &mut rng);

        assert_eq!(draws.len(), 3);
        let distinct: HashSet<_> = draws.iter().map(|d| d.entry.file_name.clone()).collect();
        assert_eq!(distinct.len(), 3);
    }

    #[test]
    fn clamps_count_to_action_row() {
        let mut rng = StdRng::seed_from_u64(4);
        let settings = SpawnSettings {
            count: 12,
            with_replacement: true,
        };

        assert_eq!(draw_slots(&entries(2), settings, &mut rng).len(), MAX_SPAWN_COUNT);
    }

    #[test]
    fn empty_catalog_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(5);

        assert!(draw_slots(&[], SpawnSettings::default(), &mut rng).is_empty());
    }
}
