//! Spawn settings and outcomes.

use crate::model::{catalog::CatalogEntry, rarity::Rarity, spawned_card::SpawnSlot};

/// Maximum slots per spawn; one Discord action row holds five buttons.
pub const MAX_SPAWN_COUNT: usize = 5;

/// How many cards a spawn produces and whether duplicates are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnSettings {
    pub count: usize,
    pub with_replacement: bool,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            count: 3,
            with_replacement: true,
        }
    }
}

/// One drawn slot before it is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnDraw {
    pub entry: CatalogEntry,
    pub rarity: Rarity,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpawnOutcome {
    /// The catalog is missing or empty; nothing was written.
    NoCardsAvailable,
    /// Slots persisted in button order.
    Spawned(Vec<SpawnSlot>),
}
