//! In-memory spawn sessions keyed by spawn message.
//!
//! Sessions only drive button presentation. Claim correctness comes from the database,
//! so a missing session is rebuilt from `spawned_card` rows and never blocks a claim.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::model::{rarity::Rarity, spawned_card::SpawnSlot};

/// Presentation state of one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSlot {
    pub spawned_card_id: i32,
    pub card_name: String,
    pub rarity: Rarity,
    pub claimed_by: Option<u64>,
}

/// Slots of one spawn message in button order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnSession {
    pub channel_id: u64,
    pub slots: Vec<SessionSlot>,
}

impl SpawnSession {
    /// Builds a session from persisted slots.
    ///
    /// # Arguments
    /// - `channel_id` - Channel the spawn message lives in
    /// - `slots` - Slots ordered by `slot_index`
    pub fn from_slots(channel_id: u64, slots: &[SpawnSlot]) -> Self {
        Self {
            channel_id,
            slots: slots
                .iter()
                .map(|s| SessionSlot {
                    spawned_card_id: s.slot.id,
                    card_name: s.card.name.clone(),
                    rarity: s.slot.rarity,
                    claimed_by: s.slot.claimed_by,
                })
                .collect(),
        }
    }

    pub fn is_fully_claimed(&self) -> bool {
        self.slots.iter().all(|slot| slot.claimed_by.is_some())
    }

    /// Marks a slot as claimed, keeping the first owner.
    ///
    /// # Returns
    /// - `true` - The slot is part of this session
    /// - `false` - Unknown slot id
    pub fn mark_claimed(&mut self, spawned_card_id: i32, user_id: u64) -> bool {
        match self
            .slots
            .iter_mut()
            .find(|slot| slot.spawned_card_id == spawned_card_id)
        {
            Some(slot) => {
                slot.claimed_by.get_or_insert(user_id);
                true
            }
            None => false,
        }
    }
}

/// Session guarded for the duration of a message edit.
pub type SessionGuard = OwnedMutexGuard<SpawnSession>;

/// Registry of live spawn sessions shared by all handlers.
///
/// Each session sits behind its own mutex. Handlers hold the guard while editing the
/// spawn message, so edits of one message are applied in the order their state changed
/// and the last edit always carries every claim recorded before it.
#[derive(Debug, Clone, Default)]
pub struct SpawnRegistry {
    sessions: Arc<RwLock<HashMap<u64, Arc<Mutex<SpawnSession>>>>>,
}

impl SpawnRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the session of a freshly posted spawn message.
    pub async fn insert(&self, message_id: u64, session: SpawnSession) {
        self.sessions
            .write()
            .await
            .insert(message_id, Arc::new(Mutex::new(session)));
    }

    /// Locks the session of a message, waiting for any edit in progress.
    ///
    /// # Returns
    /// - `Some(SessionGuard)` - Exclusive access to the session
    /// - `None` - No session recorded for that message
    pub async fn lock(&self, message_id: u64) -> Option<SessionGuard> {
        let session = self.sessions.read().await.get(&message_id).cloned()?;

        Some(session.lock_owned().await)
    }

    /// Records a rebuilt session unless another handler got there first, then locks it.
    pub async fn lock_or_insert(&self, message_id: u64, session: SpawnSession) -> SessionGuard {
        let session = self
            .sessions
            .write()
            .await
            .entry(message_id)
            .or_insert_with(|| Arc::new(Mutex::new(session)))
            .clone();

        session.lock_owned().await
    }

    /// Forgets a session, typically because its message was deleted.
    pub async fn remove(&self, message_id: u64) -> bool {
        self.sessions.write().await.remove(&message_id).is_some()
    }
}
