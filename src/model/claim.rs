//! Claim outcomes.

use crate::model::spawned_card::SpawnSlot;

/// Result of a claim attempt on one slot.
///
/// Losing a race is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimOutcome {
    /// The caller won the slot. `count` is the caller's new count for the
    /// `(card, rarity)` identity.
    Claimed { slot: SpawnSlot, count: i32 },
    /// Somebody already owns the slot. Nothing was written.
    AlreadyClaimed { slot: SpawnSlot, owner: u64 },
    /// No slot with that id exists.
    NotFound,
}
