//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a card together with one unclaimed spawned slot for it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((card, spawned_card))` - The created card and slot
/// - `Err(DbErr)` - Database error during creation
pub async fn create_spawn_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::card::Model, entity::spawned_card::Model), DbErr> {
    let card = crate::factory::card::create_card(db).await?;
    let spawned = crate::factory::spawned_card::create_spawned_card(db, card.id).await?;

    Ok((card, spawned))
}
