use super::*;

/// Tests persisting a slot for a spawn.
///
/// Expected: Ok with an unclaimed slot without message id
#[tokio::test]
async fn creates_unclaimed_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;

    let repo = SpawnedCardRepository::new(db);
    let slot = repo
        .create(CreateSpawnedCardParam {
            card_id: card.id,
            rarity: Rarity::Epic,
            channel_id: 987654321,
            slot_index: 2,
            spawned_at: Utc::now(),
        })
        .await?;

    assert_eq!(slot.card_id, card.id);
    assert_eq!(slot.rarity, Rarity::Epic);
    assert_eq!(slot.channel_id, 987654321);
    assert_eq!(slot.slot_index, 2);
    assert_eq!(slot.message_id, None);
    assert!(slot.claimed_by.is_none());
    assert_eq!(slot.claimed_at, None);

    Ok(())
}

/// Tests that a slot must reference an existing card.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn rejects_unknown_card() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpawnedCardRepository::new(db);
    let result = repo
        .create(CreateSpawnedCardParam {
            card_id: 9999,
            rarity: Rarity::Common,
            channel_id: 1,
            slot_index: 0,
            spawned_at: Utc::now(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
