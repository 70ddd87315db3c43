use super::*;

/// Tests claiming an unclaimed slot.
///
/// Expected: Ok(true) and the slot records the claimer and timestamp
#[tokio::test]
async fn claims_unclaimed_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, slot) = factory::helpers::create_spawn_with_dependencies(db).await?;

    let repo = SpawnedCardRepository::new(db);
    let won = repo.claim(slot.id, 42, Utc::now()).await?;

    assert!(won);
    let stored = repo.get_with_card(slot.id).await?.unwrap().slot;
    assert_eq!(stored.claimed_by, Some(42));
    assert!(stored.claimed_at.is_some());

    Ok(())
}

/// Tests that a second claim does not overwrite the first.
///
/// Expected: Ok(false) and the original owner is kept
#[tokio::test]
async fn does_not_overwrite_existing_claim() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;
    let slot = SpawnedCardFactory::new(db, card.id)
        .claimed_by("7")
        .build()
        .await?;

    let repo = SpawnedCardRepository::new(db);
    let won = repo.claim(slot.id, 42, Utc::now()).await?;

    assert!(!won);
    let stored = repo.get_with_card(slot.id).await?.unwrap().slot;
    assert_eq!(stored.claimed_by, Some(7));

    Ok(())
}

/// Tests claiming a slot id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpawnedCardRepository::new(db);

    assert!(!repo.claim(9999, 42, Utc::now()).await?);

    Ok(())
}

/// Tests that claims on sibling slots of one spawn are independent.
#[tokio::test]
async fn claims_slots_independently() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;
    let first = SpawnedCardFactory::new(db, card.id)
        .message_id("500")
        .slot_index(0)
        .build()
        .await?;
    let second = SpawnedCardFactory::new(db, card.id)
        .message_id("500")
        .slot_index(1)
        .build()
        .await?;

    let repo = SpawnedCardRepository::new(db);

    assert!(repo.claim(first.id, 1, Utc::now()).await?);
    assert!(repo.claim(second.id, 2, Utc::now()).await?);
    assert_eq!(repo.get_with_card(first.id).await?.unwrap().slot.claimed_by, Some(1));
    assert_eq!(repo.get_with_card(second.id).await?.unwrap().slot.claimed_by, Some(2));

    Ok(())
}
