use super::*;

#[tokio::test]
async fn returns_slot_with_card() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::card::CardFactory::new(db)
        .name("Fire Elemental")
        .build()
        .await?;
    let slot = SpawnedCardFactory::new(db, card.id)
        .rarity("legendary")
        .build()
        .await?;

    let repo = SpawnedCardRepository::new(db);
    let result = repo.get_with_card(slot.id).await?;

    assert!(result.is_some());
    let result = result.unwrap();
    assert_eq!(result.slot.id, slot.id);
    assert_eq!(result.slot.rarity, Rarity::Legendary);
    assert_eq!(result.card.name, "Fire Elemental");

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpawnedCardRepository::new(db);

    assert!(repo.get_with_card(9999).await?.is_none());

    Ok(())
}

/// Tests that a corrupt rarity column surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_rarity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;
    let slot = SpawnedCardFactory::new(db, card.id)
        .rarity("mythic")
        .build()
        .await?;

    let repo = SpawnedCardRepository::new(db);
    let result = repo.get_with_card(slot.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
