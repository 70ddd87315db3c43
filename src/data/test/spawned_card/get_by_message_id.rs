use super::*;

/// Tests rebuilding a spawn from its message id.
///
/// Expected: slots of that message only, in button order
#[tokio::test]
async fn returns_slots_in_button_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;
    for index in [2, 0, 1] {
        SpawnedCardFactory::new(db, card.id)
            .message_id("900")
            .slot_index(index)
            .build()
            .await?;
    }
    SpawnedCardFactory::new(db, card.id)
        .message_id("901")
        .build()
        .await?;

    let repo = SpawnedCardRepository::new(db);
    let slots = repo.get_by_message_id(900).await?;

    let order: Vec<i32> = slots.iter().map(|s| s.slot.slot_index).collect();
    assert_eq!(order, vec![0, 1, 2]);
    assert!(slots.iter().all(|s| s.slot.message_id == Some(900)));
    assert!(slots.iter().all(|s| s.card.id == card.id));

    Ok(())
}

#[tokio::test]
async fn returns_empty_for_unknown_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpawnedCardRepository::new(db);

    assert!(repo.get_by_message_id(123).await?.is_empty());

    Ok(())
}
