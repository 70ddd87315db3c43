use super::*;

/// Tests attaching the spawn message to its slots only.
///
/// Expected: the listed slots get the message id, others are untouched
#[tokio::test]
async fn sets_message_id_on_listed_slots() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;
    let first = factory::create_spawned_card(db, card.id).await?;
    let second = factory::create_spawned_card(db, card.id).await?;
    let other = factory::create_spawned_card(db, card.id).await?;

    let repo = SpawnedCardRepository::new(db);
    let updated = repo.set_message_id(&[first.id, second.id], 777).await?;

    assert_eq!(updated, 2);
    assert_eq!(repo.get_with_card(first.id).await?.unwrap().slot.message_id, Some(777));
    assert_eq!(repo.get_with_card(second.id).await?.unwrap().slot.message_id, Some(777));
    assert_eq!(repo.get_with_card(other.id).await?.unwrap().slot.message_id, None);

    Ok(())
}

#[tokio::test]
async fn ignores_empty_id_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpawnedCardRepository::new(db);

    assert_eq!(repo.set_message_id(&[], 777).await?, 0);

    Ok(())
}
