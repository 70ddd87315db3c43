use super::*;

/// Tests the first claim of a card identity.
///
/// Expected: entry created with count 1
#[tokio::test]
async fn creates_entry_with_count_one() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;

    let repo = UserCardRepository::new(db);
    let count = repo.increment(42, card.id, Rarity::Rare, Utc::now()).await?;

    assert_eq!(count, 1);
    assert_eq!(entity::prelude::UserCard::find().count(db).await?, 1);

    Ok(())
}

/// Tests repeated claims of the same identity.
///
/// Expected: one entry whose count grows and whose last claim time moves forward
#[tokio::test]
async fn increments_existing_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;
    let first_at = Utc::now() - Duration::hours(1);
    let second_at = Utc::now();

    let repo = UserCardRepository::new(db);
    assert_eq!(repo.increment(42, card.id, Rarity::Rare, first_at).await?, 1);
    assert_eq!(repo.increment(42, card.id, Rarity::Rare, second_at).await?, 2);

    let entries = repo.get_by_user_id(42).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].count, 2);
    assert!(entries[0].last_claimed_at > entries[0].first_claimed_at);

    Ok(())
}

/// Tests that rarity and user are part of the entry identity.
///
/// Expected: separate entries per rarity and per user
#[tokio::test]
async fn separates_entries_by_rarity_and_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;

    let repo = UserCardRepository::new(db);
    repo.increment(42, card.id, Rarity::Common, Utc::now()).await?;
    repo.increment(42, card.id, Rarity::Legendary, Utc::now()).await?;
    repo.increment(43, card.id, Rarity::Common, Utc::now()).await?;

    assert_eq!(entity::prelude::UserCard::find().count(db).await?, 3);
    assert_eq!(repo.get_by_user_id(42).await?.len(), 2);
    assert_eq!(repo.get_by_user_id(43).await?.len(), 1);

    Ok(())
}

/// Tests incrementing an entry created elsewhere.
#[tokio::test]
async fn increments_factory_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;
    UserCardFactory::new(db, "42", card.id)
        .rarity("epic")
        .count(4)
        .build()
        .await?;

    let repo = UserCardRepository::new(db);

    assert_eq!(repo.increment(42, card.id, Rarity::Epic, Utc::now()).await?, 5);

    Ok(())
}
