use super::*;

#[tokio::test]
async fn returns_empty_for_user_without_claims() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserCardRepository::new(db);

    assert!(repo.get_by_user_id(42).await?.is_empty());

    Ok(())
}

/// Tests reading entries with their card names.
///
/// Expected: only the requested user's entries, carrying card name and rarity
#[tokio::test]
async fn returns_entries_with_card_names() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dragon = factory::card::CardFactory::new(db)
        .name("Awesome Dragon")
        .build()
        .await?;
    let other = factory::create_card(db).await?;
    UserCardFactory::new(db, "42", dragon.id)
        .rarity("rare")
        .count(3)
        .build()
        .await?;
    factory::create_user_card(db, "43", other.id).await?;

    let repo = UserCardRepository::new(db);
    let entries = repo.get_by_user_id(42).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user_id, 42);
    assert_eq!(entries[0].card_name, "Awesome Dragon");
    assert_eq!(entries[0].rarity, Rarity::Rare);
    assert_eq!(entries[0].count, 3);

    Ok(())
}
