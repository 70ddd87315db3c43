use super::*;

/// Tests registering a new catalog file.
///
/// Expected: Ok with a card carrying the derived name and path
#[tokio::test]
async fn creates_card_for_new_path() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardRepository::new(db);
    let card = repo
        .upsert_by_image_path(UpsertCardParam {
            name: "Awesome Dragon".to_string(),
            image_path: "art/awesome_dragon.png".to_string(),
        })
        .await?;

    assert_eq!(card.name, "Awesome Dragon");
    assert_eq!(card.image_path, "art/awesome_dragon.png");

    Ok(())
}

/// Tests that spawning the same file twice reuses its card row.
///
/// Expected: same id both times, one row in the table, name refreshed
#[tokio::test]
async fn reuses_card_for_known_path() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardRepository::new(db);
    let first = repo
        .upsert_by_image_path(UpsertCardParam {
            name: "Old Name".to_string(),
            image_path: "art/dragon.png".to_string(),
        })
        .await?;
    let second = repo
        .upsert_by_image_path(UpsertCardParam {
            name: "Dragon".to_string(),
            image_path: "art/dragon.png".to_string(),
        })
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "Dragon");
    assert_eq!(entity::prelude::Card::find().count(db).await?, 1);

    Ok(())
}

/// Tests that distinct paths get distinct cards even with equal names.
#[tokio::test]
async fn separates_cards_by_path() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::card::CardFactory::new(db)
        .name("Dragon")
        .image_path("art/dragon.png")
        .build()
        .await?;

    let repo = CardRepository::new(db);
    let card = repo
        .upsert_by_image_path(UpsertCardParam {
            name: "Dragon".to_string(),
            image_path: "art/dragon.jpg".to_string(),
        })
        .await?;

    assert_ne!(card.id, existing.id);
    assert_eq!(entity::prelude::Card::find().count(db).await?, 2);

    Ok(())
}
