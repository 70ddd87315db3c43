use std::collections::HashSet;

use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, spawned_card::SpawnedCardFactory},
};
use tokio::task::JoinSet;

use crate::{
    error::AppError,
    model::{claim::ClaimOutcome, rarity::Rarity},
    service::{claim::ClaimService, collection::CollectionService},
};

/// Tests claiming an unclaimed slot.
///
/// Expected: Claimed with count 1, slot owned by the claimer
#[tokio::test]
async fn claims_unclaimed_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;
    let slot = SpawnedCardFactory::new(db, card.id)
        .rarity("epic")
        .build()
        .await?;

    let outcome = ClaimService::new(db).claim(slot.id, 42).await?;

    match outcome {
        ClaimOutcome::Claimed { slot: claimed, count } => {
            assert_eq!(count, 1);
            assert_eq!(claimed.slot.claimed_by, Some(42));
            assert_eq!(claimed.slot.rarity, Rarity::Epic);
            assert_eq!(claimed.card.id, card.id);
        }
        other => panic!("expected Claimed, got {:?}", other),
    }

    Ok(())
}

/// Tests a second claim on the same slot.
///
/// Expected: AlreadyClaimed naming the first claimer, collection untouched
#[tokio::test]
async fn rejects_second_claim() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, slot) = factory::helpers::create_spawn_with_dependencies(db).await?;

    let service = ClaimService::new(db);
    service.claim(slot.id, 1).await?;
    let outcome = service.claim(slot.id, 2).await?;

    assert!(matches!(
        outcome,
        ClaimOutcome::AlreadyClaimed { owner: 1, .. }
    ));
    assert!(CollectionService::new(db)
        .get_user_collection(2)
        .await?
        .is_empty());
    assert_eq!(entity::prelude::UserCard::find().count(db).await?, 1);

    Ok(())
}

/// Tests the same user clicking twice.
///
/// Expected: second click is rejected and the count stays at 1
#[tokio::test]
async fn does_not_credit_same_user_twice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, slot) = factory::helpers::create_spawn_with_dependencies(db).await?;

    let service = ClaimService::new(db);
    service.claim(slot.id, 1).await?;
    let outcome = service.claim(slot.id, 1).await?;

    assert!(matches!(
        outcome,
        ClaimOutcome::AlreadyClaimed { owner: 1, .. }
    ));
    let collection = CollectionService::new(db).get_user_collection(1).await?;
    assert_eq!(collection[0].count, 1);

    Ok(())
}

#[tokio::test]
async fn returns_not_found_for_unknown_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = ClaimService::new(db).claim(9999, 1).await?;

    assert_eq!(outcome, ClaimOutcome::NotFound);
    assert_eq!(entity::prelude::UserCard::find().count(db).await?, 0);

    Ok(())
}

/// Tests many users racing for one slot.
///
/// Expected: exactly one Claimed, every other attempt AlreadyClaimed naming the winner,
/// and a single collection entry with count 1
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn resolves_concurrent_claims_to_single_winner() -> Result<(), AppError> {
    const CLAIMERS: u64 = 16;

    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, slot) = factory::helpers::create_spawn_with_dependencies(db).await?;

    let mut tasks = JoinSet::new();
    for user_id in 1..=CLAIMERS {
        let db = db.clone();
        let slot_id = slot.id;
        tasks.spawn(async move { ClaimService::new(&db).claim(slot_id, user_id).await });
    }

    let mut winners = Vec::new();
    let mut owners = HashSet::new();
    let mut rejections = 0;
    while let Some(result) = tasks.join_next().await {
        match result?? {
            ClaimOutcome::Claimed { slot, count } => {
                assert_eq!(count, 1);
                winners.push(slot.slot.claimed_by);
            }
            ClaimOutcome::AlreadyClaimed { owner, .. } => {
                rejections += 1;
                owners.insert(owner);
            }
            ClaimOutcome::NotFound => panic!("slot disappeared"),
        }
    }

    assert_eq!(winners.len(), 1);
    assert_eq!(rejections, CLAIMERS - 1);
    let winner = winners[0].unwrap();
    assert_eq!(owners, HashSet::from([winner]));

    let entries = entity::prelude::UserCard::find().all(db).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user_id, winner.to_string());
    assert_eq!(entries[0].count, 1);

    Ok(())
}

/// Tests that sibling slots of one spawn can be won by different users.
#[tokio::test]
async fn claims_sibling_slots_independently() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;
    let first = SpawnedCardFactory::new(db, card.id)
        .message_id("10")
        .slot_index(0)
        .build()
        .await?;
    let second = SpawnedCardFactory::new(db, card.id)
        .message_id("10")
        .slot_index(1)
        .build()
        .await?;

    let service = ClaimService::new(db);

    assert!(matches!(
        service.claim(first.id, 1).await?,
        ClaimOutcome::Claimed { .. }
    ));
    assert!(matches!(
        service.claim(second.id, 2).await?,
        ClaimOutcome::Claimed { .. }
    ));

    Ok(())
}
