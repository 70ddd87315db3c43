use crate::{
    data::spawned_card::SpawnedCardRepository,
    error::AppError,
    model::{rarity::Rarity, spawned_card::CreateSpawnedCardParam},
};
use chrono::Utc;
use test_utils::{
    builder::TestBuilder,
    factory::{self, spawned_card::SpawnedCardFactory},
};

mod claim;
mod create;
mod get_by_message_id;
mod get_with_card;
mod set_message_id;
