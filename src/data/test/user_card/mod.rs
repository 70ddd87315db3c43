use crate::{data::user_card::UserCardRepository, error::AppError, model::rarity::Rarity};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, user_card::UserCardFactory},
};

mod get_by_user_id;
mod increment;
