use crate::{data::card::CardRepository, model::card::UpsertCardParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod upsert_by_image_path;
