use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_card_table::Card;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserCard::Table)
                    .if_not_exists()
                    .col(pk_auto(UserCard::Id))
                    .col(string(UserCard::UserId))
                    .col(integer(UserCard::CardId))
                    .col(string(UserCard::Rarity))
                    .col(integer(UserCard::Count).default(0))
                    .col(timestamp(UserCard::FirstClaimedAt))
                    .col(timestamp(UserCard::LastClaimedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_card_card_id")
                            .from(UserCard::Table, UserCard::CardId)
                            .to(Card::Table, Card::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One collection entry per user, card and rarity; claims upsert against it
        manager
            .create_index(
                Index::create()
                    .name("idx_user_card_unique")
                    .table(UserCard::Table)
                    .col(UserCard::UserId)
                    .col(UserCard::CardId)
                    .col(UserCard::Rarity)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_card_unique")
                    .table(UserCard::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserCard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserCard {
    Table,
    Id,
    UserId,
    CardId,
    Rarity,
    Count,
    FirstClaimedAt,
    LastClaimedAt,
}
