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
                    .table(SpawnedCard::Table)
                    .if_not_exists()
                    .col(pk_auto(SpawnedCard::Id))
                    .col(integer(SpawnedCard::CardId))
                    .col(string(SpawnedCard::Rarity))
                    .col(string(SpawnedCard::ChannelId))
                    .col(string_null(SpawnedCard::MessageId))
                    .col(integer(SpawnedCard::SlotIndex))
                    .col(
                        timestamp(SpawnedCard::SpawnedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_null(SpawnedCard::ClaimedBy))
                    .col(timestamp_null(SpawnedCard::ClaimedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_spawned_card_card_id")
                            .from(SpawnedCard::Table, SpawnedCard::CardId)
                            .to(Card::Table, Card::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Buttons on a spawn message are resolved back to their slots by message id
        manager
            .create_index(
                Index::create()
                    .name("idx_spawned_card_message_id")
                    .table(SpawnedCard::Table)
                    .col(SpawnedCard::MessageId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_spawned_card_message_id")
                    .table(SpawnedCard::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SpawnedCard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SpawnedCard {
    Table,
    Id,
    CardId,
    Rarity,
    ChannelId,
    MessageId,
    SlotIndex,
    SpawnedAt,
    ClaimedBy,
    ClaimedAt,
}
