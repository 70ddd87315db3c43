use sea_orm::entity::prelude::*;

/// Collection entry counting how often a user claimed a card at a given rarity.
///
/// `(user_id, card_id, rarity)` is unique; the index is created by the migration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_card")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: String,
    pub card_id: i32,
    pub rarity: String,
    pub count: i32,
    pub first_claimed_at: DateTimeUtc,
    pub last_claimed_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::card::Entity",
        from = "Column::CardId",
        to = "super::card::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Card,
}

impl Related<super::card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Card.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
