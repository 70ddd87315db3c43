use sea_orm::entity::prelude::*;

/// Catalog card, one row per distinct image path.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "card")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub image_path: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::spawned_card::Entity")]
    SpawnedCard,
    #[sea_orm(has_many = "super::user_card::Entity")]
    UserCard,
}

impl Related<super::spawned_card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpawnedCard.def()
    }
}

impl Related<super::user_card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserCard.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
