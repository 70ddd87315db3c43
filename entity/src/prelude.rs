pub use super::card::Entity as Card;
pub use super::spawned_card::Entity as SpawnedCard;
pub use super::user_card::Entity as UserCard;
