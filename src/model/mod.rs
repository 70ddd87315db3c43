//! Domain models shared by the data, service and bot layers.
//!
//! Entity models from the `entity` crate are converted into these types at the data
//! layer boundary so services and Discord handlers never depend on column layouts.

pub mod card;
pub mod catalog;
pub mod claim;
pub mod collection;
pub mod rarity;
pub mod spawn;
pub mod spawned_card;
