//! SeaORM entity models for the card collection schema.
//!
//! Tables are created by the `migration` crate; these models mirror them column for
//! column. Discord snowflakes are stored as strings.

pub mod prelude;

pub mod card;
pub mod spawned_card;
pub mod user_card;
