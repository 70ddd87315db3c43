//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `crate::model`. They are generic over `ConnectionTrait` so the claim path can run
//! several of them inside one transaction.

pub mod card;
pub mod spawned_card;
pub mod user_card;

#[cfg(test)]
mod test;
