//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields
//! they care about. Each entity has a `Factory` builder for customisation and a
//! `create_*` shorthand for default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let card = factory::create_card(&db).await?;
//! let slot = factory::create_spawned_card(&db, card.id).await?;
//!
//! let claimed = factory::spawned_card::SpawnedCardFactory::new(&db, card.id)
//!     .rarity("legendary")
//!     .claimed_by("123456789")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `card` - Catalog card rows
//! - `spawned_card` - Spawned slots, claimed or unclaimed
//! - `user_card` - Collection entries
//! - `helpers` - Unique ids and multi-entity helpers

pub mod card;
pub mod helpers;
pub mod spawned_card;
pub mod user_card;

pub use card::create_card;
pub use spawned_card::create_spawned_card;
pub use user_card::create_user_card;
