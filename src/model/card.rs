//! Catalog card models.

use chrono::{DateTime, Utc};

/// A catalog card as stored in the database.
///
/// One card exists per distinct image path. Every spawn of that file references it.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Unique identifier for the card.
    pub id: i32,
    /// Display name derived from the image filename.
    pub name: String,
    /// Path of the image file the card was created from.
    pub image_path: String,
    /// When the card was first seen.
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Converts an entity model to a card at the data layer boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Card` - The converted domain model
    pub fn from_entity(entity: entity::card::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            image_path: entity.image_path,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for registering a catalog file as a card.
///
/// The name is refreshed if the path is already known.
#[derive(Debug, Clone)]
pub struct UpsertCardParam {
    pub name: String,
    pub image_path: String,
}
