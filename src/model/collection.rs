//! User collection models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{
    error::{
        internal::{parse_snowflake, InternalError},
        AppError,
    },
    model::rarity::Rarity,
};

/// One `(card, rarity)` identity owned by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionEntry {
    /// Discord user ID of the owner.
    pub user_id: u64,
    pub card_id: i32,
    /// Card name at the time of reading.
    pub card_name: String,
    pub rarity: Rarity,
    /// Number of times this identity was claimed, at least 1.
    pub count: i32,
    pub first_claimed_at: DateTime<Utc>,
    pub last_claimed_at: DateTime<Utc>,
}

impl CollectionEntry {
    /// Converts a user card row and its related card into an entry.
    ///
    /// # Arguments
    /// - `entity` - The user card row
    /// - `card` - The related card row from `find_also_related`
    ///
    /// # Returns
    /// - `Ok(CollectionEntry)` - The converted entry
    /// - `Err(AppError::InternalErr)` - Missing card row or unparseable stored values
    pub fn from_entities(
        entity: entity::user_card::Model,
        card: Option<entity::card::Model>,
    ) -> Result<Self, AppError> {
        let card = card.ok_or_else(|| InternalError::MissingCard {
            card_id: entity.card_id,
            referenced_by: format!("user card {}", entity.id),
        })?;

        Ok(Self {
            user_id: parse_snowflake(&entity.user_id)?,
            card_id: entity.card_id,
            card_name: card.name,
            rarity: entity.rarity.parse()?,
            count: entity.count,
            first_claimed_at: entity.first_claimed_at,
            last_claimed_at: entity.last_claimed_at,
        })
    }
}

/// Totals derived from a collection for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionSummary {
    /// Number of distinct `(card, rarity)` entries.
    pub distinct_entries: usize,
    /// Sum of all entry counts.
    pub total_cards: i64,
    /// Sum of counts per rarity; tiers the user does not own are absent.
    pub per_rarity: BTreeMap<Rarity, i64>,
}

impl CollectionSummary {
    pub fn from_entries(entries: &[CollectionEntry]) -> Self {
        let mut summary = Self {
            distinct_entries: entries.len(),
            ..Default::default()
        };

        for entry in entries {
            summary.total_cards += i64::from(entry.count);
            *summary.per_rarity.entry(entry.rarity).or_default() += i64::from(entry.count);
        }

        summary
    }
}

/// Orders entries rarest first, then by card name.
pub fn sort_entries(entries: &mut [CollectionEntry]) {
    entries.sort_by(|a, b| {
        b.rarity
            .cmp(&a.rarity)
            .then_with(|| a.card_name.cmp(&b.card_name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, rarity: Rarity, count: i32) -> CollectionEntry {
        CollectionEntry {
            user_id: 1,
            card_id: 1,
            card_name: name.to_string(),
            rarity,
            count,
            first_claimed_at: Utc::now(),
            last_claimed_at: Utc::now(),
        }
    }

    #[test]
    fn sorts_rarest_first_then_by_name() {
        let mut entries = vec![
            entry("Zebra", Rarity::Common, 1),
            entry("Dragon", Rarity::Legendary, 1),
            entry("Apple", Rarity::Common, 1),
            entry("Wolf", Rarity::Rare, 1),
        ];

        sort_entries(&mut entries);

        let order: Vec<_> = entries.iter().map(|e| e.card_name.as_str()).collect();
        assert_eq!(order, ["Dragon", "Wolf", "Apple", "Zebra"]);
    }

    #[test]
    fn summarises_counts_per_rarity() {
        let entries = vec![
            entry("A", Rarity::Common, 3),
            entry("B", Rarity::Common, 1),
            entry("C", Rarity::Epic, 2),
        ];

        let summary = CollectionSummary::from_entries(&entries);

        assert_eq!(summary.distinct_entries, 3);
        assert_eq!(summary.total_cards, 6);
        assert_eq!(summary.per_rarity.get(&Rarity::Common), Some(&4));
        assert_eq!(summary.per_rarity.get(&Rarity::Epic), Some(&2));
        assert_eq!(summary.per_rarity.get(&Rarity::Legendary), None);
    }

    #[test]
    fn empty_collection_has_empty_summary() {
        assert_eq!(
            CollectionSummary::from_entries(&[]),
            CollectionSummary::default()
        );
    }
}
