use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a Discord snowflake stored as a String.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A rarity column holds a value outside the five known tiers.
    #[error("Unknown rarity '{0}'")]
    UnknownRarity(String),

    /// A spawned slot or collection entry references a card row that does not exist.
    #[error("Card {card_id} referenced by {referenced_by} does not exist")]
    MissingCard {
        /// The dangling card id
        card_id: i32,
        /// Human-readable description of the referencing row
        referenced_by: String,
    },
}

/// Parses a Discord snowflake stored as a string column.
///
/// # Arguments
/// - `value` - The stored string
///
/// # Returns
/// - `Ok(u64)` - The parsed snowflake
/// - `Err(InternalError::ParseStringId)` - The column did not contain a number
pub fn parse_snowflake(value: &str) -> Result<u64, InternalError> {
    value
        .parse::<u64>()
        .map_err(|source| InternalError::ParseStringId {
            value: value.to_string(),
            source,
        })
}
