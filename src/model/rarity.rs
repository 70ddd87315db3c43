//! Rarity tiers and the draw that assigns them.

use std::{fmt, str::FromStr};

use rand::Rng;

use crate::error::internal::InternalError;

/// Upper bound (exclusive) of a rarity draw.
pub const DRAW_RANGE: u32 = 100;

/// Rarity tier of a spawned slot, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// All tiers, most common first.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Maps a draw in `[0, 100)` to a tier using cumulative bands.
    ///
    /// Common `[0,50)`, Uncommon `[50,80)`, Rare `[80,95)`, Epic `[95,99)`,
    /// Legendary `[99,100)`. Draws past the range saturate to Legendary.
    ///
    /// # Arguments
    /// - `draw` - Uniform integer drawn from `0..DRAW_RANGE`
    ///
    /// # Returns
    /// - `Rarity` - The tier whose band contains the draw
    pub fn from_draw(draw: u32) -> Self {
        match draw {
            0..50 => Rarity::Common,
            50..80 => Rarity::Uncommon,
            80..95 => Rarity::Rare,
            95..99 => Rarity::Epic,
            _ => Rarity::Legendary,
        }
    }

    /// Draws a tier from the provided random source.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_draw(rng.random_range(0..DRAW_RANGE))
    }

    /// Lower-case name as stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Embed color as a `0xRRGGBB` value.
    pub fn color(self) -> u32 {
        match self {
            Rarity::Common => 0x808080,
            Rarity::Uncommon => 0x00ff00,
            Rarity::Rare => 0x0080ff,
            Rarity::Epic => 0x8000ff,
            Rarity::Legendary => 0xffd700,
        }
    }

    /// Color split into its red, green and blue channels.
    pub fn rgb(self) -> (u8, u8, u8) {
        let color = self.color();
        (
            ((color >> 16) & 0xff) as u8,
            ((color >> 8) & 0xff) as u8,
            (color & 0xff) as u8,
        )
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Rarity::Common => "⚪",
            Rarity::Uncommon => "🟢",
            Rarity::Rare => "🔵",
            Rarity::Epic => "🟣",
            Rarity::Legendary => "🟡",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Rarity {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|rarity| rarity.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InternalError::UnknownRarity(s.to_string()))
    }
}
