//! The terrain alphabet: four cell kinds and their map codes.
//!
//! Terrain determines two things only: whether animals may occupy the
//! cell, and (through the world crate's parameter table) how much
//! fodder regrows there each year. There is no further behavioural
//! polymorphism; a kind is a tag plus a lookup.

use serde::{Deserialize, Serialize};

/// The kind of terrain in one grid cell. Fixed at map load.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TerrainKind {
    /// Impassable. Forms the mandatory outer border of every map.
    Water,
    /// Passable, but nothing grows here.
    Desert,
    /// Passable with sparse fodder growth.
    Highland,
    /// Passable with rich fodder growth.
    Lowland,
}

impl TerrainKind {
    /// All four kinds.
    pub const ALL: [Self; 4] = [Self::Water, Self::Desert, Self::Highland, Self::Lowland];

    /// Decode a single map character, or `None` if the character is not
    /// part of the terrain alphabet.
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'W' => Some(Self::Water),
            'D' => Some(Self::Desert),
            'H' => Some(Self::Highland),
            'L' => Some(Self::Lowland),
            _ => None,
        }
    }

    /// The map character for this kind.
    pub const fn code(self) -> char {
        match self {
            Self::Water => 'W',
            Self::Desert => 'D',
            Self::Highland => 'H',
            Self::Lowland => 'L',
        }
    }

    /// Whether animals may occupy cells of this kind.
    pub const fn is_accessible(self) -> bool {
        !matches!(self, Self::Water)
    }
}

impl core::fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Water => f.write_str("water"),
            Self::Desert => f.write_str("desert"),
            Self::Highland => f.write_str("highland"),
            Self::Lowland => f.write_str("lowland"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for kind in TerrainKind::ALL {
            assert_eq!(TerrainKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn unknown_codes_rejected() {
        assert_eq!(TerrainKind::from_code('X'), None);
        assert_eq!(TerrainKind::from_code('w'), None);
        assert_eq!(TerrainKind::from_code(' '), None);
    }

    #[test]
    fn only_water_is_impassable() {
        assert!(!TerrainKind::Water.is_accessible());
        assert!(TerrainKind::Desert.is_accessible());
        assert!(TerrainKind::Highland.is_accessible());
        assert!(TerrainKind::Lowland.is_accessible());
    }
}
