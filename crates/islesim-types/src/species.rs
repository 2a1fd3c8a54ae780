//! The two species inhabiting the island.

use serde::{Deserialize, Serialize};

/// Species tag carried by every animal. Immutable for its lifetime.
///
/// Herbivores graze the cell's fodder pool; carnivores hunt herbivores.
/// Both share the same lifecycle (aging, weight loss, reproduction,
/// death, migration) and differ only in how they feed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Species {
    /// Grazing prey species.
    Herbivore,
    /// Hunting predator species.
    Carnivore,
}

impl Species {
    /// Both species, in the order the annual phases visit them
    /// (prey before predators).
    pub const ALL: [Self; 2] = [Self::Herbivore, Self::Carnivore];

    /// Parse a species identifier from the textual population interface.
    ///
    /// Returns `None` for anything but the two canonical names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Herbivore" => Some(Self::Herbivore),
            "Carnivore" => Some(Self::Carnivore),
            _ => None,
        }
    }

    /// Canonical name as used by the textual interfaces.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Herbivore => "Herbivore",
            Self::Carnivore => "Carnivore",
        }
    }
}

impl core::fmt::Display for Species {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
