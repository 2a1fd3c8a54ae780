//! Shared type definitions for the Islesim ecosystem simulation.
//!
//! This crate holds the small leaf types every other crate speaks:
//! grid coordinates, the two species tags, and the terrain alphabet.
//! It carries no behaviour beyond lookups and conversions.

pub mod coord;
pub mod species;
pub mod terrain;

pub use coord::{Coord, Direction};
pub use species::Species;
pub use terrain::TerrainKind;
