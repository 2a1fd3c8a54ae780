//! The island world: terrain grid, fodder, and per-cell population
//! dynamics.
//!
//! - [`loader`] parses a textual map sketch into a [`Grid`];
//! - [`grid`] holds the rectangular cell layout and bounds checks;
//! - [`cell`] owns residents and runs the single-cell phase logic;
//! - [`terrain`] carries the tunable per-terrain parameters;
//! - [`error`] collects the map and parameter failure modes.

pub mod cell;
pub mod error;
pub mod grid;
pub mod loader;
pub mod terrain;

pub use cell::Cell;
pub use error::WorldError;
pub use grid::Grid;
pub use loader::parse_map;
pub use terrain::{TerrainParams, TerrainTable};
