//! Annual-cycle orchestration and the simulation facade.
//!
//! [`Simulation`] is the external interface: build it from a map
//! sketch, insert populations, tune parameters, and advance years.
//! The eight phases of a year live in [`cycle`] as free functions
//! over the grid; [`config`] loads run settings from YAML.

pub mod config;
pub mod cycle;
pub mod error;
pub mod simulation;

pub use config::{ConfigError, SimulationConfig};
pub use error::{PopulationError, SimulationError};
pub use simulation::{AnimalSpec, PopulationCounts, PopulationSlice, Simulation};
