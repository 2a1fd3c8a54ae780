//! Top-level error types for the simulation facade.

use islesim_fauna::FaunaError;
use islesim_world::WorldError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while validating a population insertion request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PopulationError {
    /// A species name that is neither `Herbivore` nor `Carnivore`.
    #[error("unknown species '{name}'")]
    UnknownSpecies {
        /// The rejected species name.
        name: String,
    },

    /// A one-based location outside the map.
    #[error("location ({row}, {col}) is outside the map")]
    OutOfBounds {
        /// One-based row as given by the caller.
        row: usize,
        /// One-based column as given by the caller.
        col: usize,
    },

    /// A location whose terrain does not admit animals.
    #[error("location ({row}, {col}) is water and cannot hold animals")]
    InaccessibleLocation {
        /// One-based row as given by the caller.
        row: usize,
        /// One-based column as given by the caller.
        col: usize,
    },

    /// A negative or otherwise unrepresentable age.
    #[error("invalid age {age}: must be a non-negative integer")]
    InvalidAge {
        /// The rejected age.
        age: i64,
    },

    /// A weight that is not finite and strictly positive.
    #[error("invalid weight {weight}: must be finite and strictly positive")]
    InvalidWeight {
        /// The rejected weight.
        weight: f64,
    },
}

/// Any failure the simulation facade can report.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A species parameter update was rejected.
    #[error(transparent)]
    Fauna(#[from] FaunaError),

    /// Map parsing or a terrain parameter update failed.
    #[error(transparent)]
    World(#[from] WorldError),

    /// A population insertion request was rejected.
    #[error(transparent)]
    Population(#[from] PopulationError),

    /// Loading or parsing a configuration file failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A terrain code used to address a parameter update is unknown.
    #[error("unknown terrain code '{0}'")]
    UnknownTerrainCode(char),
}
