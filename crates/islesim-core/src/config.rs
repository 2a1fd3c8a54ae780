//! YAML configuration for a simulation run.
//!
//! A config file can seed the random number generator, cap the run
//! length, and override species and terrain parameters before any
//! animals are inserted:
//!
//! ```yaml
//! seed: 42
//! years: 200
//! herbivore:
//!   beta: 0.85
//!   F: 12.0
//! carnivore:
//!   DeltaPhiMax: 9.0
//! terrain:
//!   L:
//!     f_max: 700.0
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading or parsing a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid YAML for this schema.
    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yml::Error),
}

/// Run-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    /// Seed for the simulation's random number generator.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of years to simulate, if the run length is fixed up
    /// front.
    #[serde(default)]
    pub years: Option<u64>,

    /// Herbivore parameter overrides, keyed by parameter name.
    #[serde(default)]
    pub herbivore: BTreeMap<String, f64>,

    /// Carnivore parameter overrides, keyed by parameter name.
    #[serde(default)]
    pub carnivore: BTreeMap<String, f64>,

    /// Terrain parameter overrides, keyed by terrain code then
    /// parameter name.
    #[serde(default)]
    pub terrain: BTreeMap<char, BTreeMap<String, f64>>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            years: None,
            herbivore: BTreeMap::new(),
            carnivore: BTreeMap::new(),
            terrain: BTreeMap::new(),
        }
    }
}

const fn default_seed() -> u64 {
    12_345
}

impl SimulationConfig {
    /// Load a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    /// Parse a configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Yaml`] if the string does not parse.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(raw)?)
    }
}
