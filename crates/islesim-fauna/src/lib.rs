//! Animal state and the species rule set for the Islesim simulation.
//!
//! This crate implements everything that happens to one individual:
//! fitness, feeding (grazing and predation), reproduction, the annual
//! death test, and the migration proposal. The world crate drives these
//! rules per cell; the core crate drives cells per year.
//!
//! # Modules
//!
//! - [`animal`] -- the [`Animal`] state record and its fitness-preserving
//!   mutations.
//! - [`params`] -- [`SpeciesParams`]: the named, atomically validated
//!   coefficient set for one species.
//! - [`feeding`] -- herbivore grazing and the carnivore predation loop.
//! - [`reproduction`] -- birth attempts and birth-weight sampling.
//! - [`death`] -- the annual stochastic death test.
//! - [`migration`] -- the migration proposal (a pure read; relocation is
//!   the grid's job).
//! - [`error`] -- error types for parameter and state validation.
//!
//! All stochastic decisions draw from an explicit `&mut impl Rng` handed
//! down by the caller; nothing in this crate touches ambient randomness.

pub mod animal;
pub mod death;
pub mod error;
pub mod feeding;
pub mod migration;
pub mod params;
pub mod reproduction;

pub use animal::Animal;
pub use error::FaunaError;
pub use params::SpeciesParams;
