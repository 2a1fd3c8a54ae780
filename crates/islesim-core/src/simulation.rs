//! The simulation facade: owns the grid, the parameter sets, and the
//! random number generator, and exposes the external interface.

use std::collections::BTreeMap;

use islesim_fauna::{Animal, SpeciesParams};
use islesim_types::{Coord, Species, TerrainKind};
use islesim_world::{Grid, TerrainTable, parse_map};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SimulationConfig;
use crate::cycle;
use crate::error::{PopulationError, SimulationError};

/// One animal of an insertion request.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimalSpec {
    /// Species name, exactly `Herbivore` or `Carnivore`.
    pub species: String,
    /// Age in years, non-negative.
    pub age: i64,
    /// Weight, finite and strictly positive.
    pub weight: f64,
}

/// A batch of animals destined for one cell.
#[derive(Debug, Clone, Deserialize)]
pub struct PopulationSlice {
    /// One-based `(row, col)` location on the map.
    pub loc: (usize, usize),
    /// The animals to place there.
    pub animals: Vec<AnimalSpec>,
}

/// Animal counts split by species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PopulationCounts {
    /// Living herbivores.
    pub herbivores: usize,
    /// Living carnivores.
    pub carnivores: usize,
}

impl PopulationCounts {
    /// Total across both species.
    pub const fn total(&self) -> usize {
        self.herbivores + self.carnivores
    }
}

/// A running ecosystem simulation.
///
/// All randomness flows through the single seeded generator held here,
/// so two simulations built with the same map, seed, and inputs evolve
/// identically.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    herbivore_params: SpeciesParams,
    carnivore_params: SpeciesParams,
    terrain: TerrainTable,
    rng: StdRng,
    year: u64,
}

impl Simulation {
    /// Build a simulation from a map sketch and an RNG seed, with
    /// default parameters everywhere.
    ///
    /// # Errors
    ///
    /// Any [`islesim_world::WorldError`] the map parser raises.
    pub fn new(map_sketch: &str, seed: u64) -> Result<Self, SimulationError> {
        let grid = parse_map(map_sketch)?;
        Ok(Self {
            grid,
            herbivore_params: SpeciesParams::defaults_for(Species::Herbivore),
            carnivore_params: SpeciesParams::defaults_for(Species::Carnivore),
            terrain: TerrainTable::default(),
            rng: StdRng::seed_from_u64(seed),
            year: 0,
        })
    }

    /// Build a simulation from a map sketch and a parsed configuration,
    /// applying its parameter overrides.
    ///
    /// # Errors
    ///
    /// Map errors as in [`Simulation::new`], plus any rejection of a
    /// configured parameter override.
    pub fn from_config(
        map_sketch: &str,
        config: &SimulationConfig,
    ) -> Result<Self, SimulationError> {
        let mut sim = Self::new(map_sketch, config.seed)?;
        if !config.herbivore.is_empty() {
            sim.set_species_params(Species::Herbivore, &config.herbivore)?;
        }
        if !config.carnivore.is_empty() {
            sim.set_species_params(Species::Carnivore, &config.carnivore)?;
        }
        for (&code, updates) in &config.terrain {
            sim.set_terrain_params(code, updates)?;
        }
        Ok(sim)
    }

    /// Replace one species' parameter set with a validated update.
    ///
    /// # Errors
    ///
    /// [`islesim_fauna::FaunaError`] for an unknown name or an
    /// out-of-domain value; on error nothing changes.
    pub fn set_species_params(
        &mut self,
        species: Species,
        updates: &BTreeMap<String, f64>,
    ) -> Result<(), SimulationError> {
        let next = match species {
            Species::Herbivore => &mut self.herbivore_params,
            Species::Carnivore => &mut self.carnivore_params,
        };
        *next = next.with_updates(updates)?;
        Ok(())
    }

    /// Replace one terrain kind's parameters with a validated update,
    /// addressed by its map code.
    ///
    /// # Errors
    ///
    /// [`SimulationError::UnknownTerrainCode`] for a code outside
    /// `WDHL`; otherwise any [`islesim_world::WorldError`] the update
    /// raises. On error nothing changes.
    pub fn set_terrain_params(
        &mut self,
        code: char,
        updates: &BTreeMap<String, f64>,
    ) -> Result<(), SimulationError> {
        let kind =
            TerrainKind::from_code(code).ok_or(SimulationError::UnknownTerrainCode(code))?;
        self.terrain = self.terrain.with_updates(kind, updates)?;
        Ok(())
    }

    /// Insert a population described in the external one-based
    /// coordinate convention.
    ///
    /// The whole batch is validated before any animal is placed: a
    /// single bad location, species name, age, or weight rejects the
    /// entire request and leaves the island untouched.
    ///
    /// # Errors
    ///
    /// [`PopulationError`] describing the first offending entry.
    pub fn insert_population(
        &mut self,
        slices: &[PopulationSlice],
    ) -> Result<(), SimulationError> {
        let mut placements: Vec<(Coord, Animal)> = Vec::new();
        for slice in slices {
            let coord = self.resolve_location(slice.loc)?;
            for spec in &slice.animals {
                let species = Species::parse(&spec.species).ok_or_else(|| {
                    PopulationError::UnknownSpecies {
                        name: spec.species.clone(),
                    }
                })?;
                let age = u32::try_from(spec.age)
                    .map_err(|_| PopulationError::InvalidAge { age: spec.age })?;
                if !spec.weight.is_finite() || spec.weight <= 0.0 {
                    return Err(PopulationError::InvalidWeight {
                        weight: spec.weight,
                    }
                    .into());
                }
                let params = self.params_for(species);
                let animal = Animal::with_state(species, age, spec.weight, params)?;
                placements.push((coord, animal));
            }
        }

        for (coord, animal) in placements {
            if let Some(cell) = self.grid.get_mut(coord) {
                cell.push_resident(animal);
            }
        }
        Ok(())
    }

    /// Translate a one-based external location into an internal
    /// coordinate, verifying bounds and accessibility.
    fn resolve_location(&self, loc: (usize, usize)) -> Result<Coord, PopulationError> {
        let (row, col) = loc;
        let coord = row
            .checked_sub(1)
            .zip(col.checked_sub(1))
            .map(|(r, c)| Coord::new(r, c))
            .ok_or(PopulationError::OutOfBounds { row, col })?;
        let cell = self
            .grid
            .get(coord)
            .ok_or(PopulationError::OutOfBounds { row, col })?;
        if !cell.is_accessible() {
            return Err(PopulationError::InaccessibleLocation { row, col });
        }
        Ok(coord)
    }

    const fn params_for(&self, species: Species) -> &SpeciesParams {
        match species {
            Species::Herbivore => &self.herbivore_params,
            Species::Carnivore => &self.carnivore_params,
        }
    }

    /// Completed simulation years.
    pub const fn year(&self) -> u64 {
        self.year
    }

    /// Total living animals on the island.
    pub fn num_animals(&self) -> usize {
        self.num_animals_per_species().total()
    }

    /// Living animals split by species.
    pub fn num_animals_per_species(&self) -> PopulationCounts {
        let mut counts = PopulationCounts::default();
        for (_, cell) in self.grid.cells() {
            counts.herbivores += cell.count(Species::Herbivore);
            counts.carnivores += cell.count(Species::Carnivore);
        }
        counts
    }

    /// Census of the single cell at a one-based `(row, col)` location,
    /// or `None` when the location is off the map.
    pub fn counts_at(&self, loc: (usize, usize)) -> Option<PopulationCounts> {
        let (row, col) = loc;
        let coord = Coord::new(row.checked_sub(1)?, col.checked_sub(1)?);
        self.grid.get(coord).map(|cell| PopulationCounts {
            herbivores: cell.count(Species::Herbivore),
            carnivores: cell.count(Species::Carnivore),
        })
    }

    /// Per-cell census keyed by one-based `(row, col)`. Cells with no
    /// animals are included, so the key set is the whole map.
    pub fn cell_counts(&self) -> BTreeMap<(usize, usize), PopulationCounts> {
        self.grid
            .cells()
            .map(|(coord, cell)| {
                (
                    (coord.row + 1, coord.col + 1),
                    PopulationCounts {
                        herbivores: cell.count(Species::Herbivore),
                        carnivores: cell.count(Species::Carnivore),
                    },
                )
            })
            .collect()
    }

    /// Read access to the island grid.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Phase 1: fodder regrowth.
    pub fn regrow(&mut self) {
        cycle::regrowth_phase(&mut self.grid, &self.terrain);
    }

    /// Phase 2: herbivore feeding.
    pub fn feed_herbivores(&mut self) {
        cycle::prey_feeding_phase(&mut self.grid, &self.herbivore_params);
    }

    /// Phase 3: carnivore feeding.
    pub fn feed_carnivores(&mut self) {
        cycle::predator_feeding_phase(&mut self.grid, &self.carnivore_params, &mut self.rng);
    }

    /// Phase 4: reproduction.
    pub fn reproduce(&mut self) {
        cycle::reproduction_phase(
            &mut self.grid,
            &self.herbivore_params,
            &self.carnivore_params,
            &mut self.rng,
        );
    }

    /// Phase 5: migration.
    pub fn migrate(&mut self) {
        cycle::migration_phase(
            &mut self.grid,
            &self.herbivore_params,
            &self.carnivore_params,
            &mut self.rng,
        );
    }

    /// Phase 6: aging.
    pub fn age_population(&mut self) {
        cycle::aging_phase(&mut self.grid, &self.herbivore_params, &self.carnivore_params);
    }

    /// Phase 7: annual weight loss.
    pub fn apply_weight_loss(&mut self) {
        cycle::weight_loss_phase(
            &mut self.grid,
            &self.herbivore_params,
            &self.carnivore_params,
        );
    }

    /// Phase 8: death.
    pub fn apply_deaths(&mut self) {
        cycle::death_phase(
            &mut self.grid,
            &self.herbivore_params,
            &self.carnivore_params,
            &mut self.rng,
        );
    }

    /// Run one full year: all eight phases in their fixed order.
    pub fn advance_year(&mut self) {
        self.regrow();
        self.feed_herbivores();
        self.feed_carnivores();
        self.reproduce();
        self.migrate();
        self.age_population();
        self.apply_weight_loss();
        self.apply_deaths();
        self.year += 1;

        let counts = self.num_animals_per_species();
        info!(
            year = self.year,
            herbivores = counts.herbivores,
            carnivores = counts.carnivores,
            "year complete"
        );
    }

    /// Run `years` full annual cycles.
    pub fn simulate(&mut self, years: u64) {
        for _ in 0..years {
            self.advance_year();
        }
    }
}
