//! The eight phases of one simulated year, in their fixed order:
//! regrowth, herbivore feeding, carnivore feeding, reproduction,
//! migration, aging, weight loss, death.
//!
//! Each phase is a free function over the whole grid so the ordering
//! is decided in exactly one place, [`crate::Simulation::advance_year`].

use islesim_fauna::{SpeciesParams, migration::propose_move};
use islesim_types::{Coord, Species};
use islesim_world::{Grid, TerrainTable};
use rand::Rng;
use tracing::debug;

/// Reset every cell's fodder pool to its terrain's annual ceiling.
pub fn regrowth_phase(grid: &mut Grid, terrain: &TerrainTable) {
    for (_, cell) in grid.cells_mut() {
        cell.regrow(terrain.f_max(cell.terrain()));
    }
}

/// Herbivores graze, cell by cell.
pub fn prey_feeding_phase(grid: &mut Grid, herbivore_params: &SpeciesParams) {
    for (_, cell) in grid.cells_mut() {
        cell.feed_herbivores(herbivore_params);
    }
}

/// Carnivores hunt, cell by cell.
pub fn predator_feeding_phase(
    grid: &mut Grid,
    carnivore_params: &SpeciesParams,
    rng: &mut impl Rng,
) {
    for coord in grid.coords() {
        if let Some(cell) = grid.get_mut(coord) {
            cell.feed_carnivores(carnivore_params, rng);
        }
    }
}

/// Both species procreate, cell by cell.
pub fn reproduction_phase(
    grid: &mut Grid,
    herbivore_params: &SpeciesParams,
    carnivore_params: &SpeciesParams,
    rng: &mut impl Rng,
) {
    for coord in grid.coords() {
        if let Some(cell) = grid.get_mut(coord) {
            cell.procreate(herbivore_params, carnivore_params, rng);
        }
    }
}

/// A committed relocation: the resident at `index` of `species` in the
/// cell at `from` moves to `to`.
struct PendingMove {
    from: Coord,
    to: Coord,
    species: Species,
    index: usize,
}

/// Migration, as a two-step barrier.
///
/// First every animal's proposal is collected against the pre-phase
/// grid state; proposals aimed at water or off the map are discarded
/// on the spot, leaving those animals in place. Then the survivors are
/// committed into per-cell arrival buffers, and only once every move
/// is committed do the buffers merge into the resident lists. An
/// animal therefore moves at most one cell per year and never migrates
/// twice by being re-seen in its destination.
pub fn migration_phase(
    grid: &mut Grid,
    herbivore_params: &SpeciesParams,
    carnivore_params: &SpeciesParams,
    rng: &mut impl Rng,
) {
    let mut moves: Vec<PendingMove> = Vec::new();
    for coord in grid.coords() {
        let Some(cell) = grid.get(coord) else {
            continue;
        };
        for species in Species::ALL {
            let params = match species {
                Species::Herbivore => herbivore_params,
                Species::Carnivore => carnivore_params,
            };
            for (index, animal) in cell.residents(species).iter().enumerate() {
                let Some(to) = propose_move(animal, coord, params, rng) else {
                    continue;
                };
                if grid.is_accessible(to) {
                    moves.push(PendingMove {
                        from: coord,
                        to,
                        species,
                        index,
                    });
                }
            }
        }
    }

    debug!(moves = moves.len(), "committing migrations");

    // Indices were collected ascending per cell and species, so
    // committing in reverse keeps every remaining index valid.
    for mv in moves.iter().rev() {
        let migrant = grid
            .get_mut(mv.from)
            .and_then(|cell| cell.take_resident(mv.species, mv.index));
        if let (Some(animal), Some(dest)) = (migrant, grid.get_mut(mv.to)) {
            dest.receive_migrant(animal);
        }
    }

    for (_, cell) in grid.cells_mut() {
        cell.absorb_incoming();
    }
}

/// Every animal ages one year.
pub fn aging_phase(
    grid: &mut Grid,
    herbivore_params: &SpeciesParams,
    carnivore_params: &SpeciesParams,
) {
    for (_, cell) in grid.cells_mut() {
        cell.age_residents(herbivore_params, carnivore_params);
    }
}

/// Every animal pays the annual weight loss.
pub fn weight_loss_phase(
    grid: &mut Grid,
    herbivore_params: &SpeciesParams,
    carnivore_params: &SpeciesParams,
) {
    for (_, cell) in grid.cells_mut() {
        cell.apply_weight_loss(herbivore_params, carnivore_params);
    }
}

/// Every animal takes the death test; the dead are pruned.
pub fn death_phase(
    grid: &mut Grid,
    herbivore_params: &SpeciesParams,
    carnivore_params: &SpeciesParams,
    rng: &mut impl Rng,
) {
    for coord in grid.coords() {
        if let Some(cell) = grid.get_mut(coord) {
            cell.apply_deaths(herbivore_params, carnivore_params, rng);
        }
    }
}
