//! The migration proposal: whether an animal wants to move, and where.
//!
//! A proposal is a pure read of the animal's current state -- it never
//! relocates anything. The grid-wide migration phase collects every
//! proposal first and commits them afterwards, which is what guarantees
//! at most one move per animal per year.

use islesim_types::{Coord, Direction};
use rand::Rng;

use crate::animal::Animal;
use crate::params::SpeciesParams;

/// Decide whether the animal standing at `origin` proposes to move
/// this year, and if so to which adjacent coordinate.
///
/// The animal moves with probability `mu * fitness`. On a successful
/// draw, one of the four orthogonal neighbours is chosen uniformly
/// (north, south, west, east). The chosen destination may be
/// out of bounds or impassable; judging that is the committing
/// phase's job, and an illegal destination leaves the animal in place.
///
/// Returns `None` for "no move", which includes the rare case of a
/// step off the coordinate domain entirely (equivalent to any other
/// out-of-bounds destination).
pub fn propose_move(
    animal: &Animal,
    origin: Coord,
    params: &SpeciesParams,
    rng: &mut impl Rng,
) -> Option<Coord> {
    let p_move = params.mu * animal.fitness();
    if rng.random::<f64>() >= p_move {
        return None;
    }
    let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
    origin.step(direction)
}
