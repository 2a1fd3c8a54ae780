//! Reproduction: birth attempts and birth-weight sampling.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::animal::Animal;
use crate::params::SpeciesParams;

/// Draw a birth weight from the species' Gaussian
/// `N(w_birth, sigma_birth)`.
///
/// `sigma_birth` is validated non-negative, so the distribution is
/// always constructible; a zero sigma degenerates to the mean, which is
/// also the fallback should construction ever fail.
pub fn sample_birth_weight(params: &SpeciesParams, rng: &mut impl Rng) -> f64 {
    Normal::new(params.w_birth, params.sigma_birth)
        .map_or(params.w_birth, |dist| dist.sample(rng))
}

/// Attempt one birth for `parent`, given the count of same-species
/// residents in its cell captured before any births this phase.
///
/// No birth is possible (and no random draw is consumed) when fewer
/// than two same-species residents share the cell, or when the parent
/// weighs less than `zeta * (w_birth + sigma_birth)`.
///
/// Otherwise a prospective child weight is sampled, the birth
/// probability `min(1, gamma * fitness * (count - 1))` is rolled, and
/// a birth happens only if the roll succeeds AND the parent outweighs
/// `xi` times the sampled child weight. On success the parent pays
/// `xi * child_weight` (fitness refreshed) and the newborn is returned;
/// on any failure the parent is untouched.
pub fn attempt_birth(
    parent: &mut Animal,
    params: &SpeciesParams,
    same_species_count: usize,
    rng: &mut impl Rng,
) -> Option<Animal> {
    if same_species_count < 2 {
        return None;
    }
    if parent.weight() < params.reproduction_threshold() {
        return None;
    }

    let child_weight = sample_birth_weight(params, rng);
    let p_birth =
        (params.gamma * parent.fitness() * (same_species_count as f64 - 1.0)).min(1.0);
    let roll = rng.random::<f64>();

    if roll < p_birth && parent.weight() > params.xi * child_weight {
        parent.pay_birth_cost(child_weight, params);
        Some(Animal::newborn(parent.species(), child_weight, params))
    } else {
        None
    }
}
