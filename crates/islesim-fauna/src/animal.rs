//! A single animal's state: age, weight, derived fitness, alive flag.
//!
//! Fitness is derived from age and weight and is recomputed immediately
//! after every mutation of either -- it is never cached across a state
//! change and never set directly. The invariant `weight <= 0 implies
//! fitness == 0` holds at all times.

use islesim_types::Species;
use serde::Serialize;

use crate::error::FaunaError;
use crate::params::SpeciesParams;

/// One individual.
///
/// Mutations go through the methods below so that fitness can never go
/// stale. The alive flag is cleared by the death test or by predation;
/// removal from a cell's resident list is the cell's job and happens
/// only at the end of the relevant phase.
#[derive(Debug, Clone, Serialize)]
pub struct Animal {
    species: Species,
    age: u32,
    weight: f64,
    fitness: f64,
    alive: bool,
}

impl Animal {
    /// Create an animal with explicit age and weight, as the external
    /// population-insertion interface does.
    ///
    /// # Errors
    ///
    /// Returns [`FaunaError::InvalidWeight`] unless the weight is a
    /// finite, strictly positive number. Zero weight is immediately
    /// lethal and therefore not insertable.
    pub fn with_state(
        species: Species,
        age: u32,
        weight: f64,
        params: &SpeciesParams,
    ) -> Result<Self, FaunaError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(FaunaError::InvalidWeight { weight });
        }
        let mut animal = Self {
            species,
            age,
            weight,
            fitness: 0.0,
            alive: true,
        };
        animal.refresh_fitness(params);
        Ok(animal)
    }

    /// Create a newborn: age 0 and the given birth weight, which the
    /// caller has already drawn from the species' birth-weight Gaussian.
    pub fn newborn(species: Species, weight: f64, params: &SpeciesParams) -> Self {
        let mut animal = Self {
            species,
            age: 0,
            weight,
            fitness: 0.0,
            alive: true,
        };
        animal.refresh_fitness(params);
        animal
    }

    /// The immutable species tag.
    pub const fn species(&self) -> Species {
        self.species
    }

    /// Current age in years.
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Current weight.
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Current fitness, in `[0, 1]`.
    pub const fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Whether the animal is still alive.
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Clear the alive flag. List pruning happens at phase end.
    pub(crate) const fn kill(&mut self) {
        self.alive = false;
    }

    /// Recompute fitness from the current age and weight.
    pub fn refresh_fitness(&mut self, params: &SpeciesParams) {
        self.fitness = fitness(self.age, self.weight, params);
    }

    /// Age by one year and recompute fitness.
    pub fn grow_older(&mut self, params: &SpeciesParams) {
        self.age = self.age.saturating_add(1);
        self.refresh_fitness(params);
    }

    /// Apply the annual weight loss `eta * weight` and recompute fitness.
    pub fn lose_weight(&mut self, params: &SpeciesParams) {
        self.weight -= params.eta * self.weight;
        self.refresh_fitness(params);
    }

    /// Gain weight from eating `amount`: `weight += beta * amount`.
    pub(crate) fn gain_from_eating(&mut self, amount: f64, params: &SpeciesParams) {
        self.weight += params.beta * amount;
        self.refresh_fitness(params);
    }

    /// Pay the weight cost of giving birth to a child of `child_weight`:
    /// `weight -= xi * child_weight`.
    pub(crate) fn pay_birth_cost(&mut self, child_weight: f64, params: &SpeciesParams) {
        self.weight -= params.xi * child_weight;
        self.refresh_fitness(params);
    }
}

/// The closed-form fitness of an animal with the given age and weight.
///
/// ```text
/// fitness = 1 / (1 + exp(phi_age * (age - a_half)))
///         * 1 / (1 + exp(-phi_weight * (weight - w_half)))
/// ```
///
/// Each logistic factor lies in `(0, 1)`, so the product lies in
/// `[0, 1]`. A non-positive weight forces fitness to exactly 0
/// regardless of age.
pub fn fitness(age: u32, weight: f64, params: &SpeciesParams) -> f64 {
    if weight <= 0.0 {
        return 0.0;
    }
    let age = f64::from(age);
    let sigma_age = 1.0 / (1.0 + (params.phi_age * (age - params.a_half)).exp());
    let sigma_weight =
        1.0 / (1.0 + (-params.phi_weight * (weight - params.w_half)).exp());
    sigma_age * sigma_weight
}

#[cfg(test)]
mod tests {
    use super::*;

    fn herb(age: u32, weight: f64) -> Animal {
        let params = SpeciesParams::herbivore_defaults();
        Animal::with_state(Species::Herbivore, age, weight, &params)
            .unwrap_or_else(|_| Animal::newborn(Species::Herbivore, weight, &params))
    }

    #[test]
    fn fitness_matches_closed_form() {
        let params = SpeciesParams::herbivore_defaults();
        let age = 5_u32;
        let weight = 20.0;
        let expected = 1.0 / (1.0 + (0.6_f64 * (5.0 - 40.0)).exp())
            * (1.0 / (1.0 + (-0.1_f64 * (20.0 - 10.0)).exp()));
        let got = fitness(age, weight, &params);
        assert!((got - expected).abs() < 1e-12);
    }

    #[test]
    fn fitness_stays_in_unit_interval() {
        let params = SpeciesParams::herbivore_defaults();
        for age in [0_u32, 1, 10, 40, 200] {
            for weight in [0.1, 1.0, 10.0, 50.0, 1000.0] {
                let f = fitness(age, weight, &params);
                assert!((0.0..=1.0).contains(&f), "fitness {f} out of range");
            }
        }
    }

    #[test]
    fn non_positive_weight_forces_zero_fitness() {
        let params = SpeciesParams::herbivore_defaults();
        assert_eq!(fitness(0, 0.0, &params), 0.0);
        assert_eq!(fitness(0, -3.0, &params), 0.0);
        // Even at the age of peak viability.
        assert_eq!(fitness(0, 0.0, &params), 0.0);
    }

    #[test]
    fn with_state_rejects_non_positive_weight() {
        let params = SpeciesParams::herbivore_defaults();
        assert!(matches!(
            Animal::with_state(Species::Herbivore, 3, 0.0, &params),
            Err(FaunaError::InvalidWeight { .. })
        ));
        assert!(matches!(
            Animal::with_state(Species::Herbivore, 3, -2.0, &params),
            Err(FaunaError::InvalidWeight { .. })
        ));
        assert!(matches!(
            Animal::with_state(Species::Herbivore, 3, f64::NAN, &params),
            Err(FaunaError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn newborn_starts_at_age_zero_and_alive() {
        let params = SpeciesParams::carnivore_defaults();
        let a = Animal::newborn(Species::Carnivore, 6.0, &params);
        assert_eq!(a.age(), 0);
        assert_eq!(a.weight(), 6.0);
        assert!(a.is_alive());
        assert!(a.fitness() > 0.0);
    }

    #[test]
    fn growing_older_refreshes_fitness() {
        let params = SpeciesParams::herbivore_defaults();
        let mut a = herb(5, 20.0);
        let before = a.fitness();
        a.grow_older(&params);
        assert_eq!(a.age(), 6);
        assert!(a.fitness() < before, "older animals are less fit");
    }

    #[test]
    fn weight_loss_applies_eta_and_refreshes_fitness() {
        let params = SpeciesParams::herbivore_defaults();
        let mut a = herb(5, 20.0);
        let before = a.fitness();
        a.lose_weight(&params);
        assert!((a.weight() - 19.0).abs() < 1e-12); // 20 - 0.05 * 20
        assert!(a.fitness() < before);
    }

    #[test]
    fn eating_applies_beta() {
        let params = SpeciesParams::herbivore_defaults();
        let mut a = herb(5, 20.0);
        a.gain_from_eating(10.0, &params);
        assert!((a.weight() - 29.0).abs() < 1e-12); // 20 + 0.9 * 10
    }

    #[test]
    fn birth_cost_applies_xi() {
        let params = SpeciesParams::herbivore_defaults();
        let mut a = herb(5, 35.0);
        a.pay_birth_cost(8.0, &params);
        assert!((a.weight() - (35.0 - 1.2 * 8.0)).abs() < 1e-12);
    }
}
