//! The annual stochastic death test.

use rand::Rng;

use crate::animal::Animal;
use crate::params::SpeciesParams;

/// Run the annual death test on one animal.
///
/// The death probability is `omega * (1 - fitness)`; the animal also
/// dies unconditionally if its weight has reached zero (or below).
/// A death clears the alive flag and nothing else -- pruning the
/// resident list is the cell's job at the end of the death phase.
///
/// Returns `true` if the animal died.
pub fn death_test(animal: &mut Animal, params: &SpeciesParams, rng: &mut impl Rng) -> bool {
    let p_death = params.omega * (1.0 - animal.fitness());
    let roll = rng.random::<f64>();
    if roll < p_death || animal.weight() <= 0.0 {
        animal.kill();
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use islesim_types::Species;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn herb(age: u32, weight: f64, params: &SpeciesParams) -> Animal {
        Animal::with_state(Species::Herbivore, age, weight, params)
            .unwrap_or_else(|_| Animal::newborn(Species::Herbivore, weight, params))
    }

    #[test]
    fn zero_omega_never_kills_a_healthy_animal() {
        let mut params = SpeciesParams::herbivore_defaults();
        params.omega = 0.0;
        let mut rng = StdRng::seed_from_u64(3);
        let mut a = herb(5, 20.0, &params);
        for _ in 0..1000 {
            assert!(!death_test(&mut a, &params, &mut rng));
        }
        assert!(a.is_alive());
    }

    #[test]
    fn zero_weight_is_always_lethal() {
        let mut params = SpeciesParams::herbivore_defaults();
        params.omega = 0.0; // even with no stochastic death at all
        let mut rng = StdRng::seed_from_u64(3);
        let mut a = Animal::newborn(Species::Herbivore, 0.0, &params);
        assert!(death_test(&mut a, &params, &mut rng));
        assert!(!a.is_alive());
    }

    #[test]
    fn unfit_animals_die_at_rate_omega() {
        // Fitness ~ 0, so p_death ~ omega. Check the observed rate.
        let mut params = SpeciesParams::herbivore_defaults();
        params.omega = 0.3;
        let mut rng = StdRng::seed_from_u64(99);
        let trials = 20_000;
        let mut deaths = 0_u32;
        for _ in 0..trials {
            let mut a = herb(500, 0.5, &params);
            if death_test(&mut a, &params, &mut rng) {
                deaths += 1;
            }
        }
        let observed = f64::from(deaths) / f64::from(trials);
        assert!(
            (observed - 0.3).abs() < 0.01,
            "observed death rate {observed}"
        );
    }

    #[test]
    fn survivor_keeps_its_state() {
        let mut params = SpeciesParams::herbivore_defaults();
        params.omega = 0.0;
        let mut rng = StdRng::seed_from_u64(3);
        let mut a = herb(5, 20.0, &params);
        let (age, weight) = (a.age(), a.weight());
        let _ = death_test(&mut a, &params, &mut rng);
        assert_eq!(a.age(), age);
        assert_eq!(a.weight(), weight);
    }
}
