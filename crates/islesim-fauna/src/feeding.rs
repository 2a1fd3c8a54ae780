//! Feeding behaviour: herbivore grazing and the carnivore hunt.
//!
//! Grazing draws from the cell's shared fodder pool; hunting walks the
//! cell's fitness-ascending prey list under an appetite cap. Both leave
//! list bookkeeping (pruning killed prey, updating cell fodder) to the
//! cell that owns the residents.

use rand::Rng;
use tracing::trace;

use crate::animal::Animal;
use crate::params::SpeciesParams;

/// Graze the cell's fodder pool.
///
/// The animal consumes `min(F, available_fodder)`, gains
/// `beta * consumed` weight (fitness refreshed), and the amount of
/// fodder left in the cell afterwards is returned so the cell can
/// update its pool before the next resident eats.
pub fn graze(animal: &mut Animal, params: &SpeciesParams, available_fodder: f64) -> f64 {
    let consumed = params.appetite.min(available_fodder).max(0.0);
    animal.gain_from_eating(consumed, params);
    available_fodder - consumed
}

/// Decide whether `attacker` kills `prey`, and mark the prey dead on
/// success. Nothing else about the prey is mutated; eating is the
/// caller's concern.
///
/// With `advantage = attacker fitness - prey fitness` and the species'
/// predation bound `DeltaPhiMax`:
///
/// - `advantage <= 0`: never a kill;
/// - `0 < advantage < DeltaPhiMax`: kill with probability
///   `advantage / DeltaPhiMax`;
/// - `advantage >= DeltaPhiMax`: certain kill.
///
/// A species without a configured predation bound never kills.
pub fn strike(
    attacker: &Animal,
    prey: &mut Animal,
    params: &SpeciesParams,
    rng: &mut impl Rng,
) -> bool {
    let Some(bound) = params.delta_phi_max else {
        return false;
    };
    let advantage = attacker.fitness() - prey.fitness();
    if advantage <= 0.0 {
        return false;
    }
    if advantage >= bound {
        prey.kill();
        return true;
    }
    let p_kill = advantage / bound;
    if rng.random::<f64>() < p_kill {
        prey.kill();
        true
    } else {
        false
    }
}

/// Run one carnivore's full annual feeding pass over the cell's prey
/// list, which the cell has sorted by ascending fitness (weakest
/// hunted first).
///
/// Candidates are attacked in order until the appetite `F` is satisfied
/// or the list is exhausted. A killed prey is eaten up to the remaining
/// appetite: if its weight covers what is left, exactly the remainder
/// is consumed and the hunt ends; otherwise the whole carcass is
/// consumed and the hunt continues. Surplus carcass weight beyond the
/// appetite is wasted, never consumed.
pub fn hunt(
    attacker: &mut Animal,
    prey: &mut [Animal],
    params: &SpeciesParams,
    rng: &mut impl Rng,
) {
    let mut eaten = 0.0_f64;
    for candidate in prey.iter_mut() {
        if eaten >= params.appetite {
            break;
        }
        if !candidate.is_alive() {
            continue;
        }
        if !strike(attacker, candidate, params, rng) {
            continue;
        }

        let remaining = params.appetite - eaten;
        if candidate.weight() >= remaining {
            attacker.gain_from_eating(remaining, params);
            trace!(meal = remaining, "predator sated");
            return;
        }
        let meal = candidate.weight();
        attacker.gain_from_eating(meal, params);
        eaten += meal;
        trace!(meal, eaten, "predator still hungry");
    }
}

#[cfg(test)]
mod tests {
    use islesim_types::Species;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    /// A carnivore with near-maximal fitness: young and heavy.
    fn strong_carnivore(params: &SpeciesParams) -> Animal {
        Animal::with_state(Species::Carnivore, 0, 80.0, params)
            .unwrap_or_else(|_| Animal::newborn(Species::Carnivore, 80.0, params))
    }

    /// A herbivore with near-zero fitness: ancient and light.
    fn frail_herbivore(weight: f64) -> Animal {
        let params = SpeciesParams::herbivore_defaults();
        Animal::with_state(Species::Herbivore, 500, weight, &params)
            .unwrap_or_else(|_| Animal::newborn(Species::Herbivore, weight, &params))
    }

    #[test]
    fn grazing_with_plenty_eats_full_appetite() {
        let params = SpeciesParams::herbivore_defaults();
        let mut h = frail_herbivore(20.0);
        let left = graze(&mut h, &params, 300.0);
        assert!((left - 290.0).abs() < 1e-12);
        assert!((h.weight() - (20.0 + 0.9 * 10.0)).abs() < 1e-12);
    }

    #[test]
    fn grazing_scarce_fodder_eats_what_is_there() {
        let params = SpeciesParams::herbivore_defaults();
        let mut h = frail_herbivore(20.0);
        let left = graze(&mut h, &params, 4.0);
        assert_eq!(left, 0.0);
        assert!((h.weight() - (20.0 + 0.9 * 4.0)).abs() < 1e-12);
    }

    #[test]
    fn grazing_empty_cell_changes_nothing() {
        let params = SpeciesParams::herbivore_defaults();
        let mut h = frail_herbivore(20.0);
        let before = h.weight();
        let left = graze(&mut h, &params, 0.0);
        assert_eq!(left, 0.0);
        assert_eq!(h.weight(), before);
    }

    #[test]
    fn strike_never_kills_without_fitness_advantage() {
        let params = SpeciesParams::carnivore_defaults();
        let mut rng = StdRng::seed_from_u64(7);
        // An ancient, starving attacker: fitness effectively zero, so
        // the prey is strictly fitter.
        let attacker = Animal::with_state(Species::Carnivore, 500, 0.1, &params)
            .unwrap_or_else(|_| Animal::newborn(Species::Carnivore, 0.1, &params));
        let herb_params = SpeciesParams::herbivore_defaults();
        let mut prey = Animal::with_state(Species::Herbivore, 5, 50.0, &herb_params)
            .unwrap_or_else(|_| Animal::newborn(Species::Herbivore, 50.0, &herb_params));
        for _ in 0..1000 {
            assert!(!strike(&attacker, &mut prey, &params, &mut rng));
            assert!(prey.is_alive());
        }
    }

    #[test]
    fn strike_is_certain_beyond_the_bound() {
        let mut params = SpeciesParams::carnivore_defaults();
        params.delta_phi_max = Some(1e-6);
        let mut rng = StdRng::seed_from_u64(7);
        let attacker = strong_carnivore(&params);
        for _ in 0..100 {
            let mut prey = frail_herbivore(5.0);
            assert!(strike(&attacker, &mut prey, &params, &mut rng));
            assert!(!prey.is_alive());
        }
    }

    #[test]
    fn strike_without_a_bound_never_kills() {
        let mut params = SpeciesParams::carnivore_defaults();
        params.delta_phi_max = None;
        let mut rng = StdRng::seed_from_u64(7);
        let attacker = strong_carnivore(&SpeciesParams::carnivore_defaults());
        let mut prey = frail_herbivore(5.0);
        assert!(!strike(&attacker, &mut prey, &params, &mut rng));
        assert!(prey.is_alive());
    }

    #[test]
    fn strike_frequency_tracks_the_advantage_ratio() {
        let params = SpeciesParams::carnivore_defaults();
        let mut rng = StdRng::seed_from_u64(20_240_101);
        let attacker = strong_carnivore(&params);
        let prey_template = frail_herbivore(5.0);

        let advantage = attacker.fitness() - prey_template.fitness();
        let bound = params.delta_phi_max.map_or(0.0, |b| b);
        assert!(advantage > 0.0 && advantage < bound);
        let expected = advantage / bound;

        let trials = 20_000;
        let mut kills = 0_u32;
        for _ in 0..trials {
            let mut prey = prey_template.clone();
            if strike(&attacker, &mut prey, &params, &mut rng) {
                kills += 1;
            }
        }
        let observed = f64::from(kills) / f64::from(trials);
        assert!(
            (observed - expected).abs() < 0.01,
            "observed {observed}, expected {expected}"
        );
    }

    #[test]
    fn hunt_stops_exactly_at_appetite() {
        // Prey weights [5, 6, 5] fitness-ascending, appetite 10, kills
        // certain: the predator gains beta * 10, the first two prey
        // die, the third survives untouched.
        let mut params = SpeciesParams::carnivore_defaults();
        params.appetite = 10.0;
        params.delta_phi_max = Some(1e-9);
        let mut rng = StdRng::seed_from_u64(1);

        let mut attacker = strong_carnivore(&params);
        let start_weight = attacker.weight();
        let mut prey = vec![
            frail_herbivore(5.0),
            frail_herbivore(6.0),
            frail_herbivore(5.0),
        ];

        hunt(&mut attacker, &mut prey, &params, &mut rng);

        assert!(
            (attacker.weight() - (start_weight + 0.75 * 10.0)).abs() < 1e-9,
            "exactly beta * F gained"
        );
        assert!(!prey[0].is_alive());
        assert!(!prey[1].is_alive());
        assert!(prey[2].is_alive());
    }

    #[test]
    fn hunt_with_zero_appetite_touches_nothing() {
        let mut params = SpeciesParams::carnivore_defaults();
        params.appetite = 0.0;
        params.delta_phi_max = Some(1e-9);
        let mut rng = StdRng::seed_from_u64(1);
        let mut attacker = strong_carnivore(&params);
        let before = attacker.weight();
        let mut prey = vec![frail_herbivore(5.0)];
        hunt(&mut attacker, &mut prey, &params, &mut rng);
        assert_eq!(attacker.weight(), before);
        assert!(prey[0].is_alive());
    }

    #[test]
    fn hunt_eats_whole_small_carcasses_and_continues() {
        let mut params = SpeciesParams::carnivore_defaults();
        params.appetite = 50.0;
        params.delta_phi_max = Some(1e-9);
        let mut rng = StdRng::seed_from_u64(1);
        let mut attacker = strong_carnivore(&params);
        let start_weight = attacker.weight();
        let mut prey = vec![frail_herbivore(3.0), frail_herbivore(4.0)];
        hunt(&mut attacker, &mut prey, &params, &mut rng);
        // Appetite never reached: both carcasses fully eaten.
        assert!((attacker.weight() - (start_weight + 0.75 * 7.0)).abs() < 1e-9);
        assert!(!prey[0].is_alive());
        assert!(!prey[1].is_alive());
    }

    #[test]
    fn hunt_skips_already_dead_candidates() {
        let mut params = SpeciesParams::carnivore_defaults();
        params.appetite = 50.0;
        params.delta_phi_max = Some(1e-9);
        let mut rng = StdRng::seed_from_u64(1);
        let mut attacker = strong_carnivore(&params);
        let start_weight = attacker.weight();

        let mut dead = frail_herbivore(30.0);
        dead.kill();
        let mut prey = vec![dead, frail_herbivore(4.0)];
        hunt(&mut attacker, &mut prey, &params, &mut rng);
        // Only the living candidate was eaten.
        assert!((attacker.weight() - (start_weight + 0.75 * 4.0)).abs() < 1e-9);
    }
}
