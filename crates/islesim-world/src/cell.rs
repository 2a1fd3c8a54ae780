//! One grid cell: terrain, a fodder pool, and resident animals.
//!
//! A cell owns its residents for the whole year. Phase logic that acts
//! on a single cell lives here; cross-cell logic (migration commits)
//! goes through [`Cell::take_resident`], [`Cell::receive_migrant`] and
//! [`Cell::absorb_incoming`] so that migrants never mix with residents
//! before the grid-wide barrier.

use islesim_fauna::{
    Animal, SpeciesParams,
    death::death_test,
    feeding::{graze, hunt},
    reproduction::attempt_birth,
};
use islesim_types::{Species, TerrainKind};
use rand::Rng;

/// A single cell of the island grid.
#[derive(Debug, Clone)]
pub struct Cell {
    terrain: TerrainKind,
    fodder: f64,
    herbivores: Vec<Animal>,
    carnivores: Vec<Animal>,
    incoming_herbivores: Vec<Animal>,
    incoming_carnivores: Vec<Animal>,
}

impl Cell {
    /// An empty cell of the given terrain. Fodder starts at zero;
    /// regrowth precedes feeding in every annual cycle, so the initial
    /// pool is never eaten from.
    pub const fn new(terrain: TerrainKind) -> Self {
        Self {
            terrain,
            fodder: 0.0,
            herbivores: Vec::new(),
            carnivores: Vec::new(),
            incoming_herbivores: Vec::new(),
            incoming_carnivores: Vec::new(),
        }
    }

    /// The cell's terrain kind.
    pub const fn terrain(&self) -> TerrainKind {
        self.terrain
    }

    /// Whether animals may occupy or enter this cell.
    pub const fn is_accessible(&self) -> bool {
        self.terrain.is_accessible()
    }

    /// The fodder currently available to herbivores.
    pub const fn fodder(&self) -> f64 {
        self.fodder
    }

    /// The residents of one species, in list order.
    pub fn residents(&self, species: Species) -> &[Animal] {
        match species {
            Species::Herbivore => &self.herbivores,
            Species::Carnivore => &self.carnivores,
        }
    }

    fn residents_mut(&mut self, species: Species) -> &mut Vec<Animal> {
        match species {
            Species::Herbivore => &mut self.herbivores,
            Species::Carnivore => &mut self.carnivores,
        }
    }

    /// Number of residents of one species.
    pub fn count(&self, species: Species) -> usize {
        self.residents(species).len()
    }

    /// Total residents across both species.
    pub fn total_count(&self) -> usize {
        self.herbivores.len() + self.carnivores.len()
    }

    /// Append an animal to its species' resident list.
    pub fn push_resident(&mut self, animal: Animal) {
        self.residents_mut(animal.species()).push(animal);
    }

    /// Reset the fodder pool to the terrain's annual ceiling.
    pub const fn regrow(&mut self, f_max: f64) {
        self.fodder = f_max;
    }

    /// Herbivore feeding: each resident grazes in list order, drawing
    /// from the shared pool, so earlier animals can exhaust it for
    /// later ones.
    pub fn feed_herbivores(&mut self, params: &SpeciesParams) {
        for animal in &mut self.herbivores {
            self.fodder = graze(animal, params, self.fodder);
        }
    }

    /// Carnivore feeding: predators hunt in descending fitness order
    /// over the prey list sorted ascending, then killed prey are
    /// pruned.
    pub fn feed_carnivores(&mut self, params: &SpeciesParams, rng: &mut impl Rng) {
        let Self {
            herbivores,
            carnivores,
            ..
        } = self;
        carnivores.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
        herbivores.sort_by(|a, b| a.fitness().total_cmp(&b.fitness()));
        for attacker in carnivores.iter_mut() {
            hunt(attacker, herbivores, params, rng);
        }
        herbivores.retain(Animal::is_alive);
    }

    /// Reproduction for both species.
    ///
    /// The same-species count each parent sees is the resident count
    /// at the start of the phase; newborns join the list afterwards
    /// and neither reproduce nor raise anyone's count this year.
    pub fn procreate(
        &mut self,
        herbivore_params: &SpeciesParams,
        carnivore_params: &SpeciesParams,
        rng: &mut impl Rng,
    ) {
        Self::procreate_species(&mut self.herbivores, herbivore_params, rng);
        Self::procreate_species(&mut self.carnivores, carnivore_params, rng);
    }

    fn procreate_species(list: &mut Vec<Animal>, params: &SpeciesParams, rng: &mut impl Rng) {
        let count = list.len();
        let mut newborns = Vec::new();
        for parent in list.iter_mut() {
            if let Some(child) = attempt_birth(parent, params, count, rng) {
                newborns.push(child);
            }
        }
        list.append(&mut newborns);
    }

    /// Age every resident by one year.
    pub fn age_residents(
        &mut self,
        herbivore_params: &SpeciesParams,
        carnivore_params: &SpeciesParams,
    ) {
        for animal in &mut self.herbivores {
            animal.grow_older(herbivore_params);
        }
        for animal in &mut self.carnivores {
            animal.grow_older(carnivore_params);
        }
    }

    /// Apply the annual weight loss to every resident.
    pub fn apply_weight_loss(
        &mut self,
        herbivore_params: &SpeciesParams,
        carnivore_params: &SpeciesParams,
    ) {
        for animal in &mut self.herbivores {
            animal.lose_weight(herbivore_params);
        }
        for animal in &mut self.carnivores {
            animal.lose_weight(carnivore_params);
        }
    }

    /// Run the death test on every resident and prune the dead.
    pub fn apply_deaths(
        &mut self,
        herbivore_params: &SpeciesParams,
        carnivore_params: &SpeciesParams,
        rng: &mut impl Rng,
    ) {
        for animal in &mut self.herbivores {
            let _ = death_test(animal, herbivore_params, rng);
        }
        for animal in &mut self.carnivores {
            let _ = death_test(animal, carnivore_params, rng);
        }
        self.herbivores.retain(Animal::is_alive);
        self.carnivores.retain(Animal::is_alive);
    }

    /// Remove and return the resident at `index` of the given species,
    /// or `None` if the index is out of range.
    pub fn take_resident(&mut self, species: Species, index: usize) -> Option<Animal> {
        let list = self.residents_mut(species);
        (index < list.len()).then(|| list.remove(index))
    }

    /// Buffer an arriving migrant. It joins the resident list only at
    /// [`Cell::absorb_incoming`], never mid-phase.
    pub fn receive_migrant(&mut self, animal: Animal) {
        match animal.species() {
            Species::Herbivore => self.incoming_herbivores.push(animal),
            Species::Carnivore => self.incoming_carnivores.push(animal),
        }
    }

    /// Merge buffered migrants into the resident lists.
    pub fn absorb_incoming(&mut self) {
        self.herbivores.append(&mut self.incoming_herbivores);
        self.carnivores.append(&mut self.incoming_carnivores);
    }
}
