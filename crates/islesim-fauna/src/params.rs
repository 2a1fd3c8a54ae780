//! Species parameter sets: the named coefficients governing one
//! species' biology.
//!
//! A [`SpeciesParams`] value is immutable after validation. Updates go
//! through [`SpeciesParams::with_updates`], which validates the whole
//! batch before producing a new value -- an invalid batch leaves the
//! original untouched, and there is no shared mutable parameter state
//! anywhere in the simulation.
//!
//! The external key alphabet matches the textual configuration
//! interface: `w_birth`, `sigma_birth`, `beta`, `eta`, `F`, `phi_age`,
//! `a_half`, `phi_weight`, `w_half`, `xi`, `zeta`, `gamma`, `omega`,
//! `mu`, `DeltaPhiMax`.

use std::collections::BTreeMap;

use islesim_types::Species;
use serde::Serialize;

use crate::error::FaunaError;

/// The validated coefficient set for one species.
///
/// Every coefficient is non-negative; `eta` additionally lies in
/// `[0, 1]` and `delta_phi_max`, where present, is strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesParams {
    /// Mean birth weight (key `w_birth`).
    pub w_birth: f64,
    /// Birth-weight standard deviation (key `sigma_birth`).
    pub sigma_birth: f64,
    /// Feeding efficiency: weight gained per unit eaten (key `beta`).
    pub beta: f64,
    /// Annual weight-loss rate in `[0, 1]` (key `eta`).
    pub eta: f64,
    /// Appetite: the amount an animal wants to eat per year (key `F`).
    pub appetite: f64,
    /// Age steepness of the fitness curve (key `phi_age`).
    pub phi_age: f64,
    /// Age midpoint of the fitness curve (key `a_half`).
    pub a_half: f64,
    /// Weight steepness of the fitness curve (key `phi_weight`).
    pub phi_weight: f64,
    /// Weight midpoint of the fitness curve (key `w_half`).
    pub w_half: f64,
    /// Birth cost factor: the mother loses `xi` times the child's
    /// weight (key `xi`).
    pub xi: f64,
    /// Reproduction weight-threshold factor (key `zeta`).
    pub zeta: f64,
    /// Birth-probability coefficient (key `gamma`).
    pub gamma: f64,
    /// Death-rate coefficient (key `omega`).
    pub omega: f64,
    /// Migration-propensity coefficient (key `mu`).
    pub mu: f64,
    /// Predation bound (key `DeltaPhiMax`): the fitness advantage at
    /// which a kill becomes certain. Strictly positive where present.
    /// `None` for species that never hunt.
    pub delta_phi_max: Option<f64>,
}

impl SpeciesParams {
    /// Default herbivore coefficients.
    pub const fn herbivore_defaults() -> Self {
        Self {
            w_birth: 8.0,
            sigma_birth: 1.5,
            beta: 0.9,
            eta: 0.05,
            appetite: 10.0,
            phi_age: 0.6,
            a_half: 40.0,
            phi_weight: 0.1,
            w_half: 10.0,
            xi: 1.2,
            zeta: 3.5,
            gamma: 0.2,
            omega: 0.4,
            mu: 0.25,
            delta_phi_max: None,
        }
    }

    /// Default carnivore coefficients.
    pub const fn carnivore_defaults() -> Self {
        Self {
            w_birth: 6.0,
            sigma_birth: 1.0,
            beta: 0.75,
            eta: 0.125,
            appetite: 50.0,
            phi_age: 0.3,
            a_half: 40.0,
            phi_weight: 0.4,
            w_half: 4.0,
            xi: 1.1,
            zeta: 3.5,
            gamma: 0.8,
            omega: 0.8,
            mu: 0.4,
            delta_phi_max: Some(10.0),
        }
    }

    /// The default coefficient set for `species`.
    pub const fn defaults_for(species: Species) -> Self {
        match species {
            Species::Herbivore => Self::herbivore_defaults(),
            Species::Carnivore => Self::carnivore_defaults(),
        }
    }

    /// The minimum weight below which reproduction is impossible:
    /// `zeta * (w_birth + sigma_birth)`.
    pub fn reproduction_threshold(&self) -> f64 {
        self.zeta * (self.w_birth + self.sigma_birth)
    }

    /// Return a copy of this parameter set with the named updates
    /// applied.
    ///
    /// The whole batch is validated before any value lands: an unknown
    /// key or an out-of-domain value rejects the entire batch and the
    /// original set is returned unchanged to the caller by virtue of
    /// never having been touched.
    ///
    /// # Errors
    ///
    /// Returns [`FaunaError::UnknownParameter`] or
    /// [`FaunaError::OutOfDomain`] for the first violation found.
    pub fn with_updates(
        &self,
        updates: &BTreeMap<String, f64>,
    ) -> Result<Self, FaunaError> {
        for (name, &value) in updates {
            validate_update(name, value)?;
        }

        let mut next = self.clone();
        for (name, &value) in updates {
            next.apply(name, value);
        }
        Ok(next)
    }

    /// Apply one already-validated update.
    fn apply(&mut self, name: &str, value: f64) {
        match name {
            "w_birth" => self.w_birth = value,
            "sigma_birth" => self.sigma_birth = value,
            "beta" => self.beta = value,
            "eta" => self.eta = value,
            "F" => self.appetite = value,
            "phi_age" => self.phi_age = value,
            "a_half" => self.a_half = value,
            "phi_weight" => self.phi_weight = value,
            "w_half" => self.w_half = value,
            "xi" => self.xi = value,
            "zeta" => self.zeta = value,
            "gamma" => self.gamma = value,
            "omega" => self.omega = value,
            "mu" => self.mu = value,
            "DeltaPhiMax" => self.delta_phi_max = Some(value),
            _ => {}
        }
    }
}

/// Validate a single `(key, value)` update without applying it.
fn validate_update(name: &str, value: f64) -> Result<(), FaunaError> {
    if !value.is_finite() {
        return Err(FaunaError::OutOfDomain {
            name: name.to_string(),
            value,
            constraint: "must be a finite number",
        });
    }

    match name {
        "eta" => {
            if !(0.0..=1.0).contains(&value) {
                return Err(FaunaError::OutOfDomain {
                    name: name.to_string(),
                    value,
                    constraint: "must lie in [0, 1]",
                });
            }
        }
        "DeltaPhiMax" => {
            if value <= 0.0 {
                return Err(FaunaError::OutOfDomain {
                    name: name.to_string(),
                    value,
                    constraint: "must be strictly positive",
                });
            }
        }
        "w_birth" | "sigma_birth" | "beta" | "F" | "phi_age" | "a_half"
        | "phi_weight" | "w_half" | "xi" | "zeta" | "gamma" | "omega" | "mu" => {
            if value < 0.0 {
                return Err(FaunaError::OutOfDomain {
                    name: name.to_string(),
                    value,
                    constraint: "must be non-negative",
                });
            }
        }
        other => {
            return Err(FaunaError::UnknownParameter {
                name: other.to_string(),
            });
        }
    }
    Ok(())
}
