//! Per-terrain parameters and the table holding one set per kind.

use std::collections::BTreeMap;

use islesim_types::TerrainKind;
use serde::Serialize;

use crate::error::WorldError;

/// Tunable parameters of one terrain kind.
///
/// Currently the single knob is `f_max`, the fodder ceiling a cell of
/// this kind regrows to each year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TerrainParams {
    /// Annual fodder ceiling. Water and desert default to zero.
    pub f_max: f64,
}

/// One [`TerrainParams`] per terrain kind.
///
/// Updates are atomic per call: every entry of an update map is
/// validated before any value is applied, and a rejected batch leaves
/// the table untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerrainTable {
    water: TerrainParams,
    desert: TerrainParams,
    highland: TerrainParams,
    lowland: TerrainParams,
}

impl Default for TerrainTable {
    fn default() -> Self {
        Self {
            water: TerrainParams { f_max: 0.0 },
            desert: TerrainParams { f_max: 0.0 },
            highland: TerrainParams { f_max: 300.0 },
            lowland: TerrainParams { f_max: 800.0 },
        }
    }
}

impl TerrainTable {
    /// The fodder ceiling for cells of the given kind.
    pub const fn f_max(&self, kind: TerrainKind) -> f64 {
        self.params(kind).f_max
    }

    /// The full parameter set for the given kind.
    pub const fn params(&self, kind: TerrainKind) -> &TerrainParams {
        match kind {
            TerrainKind::Water => &self.water,
            TerrainKind::Desert => &self.desert,
            TerrainKind::Highland => &self.highland,
            TerrainKind::Lowland => &self.lowland,
        }
    }

    /// Produce a new table with `updates` applied to the given kind.
    ///
    /// # Errors
    ///
    /// [`WorldError::UnknownParameter`] for a key other than `f_max`,
    /// [`WorldError::OutOfDomain`] for a non-finite or negative value.
    /// Either rejection leaves `self` unchanged and applies nothing.
    pub fn with_updates(
        &self,
        kind: TerrainKind,
        updates: &BTreeMap<String, f64>,
    ) -> Result<Self, WorldError> {
        for (name, &value) in updates {
            if name != "f_max" {
                return Err(WorldError::UnknownParameter { name: name.clone() });
            }
            if !value.is_finite() || value < 0.0 {
                return Err(WorldError::OutOfDomain {
                    name: name.clone(),
                    value,
                    constraint: "must be a finite non-negative number",
                });
            }
        }

        let mut next = self.clone();
        let slot = match kind {
            TerrainKind::Water => &mut next.water,
            TerrainKind::Desert => &mut next.desert,
            TerrainKind::Highland => &mut next.highland,
            TerrainKind::Lowland => &mut next.lowland,
        };
        for (name, &value) in updates {
            if name == "f_max" {
                slot.f_max = value;
            }
        }
        Ok(next)
    }
}
