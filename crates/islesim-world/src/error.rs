//! Error types for map parsing and terrain configuration.

use thiserror::Error;

/// Errors raised while parsing a map sketch or updating terrain
/// parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldError {
    /// The map sketch contained no rows at all.
    #[error("map sketch is empty")]
    EmptyMap,

    /// A row's length differed from the first row's.
    #[error("map row {row} has {found} columns, expected {expected}")]
    NotRectangular {
        /// Zero-based index of the offending row.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count actually found.
        found: usize,
    },

    /// A character in the sketch is not a recognised terrain code.
    #[error("unknown terrain code '{code}' at row {row}, column {col}")]
    UnknownTerrainCode {
        /// The unrecognised character.
        code: char,
        /// Zero-based row of the character.
        row: usize,
        /// Zero-based column of the character.
        col: usize,
    },

    /// A boundary cell is not water.
    #[error("map boundary must be water, found land at row {row}, column {col}")]
    OpenBorder {
        /// Zero-based row of the offending boundary cell.
        row: usize,
        /// Zero-based column of the offending boundary cell.
        col: usize,
    },

    /// A terrain parameter name that no terrain kind understands.
    #[error("unknown terrain parameter '{name}'")]
    UnknownParameter {
        /// The rejected parameter name.
        name: String,
    },

    /// A terrain parameter value outside its legal domain.
    #[error("terrain parameter '{name}' = {value} violates constraint: {constraint}")]
    OutOfDomain {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: f64,
        /// Human-readable constraint, e.g. "must be non-negative".
        constraint: &'static str,
    },
}
