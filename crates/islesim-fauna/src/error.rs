//! Error types for the `islesim-fauna` crate.

/// Errors raised by species-parameter validation and animal construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FaunaError {
    /// A parameter batch named a key that is not part of the species
    /// coefficient set.
    #[error("unknown species parameter: {name}")]
    UnknownParameter {
        /// The offending key.
        name: String,
    },

    /// A parameter value lies outside its declared domain. The whole
    /// batch it arrived in is rejected.
    #[error("species parameter {name} = {value} out of domain: {constraint}")]
    OutOfDomain {
        /// The offending key.
        name: String,
        /// The rejected value.
        value: f64,
        /// Human-readable domain description.
        constraint: &'static str,
    },

    /// An externally inserted animal carried a non-positive or
    /// non-finite weight. Zero weight is immediately lethal, so
    /// inserted weights must be strictly positive.
    #[error("invalid animal weight: {weight} (must be strictly positive)")]
    InvalidWeight {
        /// The rejected weight.
        weight: f64,
    },
}
