//! Error types shared by every stage of a run.

use thiserror::Error;

/// Errors raised while building an instance, validating a configuration,
/// or scoring a solution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MosaError {
    /// The instance data is inconsistent (counts, lengths, negative weights).
    ///
    /// Raised before any annealing iteration begins.
    #[error("malformed instance: {0}")]
    MalformedInstance(String),

    /// A value used by the logarithmic scalarization is zero or negative.
    #[error("value {value} of object {object} in objective {objective} is not positive")]
    NonPositiveValue {
        /// Objective row of the offending value.
        objective: usize,
        /// Object column of the offending value.
        object: usize,
        /// The offending value.
        value: f64,
    },

    /// The annealing configuration was rejected by `MosaConfig::validate`.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An objective vector does not have one entry per objective.
    #[error("objective vector has {found} entries, expected {expected}")]
    ObjectiveCountMismatch {
        /// Objective count of the front.
        expected: usize,
        /// Length of the offered vector.
        found: usize,
    },

    /// A solution refers to an object the instance does not have.
    #[error("object index {index} out of range for {object_count} objects")]
    IndexOutOfRange {
        /// The unknown index.
        index: usize,
        /// Number of objects in the instance.
        object_count: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MosaError>;
