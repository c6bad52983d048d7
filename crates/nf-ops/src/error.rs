//! Operator application errors.

use nf_rates::RateError;
use nf_state::StateError;
use thiserror::Error;

/// Result type for operator operations.
pub type OpResult<T> = Result<T, OpError>;

/// Errors that can occur while constructing or applying an operator.
#[derive(Error, Debug)]
pub enum OpError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Operator {operator}: state has {actual} species, expected {expected}")]
    SizeMismatch {
        operator: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Operator {operator}: species index {index} out of range (len={len})")]
    SpeciesOutOfRange {
        operator: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Rate evaluation failed for reaction {reaction}")]
    Rate {
        reaction: String,
        #[source]
        source: RateError,
    },

    #[error("State error: {0}")]
    State(#[from] StateError),
}
