//! Network construction and validation errors.

use nf_core::RnError;
use thiserror::Error;

/// Result type for network operations.
pub type NetResult<T> = Result<T, NetError>;

/// Errors that can occur while building or checking a reaction network.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetError {
    #[error("Network has no species")]
    EmptyIsotopeList,

    #[error("Duplicate isotope name: {name}")]
    DuplicateIsotope { name: String },

    #[error("Reaction '{reaction}' references species index {index} (len={len})")]
    SpeciesOutOfRange {
        reaction: String,
        index: usize,
        len: usize,
    },

    #[error("Reaction '{reaction}' has a zero coefficient for species {index}")]
    ZeroCoefficient { reaction: String, index: usize },

    #[error("Reaction '{reaction}' coefficient for species {index} exceeds {max}", max = i32::MAX)]
    CoefficientOverflow { reaction: String, index: usize },

    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl From<NetError> for RnError {
    fn from(err: NetError) -> Self {
        match err {
            NetError::EmptyIsotopeList => RnError::InvalidArg {
                what: "empty isotope list",
            },
            NetError::DuplicateIsotope { .. } => RnError::Invariant {
                what: "duplicate isotope name",
            },
            NetError::SpeciesOutOfRange { index, len, .. } => RnError::IndexOob {
                what: "reaction species index",
                index,
                len,
            },
            NetError::ZeroCoefficient { .. } => RnError::InvalidArg {
                what: "zero stoichiometric coefficient",
            },
            NetError::CoefficientOverflow { .. } => RnError::InvalidArg {
                what: "stoichiometric coefficient exceeds i32::MAX",
            },
            NetError::LengthMismatch {
                expected, actual, ..
            } => RnError::IndexOob {
                what: "mass number vector",
                index: actual,
                len: expected,
            },
        }
    }
}
