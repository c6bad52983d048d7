//! Error types for state construction and mutation.

use nf_core::RnError;
use thiserror::Error;

/// Result type for state operations.
pub type StateResult<T> = Result<T, StateError>;

/// Errors that can occur while constructing or mutating a network state.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Species index {index} out of range (len={len})")]
    SpeciesOutOfRange { index: usize, len: usize },

    #[error("Negative initial abundance at species {index}: {value}")]
    NegativeAbundance { index: usize, value: f64 },

    #[error("Numeric error: {0}")]
    Numeric(#[from] RnError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StateError::LengthMismatch {
            what: "abundances",
            expected: 4,
            actual: 3,
        };
        assert!(err.to_string().contains("abundances"));

        let err = StateError::SpeciesOutOfRange { index: 7, len: 4 };
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn numeric_error_wraps() {
        let err: StateError = nf_core::ensure_finite(f64::NAN, "t0").unwrap_err().into();
        assert!(matches!(err, StateError::Numeric(..)));
    }
}
