//! Rate evaluation errors.

use thiserror::Error;

/// Result type for rate operations.
pub type RateResult<T> = Result<T, RateError>;

/// Errors that can occur while constructing or evaluating a rate law.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} = {value} outside the tabulated range [{min}, {max}]")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
