//! Foundation errors shared by every nucleoflow crate.

use thiserror::Error;

/// Result type for foundation operations.
pub type RnResult<T> = Result<T, RnError>;

/// Lowest-level error cases; domain crates wrap or map into these.
#[derive(Error, Debug)]
pub enum RnError {
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Index {index} out of range for {what} (len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
