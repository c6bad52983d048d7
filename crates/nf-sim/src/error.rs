//! Simulation errors.

use nf_ops::OpError;
use thiserror::Error;

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while configuring or running the engine.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Negative abundance at species {index}: {value}")]
    NegativeAbundance { index: usize, value: f64 },

    #[error("Exceeded {max_steps} steps at t={t} before reaching t_end={t_end}")]
    StepLimit {
        max_steps: usize,
        t: f64,
        t_end: f64,
    },

    #[error("Operator error: {0}")]
    Operator(#[from] OpError),
}
