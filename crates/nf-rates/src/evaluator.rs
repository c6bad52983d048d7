//! The rate evaluation seam between reaction data and physics.

use crate::error::RateResult;
use nf_state::NetworkState;

/// Evaluates a reaction rate coefficient against the current state.
///
/// Implementations are deterministic functions of the state (typically its
/// temperature, sometimes density) and their own fixed parameters. Passing
/// the whole state rather than a temperature keeps the seam open for
/// density-dependent laws without a signature change.
///
/// Rates are non-negative by contract. The reference implementations
/// validate parameters at construction and guard against non-finite
/// results at evaluation; the contract itself is not re-checked by the
/// operators that consume rates.
pub trait RateEvaluator: Send + Sync {
    /// Rate coefficient for the current conditions.
    fn eval(&self, state: &NetworkState) -> RateResult<f64>;
}
