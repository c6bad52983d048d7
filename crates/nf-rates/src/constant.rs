//! State-independent rate coefficient.

use crate::error::{RateError, RateResult};
use crate::evaluator::RateEvaluator;
use nf_state::NetworkState;

/// A fixed rate coefficient, independent of the state.
#[derive(Debug, Clone, Copy)]
pub struct ConstantRate {
    value: f64,
}

impl ConstantRate {
    /// Create a constant rate; the value must be finite and non-negative.
    pub fn new(value: f64) -> RateResult<Self> {
        if !value.is_finite() {
            return Err(RateError::NonFinite {
                what: "rate coefficient",
                value,
            });
        }
        if value < 0.0 {
            return Err(RateError::InvalidArg {
                what: "rate coefficient must be non-negative",
            });
        }
        Ok(Self { value })
    }
}

impl RateEvaluator for ConstantRate {
    fn eval(&self, _state: &NetworkState) -> RateResult<f64> {
        Ok(self.value)
    }
}
