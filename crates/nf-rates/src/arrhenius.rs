//! Arrhenius-form rate law.

use crate::error::{RateError, RateResult};
use crate::evaluator::RateEvaluator;
use nf_state::NetworkState;

/// Simple Arrhenius law: `lambda(T9) = a * exp(-q / T9)`.
///
/// `q` is the activation scale in the same units as the state temperature
/// (10^9 K). A negative `q` is accepted; the result is still guarded
/// against overflow at evaluation.
#[derive(Debug, Clone, Copy)]
pub struct ArrheniusRate {
    a: f64,
    q: f64,
}

impl ArrheniusRate {
    /// Create an Arrhenius rate; `a` must be finite and non-negative,
    /// `q` finite.
    pub fn new(a: f64, q: f64) -> RateResult<Self> {
        if !a.is_finite() {
            return Err(RateError::NonFinite {
                what: "pre-exponential factor",
                value: a,
            });
        }
        if a < 0.0 {
            return Err(RateError::InvalidArg {
                what: "pre-exponential factor must be non-negative",
            });
        }
        if !q.is_finite() {
            return Err(RateError::NonFinite {
                what: "activation scale",
                value: q,
            });
        }
        Ok(Self { a, q })
    }
}

impl RateEvaluator for ArrheniusRate {
    fn eval(&self, state: &NetworkState) -> RateResult<f64> {
        let t9 = state.conditions().temperature_t9();
        let rate = self.a * (-self.q / t9).exp();
        if !rate.is_finite() {
            return Err(RateError::NonFinite {
                what: "arrhenius rate",
                value: rate,
            });
        }
        Ok(rate)
    }
}
