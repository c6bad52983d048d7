//! Seven-coefficient REACLIB-style fit.

use crate::error::{RateError, RateResult};
use crate::evaluator::RateEvaluator;
use nf_state::NetworkState;

/// Rate from the standard seven-coefficient temperature fit:
///
/// ```text
/// ln lambda = a0 + a1/T9 + a2*T9^(-1/3) + a3*T9^(1/3)
///           + a4*T9 + a5*T9^(5/3) + a6*ln T9
/// ```
///
/// This is the parameterization used by the REACLIB and NACRE compilation
/// tables.
#[derive(Debug, Clone, Copy)]
pub struct ReaclibRate {
    a: [f64; 7],
}

impl ReaclibRate {
    /// Create a fit rate; all seven coefficients must be finite.
    pub fn new(a: [f64; 7]) -> RateResult<Self> {
        for &coeff in &a {
            if !coeff.is_finite() {
                return Err(RateError::NonFinite {
                    what: "fit coefficient",
                    value: coeff,
                });
            }
        }
        Ok(Self { a })
    }
}

impl RateEvaluator for ReaclibRate {
    fn eval(&self, state: &NetworkState) -> RateResult<f64> {
        let t9 = state.conditions().temperature_t9();
        let t913 = t9.cbrt();

        let ln_rate = self.a[0]
            + self.a[1] / t9
            + self.a[2] / t913
            + self.a[3] * t913
            + self.a[4] * t9
            + self.a[5] * t913.powi(5)
            + self.a[6] * t9.ln();

        let rate = ln_rate.exp();
        if !rate.is_finite() {
            return Err(RateError::NonFinite {
                what: "fit rate",
                value: rate,
            });
        }
        Ok(rate)
    }
}
