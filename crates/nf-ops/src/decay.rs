//! Uniform exponential decay.

use nf_state::NetworkState;

use crate::error::{OpError, OpResult};
use crate::traits::Operator;

/// Applies `dY_i += -lambda * Y_i` to every species.
///
/// A minimal operator, handy as a stand-in term in tests and demos: with
/// nothing else in the stack the exact solution is `Y(t) = Y0 * exp(-lambda * t)`.
#[derive(Debug, Clone, Copy)]
pub struct DecayOperator {
    lambda: f64,
}

impl DecayOperator {
    pub fn new(lambda: f64) -> OpResult<Self> {
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(OpError::InvalidArg {
                what: "decay constant must be finite and non-negative",
            });
        }
        Ok(Self { lambda })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Operator for DecayOperator {
    fn name(&self) -> &str {
        "decay"
    }

    fn apply(&self, state: &mut NetworkState) -> OpResult<()> {
        let contrib = state.abundances().scale(-self.lambda);
        state.add_to_dy(&contrib)?;
        Ok(())
    }
}
