//! Single two-body reaction channel with a constant rate.

use nf_core::SpeciesId;
use nf_state::NetworkState;

use crate::error::{OpError, OpResult};
use crate::traits::Operator;

/// One hard-wired channel `i + j -> k` with flux `rate * Y_i * Y_j`.
///
/// Useful for quick models that do not warrant a full network. When the
/// two reactants are the same species its derivative is decremented twice,
/// consistent with the mass-action operator's `nu = 2` column.
#[derive(Debug, Clone, Copy)]
pub struct TwoBodyOperator {
    reactant_i: SpeciesId,
    reactant_j: SpeciesId,
    product_k: SpeciesId,
    rate: f64,
}

impl TwoBodyOperator {
    pub fn new(
        reactant_i: SpeciesId,
        reactant_j: SpeciesId,
        product_k: SpeciesId,
        rate: f64,
    ) -> OpResult<Self> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(OpError::InvalidArg {
                what: "two-body rate must be finite and non-negative",
            });
        }
        Ok(Self {
            reactant_i,
            reactant_j,
            product_k,
            rate,
        })
    }
}

impl Operator for TwoBodyOperator {
    fn name(&self) -> &str {
        "two_body"
    }

    fn apply(&self, state: &mut NetworkState) -> OpResult<()> {
        let len = state.len();
        for id in [self.reactant_i, self.reactant_j, self.product_k] {
            let index = id.index() as usize;
            if index >= len {
                return Err(OpError::SpeciesOutOfRange {
                    operator: "two_body",
                    index,
                    len,
                });
            }
        }

        let y = state.abundances();
        let flux = self.rate
            * y[self.reactant_i.index() as usize]
            * y[self.reactant_j.index() as usize];

        state.add_to_dy_at(self.reactant_i, -flux)?;
        state.add_to_dy_at(self.reactant_j, -flux)?;
        state.add_to_dy_at(self.product_k, flux)?;
        Ok(())
    }
}
