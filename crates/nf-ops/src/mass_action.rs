//! Mass-action kinetics over a full reaction network.

use std::sync::Arc;

use nalgebra::DVector;

use nf_net::ReactionNetwork;
use nf_state::NetworkState;

use crate::error::{OpError, OpResult};
use crate::traits::Operator;

/// Accumulates `dY += S * R` for every reaction in a network.
///
/// The flux of reaction `r` follows the law of mass action:
///
/// ```text
/// R_r = lambda_r(state) * prod_i Y_i ^ nu_i
/// ```
///
/// with the product over the reaction's canonical reactant list. A
/// reaction with no reactants contributes its bare rate, which models a
/// constant source term.
#[derive(Debug, Clone)]
pub struct MassActionOperator {
    network: Arc<ReactionNetwork>,
}

impl MassActionOperator {
    pub fn new(network: Arc<ReactionNetwork>) -> Self {
        Self { network }
    }

    /// The network this operator evaluates.
    pub fn network(&self) -> &ReactionNetwork {
        &self.network
    }

    /// Per-reaction mass-action fluxes at the given state.
    fn fluxes(&self, state: &NetworkState) -> OpResult<DVector<f64>> {
        let y = state.abundances();
        let mut fluxes = DVector::zeros(self.network.reaction_count());
        for (r, reaction) in self.network.reactions().iter().enumerate() {
            let lambda = reaction.rate().eval(state).map_err(|source| OpError::Rate {
                reaction: reaction.name().to_string(),
                source,
            })?;
            let mut flux = lambda;
            for &(species, nu) in reaction.reactants() {
                // canonical coefficients are bounded by i32::MAX at construction
                flux *= y[species.index() as usize].powi(nu as i32);
            }
            fluxes[r] = flux;
        }
        Ok(fluxes)
    }
}

impl Operator for MassActionOperator {
    fn name(&self) -> &str {
        "mass_action"
    }

    fn apply(&self, state: &mut NetworkState) -> OpResult<()> {
        let expected = self.network.species_count();
        if state.len() != expected {
            return Err(OpError::SizeMismatch {
                operator: "mass_action",
                expected,
                actual: state.len(),
            });
        }
        let fluxes = self.fluxes(state)?;
        let contrib = self.network.stoichiometry() * fluxes;
        state.add_to_dy(&contrib)?;
        Ok(())
    }
}
