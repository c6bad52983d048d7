//! Single-reaction stoichiometry with an injected rate law.

use core::fmt;

use crate::error::{NetError, NetResult};
use nf_core::SpeciesId;
use nf_rates::RateEvaluator;

/// One nuclear reaction: canonical reactant and product stoichiometry plus
/// the rate evaluator that supplies its physics.
///
/// A reaction is written in the generic form
///
/// ```text
/// sum_i nu_i X_i  ->  sum_j nu_j Y_j
/// ```
///
/// Duplicate species in either list are merged at construction by summing
/// their coefficients (first-appearance order is kept), so `p + p -> d`
/// given as `[(p, 1), (p, 1)]` ends up as `[(p, 2)]`. Zero coefficients
/// are rejected, and canonical coefficients are bounded by `i32::MAX`.
///
/// Reactions store topology only: they never evaluate fluxes and never
/// integrate anything. All rate physics is injected through the evaluator.
pub struct Reaction {
    name: String,
    reactants: Vec<(SpeciesId, u32)>,
    products: Vec<(SpeciesId, u32)>,
    rate: Box<dyn RateEvaluator>,
}

impl Reaction {
    /// Create a reaction, canonicalizing both species lists.
    pub fn new(
        name: impl Into<String>,
        reactants: Vec<(SpeciesId, u32)>,
        products: Vec<(SpeciesId, u32)>,
        rate: Box<dyn RateEvaluator>,
    ) -> NetResult<Self> {
        let name = name.into();
        let reactants = compress(&name, reactants)?;
        let products = compress(&name, products)?;
        Ok(Self {
            name,
            reactants,
            products,
            rate,
        })
    }

    /// Human-readable name, used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonicalized reactant stoichiometry.
    pub fn reactants(&self) -> &[(SpeciesId, u32)] {
        &self.reactants
    }

    /// Canonicalized product stoichiometry.
    pub fn products(&self) -> &[(SpeciesId, u32)] {
        &self.products
    }

    /// The rate evaluator for this reaction.
    pub fn rate(&self) -> &dyn RateEvaluator {
        self.rate.as_ref()
    }
}

impl fmt::Debug for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reaction")
            .field("name", &self.name)
            .field("reactants", &self.reactants)
            .field("products", &self.products)
            .finish_non_exhaustive()
    }
}

/// Merge duplicate species entries by summing their coefficients.
///
/// Every canonical coefficient must fit in an `i32`; mass-action flux
/// evaluation raises abundances to these coefficients as signed powers.
fn compress(
    reaction: &str,
    entries: Vec<(SpeciesId, u32)>,
) -> NetResult<Vec<(SpeciesId, u32)>> {
    const MAX_NU: u32 = i32::MAX as u32;

    let mut merged: Vec<(SpeciesId, u32)> = Vec::with_capacity(entries.len());
    for (species, nu) in entries {
        if nu == 0 {
            return Err(NetError::ZeroCoefficient {
                reaction: reaction.to_string(),
                index: species.index() as usize,
            });
        }
        if nu > MAX_NU {
            return Err(NetError::CoefficientOverflow {
                reaction: reaction.to_string(),
                index: species.index() as usize,
            });
        }
        match merged.iter_mut().find(|(s, _)| *s == species) {
            Some((_, total)) => {
                *total = total
                    .checked_add(nu)
                    .filter(|t| *t <= MAX_NU)
                    .ok_or_else(|| NetError::CoefficientOverflow {
                        reaction: reaction.to_string(),
                        index: species.index() as usize,
                    })?;
            }
            None => merged.push((species, nu)),
        }
    }
    Ok(merged)
}
