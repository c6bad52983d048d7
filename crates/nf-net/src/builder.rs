//! Incremental network builder.

use crate::error::NetResult;
use crate::network::ReactionNetwork;
use crate::reaction::Reaction;
use nf_core::{ReactionId, SpeciesId};
use nf_rates::RateEvaluator;

/// Builder for constructing a reaction network incrementally.
///
/// Use `add_species` and `add_reaction` to build up the network, then call
/// `build()` to validate and freeze it into an immutable `ReactionNetwork`.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    isotopes: Vec<String>,
    reactions: Vec<Reaction>,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a species and return its ID.
    ///
    /// IDs follow insertion order, so the first species added is row zero
    /// of the stoichiometry matrix.
    pub fn add_species(&mut self, name: impl Into<String>) -> SpeciesId {
        let id = SpeciesId::from_index(self.isotopes.len() as u32);
        self.isotopes.push(name.into());
        id
    }

    /// Add a reaction over previously added species and return its ID.
    ///
    /// Duplicate species entries are merged by summing coefficients; a zero
    /// coefficient is rejected here. Species ids are range-checked later by
    /// `build()`.
    pub fn add_reaction(
        &mut self,
        name: impl Into<String>,
        reactants: Vec<(SpeciesId, u32)>,
        products: Vec<(SpeciesId, u32)>,
        rate: Box<dyn RateEvaluator>,
    ) -> NetResult<ReactionId> {
        let id = ReactionId::from_index(self.reactions.len() as u32);
        self.reactions
            .push(Reaction::new(name, reactants, products, rate)?);
        Ok(id)
    }

    /// Number of species added so far.
    pub fn species_count(&self) -> usize {
        self.isotopes.len()
    }

    /// Build and validate the network, returning an immutable `ReactionNetwork`.
    pub fn build(self) -> NetResult<ReactionNetwork> {
        ReactionNetwork::new(self.isotopes, self.reactions)
    }
}
