//! Frozen reaction network: species ordering plus the signed stoichiometry
//! matrix derived from every reaction.

use nalgebra::DMatrix;

use crate::error::{NetError, NetResult};
use crate::reaction::Reaction;
use nf_core::{ReactionId, SpeciesId};

/// Immutable network topology.
///
/// Rows of the stoichiometry matrix follow the isotope ordering, columns
/// follow the reaction ordering. Entry `(i, r)` is the net signed
/// coefficient of species `i` in reaction `r`: reactant coefficients count
/// negative, product coefficients positive, and a species on both sides
/// nets out. Given a flux vector `R` (one entry per reaction), the
/// abundance derivative contribution is `S * R`.
///
/// Once constructed the network never changes, so the matrix is built once
/// and handed out by reference.
#[derive(Debug)]
pub struct ReactionNetwork {
    isotopes: Vec<String>,
    reactions: Vec<Reaction>,
    stoichiometry: DMatrix<f64>,
}

impl ReactionNetwork {
    /// Validate the species list and every reaction's references, then
    /// freeze the network and build its stoichiometry matrix.
    pub fn new(isotopes: Vec<String>, reactions: Vec<Reaction>) -> NetResult<Self> {
        validate_isotopes(&isotopes)?;
        for reaction in &reactions {
            validate_species_refs(reaction, isotopes.len())?;
        }
        let stoichiometry = build_stoichiometry(isotopes.len(), &reactions);
        Ok(Self {
            isotopes,
            reactions,
            stoichiometry,
        })
    }

    /// Isotope names in storage order.
    pub fn isotopes(&self) -> &[String] {
        &self.isotopes
    }

    /// Number of species (matrix rows).
    pub fn species_count(&self) -> usize {
        self.isotopes.len()
    }

    /// Number of reactions (matrix columns).
    pub fn reaction_count(&self) -> usize {
        self.reactions.len()
    }

    /// All reactions in storage order.
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    /// Look up one reaction by id.
    pub fn reaction(&self, id: ReactionId) -> Option<&Reaction> {
        self.reactions.get(id.index() as usize)
    }

    /// Find a species id by isotope name.
    pub fn species_index(&self, name: &str) -> Option<SpeciesId> {
        self.isotopes
            .iter()
            .position(|n| n == name)
            .map(|i| SpeciesId::from_index(i as u32))
    }

    /// The signed N x M stoichiometry matrix.
    pub fn stoichiometry(&self) -> &DMatrix<f64> {
        &self.stoichiometry
    }
}

fn validate_isotopes(isotopes: &[String]) -> NetResult<()> {
    if isotopes.is_empty() {
        return Err(NetError::EmptyIsotopeList);
    }
    for (i, name) in isotopes.iter().enumerate() {
        if isotopes[..i].contains(name) {
            return Err(NetError::DuplicateIsotope { name: name.clone() });
        }
    }
    Ok(())
}

fn validate_species_refs(reaction: &Reaction, len: usize) -> NetResult<()> {
    let sides = reaction.reactants().iter().chain(reaction.products());
    for &(species, _) in sides {
        let index = species.index() as usize;
        if index >= len {
            return Err(NetError::SpeciesOutOfRange {
                reaction: reaction.name().to_string(),
                index,
                len,
            });
        }
    }
    Ok(())
}

fn build_stoichiometry(species: usize, reactions: &[Reaction]) -> DMatrix<f64> {
    let mut s = DMatrix::zeros(species, reactions.len());
    for (r, reaction) in reactions.iter().enumerate() {
        for &(species, nu) in reaction.reactants() {
            s[(species.index() as usize, r)] -= f64::from(nu);
        }
        for &(species, nu) in reaction.products() {
            s[(species.index() as usize, r)] += f64::from(nu);
        }
    }
    s
}
