//! Network file validation logic.

use std::collections::HashSet;

use crate::schema::{
    ConditionsDef, NetworkFile, OperatorDef, RateDef, ReactionDef, RunDef, SCHEMA_VERSION,
    SpeciesCoeffDef,
};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_network_file(file: &NetworkFile) -> Result<(), ValidationError> {
    if file.version != SCHEMA_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    if file.species.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "species".to_string(),
            value: "[]".to_string(),
            reason: "at least one species is required".to_string(),
        });
    }

    let mut species_names = HashSet::new();
    for def in &file.species {
        if !species_names.insert(def.name.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: def.name.clone(),
                context: "species".to_string(),
            });
        }
        let owner = format!("species '{}'", def.name);
        if def.mass_number == 0 {
            return Err(ValidationError::InvalidValue {
                field: format!("{owner} mass_number"),
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        validate_non_negative_finite("y0", def.y0, &owner)?;
    }

    validate_conditions(&file.conditions)?;

    let mut reaction_names = HashSet::new();
    for reaction in &file.reactions {
        if !reaction_names.insert(reaction.name.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: reaction.name.clone(),
                context: "reactions".to_string(),
            });
        }
        validate_reaction(reaction, &species_names)?;
    }

    for (index, operator) in file.operators.iter().enumerate() {
        validate_operator(index, operator, &species_names, !file.reactions.is_empty())?;
    }

    validate_run(&file.run)
}

fn validate_conditions(conditions: &ConditionsDef) -> Result<(), ValidationError> {
    validate_positive_finite("temperature_t9", conditions.temperature_t9, "conditions")?;
    validate_positive_finite("density_g_cm3", conditions.density_g_cm3, "conditions")?;
    validate_positive_finite("volume_cm3", conditions.volume_cm3, "conditions")
}

fn validate_reaction(
    reaction: &ReactionDef,
    species: &HashSet<&str>,
) -> Result<(), ValidationError> {
    validate_side(&reaction.name, "reactants", &reaction.reactants, species)?;
    validate_side(&reaction.name, "products", &reaction.products, species)?;

    let owner = format!("reaction '{}' rate", reaction.name);
    match &reaction.rate {
        RateDef::Constant { value } => {
            validate_non_negative_finite("value", *value, &owner)?;
        }
        RateDef::Arrhenius { a, q } => {
            validate_non_negative_finite("a", *a, &owner)?;
            validate_finite("q", *q, &owner)?;
        }
        RateDef::ReaclibFit { a } => {
            for (i, coeff) in a.iter().enumerate() {
                validate_finite(&format!("a[{i}]"), *coeff, &owner)?;
            }
        }
        RateDef::Table { t9, rate } => {
            if t9.len() != rate.len() {
                return Err(ValidationError::InvalidValue {
                    field: format!("{owner} table"),
                    value: format!("{} t9 vs {} rate points", t9.len(), rate.len()),
                    reason: "t9 and rate must have the same length".to_string(),
                });
            }
            if t9.len() < 2 {
                return Err(ValidationError::InvalidValue {
                    field: format!("{owner} table"),
                    value: t9.len().to_string(),
                    reason: "needs at least two points".to_string(),
                });
            }
            for (i, value) in t9.iter().enumerate() {
                validate_finite(&format!("t9[{i}]"), *value, &owner)?;
            }
            for (i, value) in rate.iter().enumerate() {
                validate_non_negative_finite(&format!("rate[{i}]"), *value, &owner)?;
            }
            for w in t9.windows(2) {
                if w[1] <= w[0] {
                    return Err(ValidationError::InvalidValue {
                        field: format!("{owner} t9"),
                        value: format!("{} then {}", w[0], w[1]),
                        reason: "grid must be strictly increasing".to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}

fn validate_side(
    reaction_name: &str,
    which: &str,
    side: &[SpeciesCoeffDef],
    species: &HashSet<&str>,
) -> Result<(), ValidationError> {
    for entry in side {
        if !species.contains(entry.species.as_str()) {
            return Err(ValidationError::MissingReference {
                id: entry.species.clone(),
                context: format!("reaction '{reaction_name}' {which}"),
            });
        }
        if entry.coeff == 0 {
            return Err(ValidationError::InvalidValue {
                field: format!(
                    "reaction '{reaction_name}' {which} coeff for '{}'",
                    entry.species
                ),
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_operator(
    index: usize,
    operator: &OperatorDef,
    species: &HashSet<&str>,
    has_reactions: bool,
) -> Result<(), ValidationError> {
    let owner = format!("operator {index}");
    match operator {
        OperatorDef::MassAction => {
            if !has_reactions {
                return Err(ValidationError::InvalidValue {
                    field: format!("{owner} (MassAction)"),
                    value: "no reactions".to_string(),
                    reason: "MassAction requires at least one reaction".to_string(),
                });
            }
        }
        OperatorDef::TwoBody {
            reactant_i,
            reactant_j,
            product_k,
            rate,
        } => {
            for name in [reactant_i, reactant_j, product_k] {
                if !species.contains(name.as_str()) {
                    return Err(ValidationError::MissingReference {
                        id: name.clone(),
                        context: format!("{owner} (TwoBody)"),
                    });
                }
            }
            validate_non_negative_finite("rate", *rate, &owner)?;
        }
        OperatorDef::Decay { lambda } => {
            validate_non_negative_finite("lambda", *lambda, &owner)?;
        }
    }
    Ok(())
}

fn validate_run(run: &RunDef) -> Result<(), ValidationError> {
    validate_finite("t_end", run.t_end, "run")?;
    validate_positive_finite("safety", run.safety, "run")?;
    validate_non_negative_finite("y_min", run.y_min, "run")?;
    validate_positive_finite("dt_floor", run.dt_floor, "run")?;
    validate_positive_finite("dt_fallback", run.dt_fallback, "run")?;
    if run.max_steps == 0 {
        return Err(ValidationError::InvalidValue {
            field: "run max_steps".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_positive_finite(field: &str, value: f64, owner: &str) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("{owner} {field}"),
            value: value.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }
    Ok(())
}

fn validate_non_negative_finite(
    field: &str,
    value: f64,
    owner: &str,
) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("{owner} {field}"),
            value: value.to_string(),
            reason: "must be non-negative and finite".to_string(),
        });
    }
    Ok(())
}

fn validate_finite(field: &str, value: f64, owner: &str) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: format!("{owner} {field}"),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RunDef, SpeciesDef};

    fn minimal() -> NetworkFile {
        NetworkFile {
            version: SCHEMA_VERSION,
            name: "test".to_string(),
            species: vec![SpeciesDef {
                name: "p".to_string(),
                mass_number: 1,
                y0: 1.0,
            }],
            conditions: ConditionsDef::default(),
            reactions: vec![],
            operators: vec![],
            run: RunDef::default(),
        }
    }

    fn coeff(species: &str, coeff: u32) -> SpeciesCoeffDef {
        SpeciesCoeffDef {
            species: species.to_string(),
            coeff,
        }
    }

    #[test]
    fn minimal_file_is_valid() {
        assert!(validate_network_file(&minimal()).is_ok());
    }

    #[test]
    fn rejects_unknown_version() {
        let mut file = minimal();
        file.version = 2;
        assert!(matches!(
            validate_network_file(&file),
            Err(ValidationError::UnsupportedVersion { version: 2 })
        ));
    }

    #[test]
    fn rejects_empty_species() {
        let mut file = minimal();
        file.species.clear();
        assert!(matches!(
            validate_network_file(&file),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_species() {
        let mut file = minimal();
        file.species.push(SpeciesDef {
            name: "p".to_string(),
            mass_number: 1,
            y0: 0.0,
        });
        assert!(matches!(
            validate_network_file(&file),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn rejects_negative_initial_abundance() {
        let mut file = minimal();
        file.species[0].y0 = -0.1;
        assert!(matches!(
            validate_network_file(&file),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn rejects_unknown_reactant() {
        let mut file = minimal();
        file.reactions.push(ReactionDef {
            name: "bad".to_string(),
            reactants: vec![coeff("li7", 1)],
            products: vec![],
            rate: RateDef::Constant { value: 1.0 },
        });
        assert!(matches!(
            validate_network_file(&file),
            Err(ValidationError::MissingReference { id, .. }) if id == "li7"
        ));
    }

    #[test]
    fn rejects_zero_coefficient() {
        let mut file = minimal();
        file.reactions.push(ReactionDef {
            name: "bad".to_string(),
            reactants: vec![coeff("p", 0)],
            products: vec![],
            rate: RateDef::Constant { value: 1.0 },
        });
        assert!(matches!(
            validate_network_file(&file),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn rejects_ragged_rate_table() {
        let mut file = minimal();
        file.reactions.push(ReactionDef {
            name: "tabulated".to_string(),
            reactants: vec![coeff("p", 1)],
            products: vec![],
            rate: RateDef::Table {
                t9: vec![0.5, 1.0, 2.0],
                rate: vec![1.0, 2.0],
            },
        });
        assert!(matches!(
            validate_network_file(&file),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn rejects_non_increasing_rate_table() {
        let mut file = minimal();
        file.reactions.push(ReactionDef {
            name: "tabulated".to_string(),
            reactants: vec![coeff("p", 1)],
            products: vec![],
            rate: RateDef::Table {
                t9: vec![0.5, 2.0, 1.0],
                rate: vec![1.0, 2.0, 3.0],
            },
        });
        assert!(matches!(
            validate_network_file(&file),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn mass_action_requires_reactions() {
        let mut file = minimal();
        file.operators.push(OperatorDef::MassAction);
        assert!(matches!(
            validate_network_file(&file),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn two_body_references_must_resolve() {
        let mut file = minimal();
        file.operators.push(OperatorDef::TwoBody {
            reactant_i: "p".to_string(),
            reactant_j: "p".to_string(),
            product_k: "d".to_string(),
            rate: 0.5,
        });
        assert!(matches!(
            validate_network_file(&file),
            Err(ValidationError::MissingReference { id, .. }) if id == "d"
        ));
    }

    #[test]
    fn rejects_zero_max_steps() {
        let mut file = minimal();
        file.run.max_steps = 0;
        assert!(matches!(
            validate_network_file(&file),
            Err(ValidationError::InvalidValue { .. })
        ));
    }
}
