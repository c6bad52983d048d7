//! Compile a validated network file into a runnable engine.

use std::collections::HashMap;
use std::sync::Arc;

use crate::schema::{NetworkFile, OperatorDef, RateDef, SpeciesCoeffDef};
use crate::validate::{ValidationError, validate_network_file};
use crate::{ProjectError, ProjectResult};

use nf_core::SpeciesId;
use nf_core::units::{cm3, g_per_cm3, t9};
use nf_net::{DEFAULT_CONSERVATION_TOL, NetworkBuilder, ReactionNetwork, conservation_residuals};
use nf_ops::{DecayOperator, MassActionOperator, Operator, TwoBodyOperator};
use nf_rates::{ArrheniusRate, ConstantRate, RateEvaluator, ReaclibRate, TabulatedRate};
use nf_sim::{Engine, EngineOptions};
use nf_state::{Conditions, NetworkState, StepControl};

/// A network file compiled into a ready-to-run engine.
pub struct CompiledRun {
    network: Arc<ReactionNetwork>,
    mass_numbers: Vec<f64>,
    engine: Engine,
    t_end: f64,
}

impl CompiledRun {
    /// The compiled reaction network.
    pub fn network(&self) -> &ReactionNetwork {
        &self.network
    }

    /// Mass numbers in species order.
    pub fn mass_numbers(&self) -> &[f64] {
        &self.mass_numbers
    }

    /// The configured end time from the file's run section.
    pub fn t_end(&self) -> f64 {
        self.t_end
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Run the engine to the file's configured end time.
    pub fn run(&mut self) -> ProjectResult<()> {
        self.engine.run(self.t_end)?;
        Ok(())
    }
}

/// Validate a network file and build its network, state, operator stack,
/// and engine.
///
/// When the run section keeps `check_conservation` on (the default), any
/// reaction with a nonzero baryon residual rejects the whole file.
pub fn compile(file: &NetworkFile) -> ProjectResult<CompiledRun> {
    validate_network_file(file)?;

    let mut builder = NetworkBuilder::new();
    let mut ids: HashMap<&str, SpeciesId> = HashMap::new();
    for def in &file.species {
        let id = builder.add_species(def.name.clone());
        ids.insert(def.name.as_str(), id);
    }

    for def in &file.reactions {
        let reactants = resolve_side(&ids, &def.reactants, &def.name, "reactants")?;
        let products = resolve_side(&ids, &def.products, &def.name, "products")?;
        builder.add_reaction(def.name.clone(), reactants, products, build_rate(&def.rate)?)?;
    }
    let network = Arc::new(builder.build()?);

    let mass_numbers: Vec<f64> = file
        .species
        .iter()
        .map(|s| f64::from(s.mass_number))
        .collect();

    if file.run.check_conservation && !file.reactions.is_empty() {
        let residuals = conservation_residuals(&network, &mass_numbers)?;
        for (r, residual) in residuals.iter().enumerate() {
            if residual.abs() > DEFAULT_CONSERVATION_TOL {
                return Err(ProjectError::NotConserved {
                    reaction: network.reactions()[r].name().to_string(),
                    residual: *residual,
                });
            }
        }
    }

    let conditions = Conditions::new(
        t9(file.conditions.temperature_t9),
        g_per_cm3(file.conditions.density_g_cm3),
        cm3(file.conditions.volume_cm3),
    )?;
    let isotopes: Vec<String> = file.species.iter().map(|s| s.name.clone()).collect();
    let y0: Vec<f64> = file.species.iter().map(|s| s.y0).collect();
    let state = NetworkState::new(isotopes, &y0, conditions, 0.0)?;

    let operators = build_operators(file, &ids, &network)?;

    let options = EngineOptions {
        step: StepControl {
            safety: file.run.safety,
            y_min: file.run.y_min,
            dt_floor: file.run.dt_floor,
            dt_fallback: file.run.dt_fallback,
        },
        record_history: file.run.record_history,
        clip_to_t_end: file.run.clip_to_t_end,
        max_steps: file.run.max_steps,
    };
    let engine = Engine::new(state, operators, options)?;

    Ok(CompiledRun {
        network,
        mass_numbers,
        engine,
        t_end: file.run.t_end,
    })
}

fn build_rate(def: &RateDef) -> ProjectResult<Box<dyn RateEvaluator>> {
    Ok(match def {
        RateDef::Constant { value } => Box::new(ConstantRate::new(*value)?),
        RateDef::Arrhenius { a, q } => Box::new(ArrheniusRate::new(*a, *q)?),
        RateDef::ReaclibFit { a } => Box::new(ReaclibRate::new(*a)?),
        RateDef::Table { t9, rate } => Box::new(TabulatedRate::new(t9.clone(), rate.clone())?),
    })
}

/// Default stack when the file names no operators: mass action over the
/// file's reactions, or nothing at all for a reaction-free file.
fn build_operators(
    file: &NetworkFile,
    ids: &HashMap<&str, SpeciesId>,
    network: &Arc<ReactionNetwork>,
) -> ProjectResult<Vec<Box<dyn Operator>>> {
    if file.operators.is_empty() {
        if file.reactions.is_empty() {
            return Ok(vec![]);
        }
        return Ok(vec![Box::new(MassActionOperator::new(Arc::clone(network)))]);
    }

    let mut operators: Vec<Box<dyn Operator>> = Vec::with_capacity(file.operators.len());
    for (index, def) in file.operators.iter().enumerate() {
        match def {
            OperatorDef::MassAction => {
                operators.push(Box::new(MassActionOperator::new(Arc::clone(network))));
            }
            OperatorDef::TwoBody {
                reactant_i,
                reactant_j,
                product_k,
                rate,
            } => {
                let context = format!("operator {index} (TwoBody)");
                let op = TwoBodyOperator::new(
                    lookup(ids, reactant_i, &context)?,
                    lookup(ids, reactant_j, &context)?,
                    lookup(ids, product_k, &context)?,
                    *rate,
                )?;
                operators.push(Box::new(op));
            }
            OperatorDef::Decay { lambda } => {
                operators.push(Box::new(DecayOperator::new(*lambda)?));
            }
        }
    }
    Ok(operators)
}

fn resolve_side(
    ids: &HashMap<&str, SpeciesId>,
    side: &[SpeciesCoeffDef],
    reaction: &str,
    which: &str,
) -> ProjectResult<Vec<(SpeciesId, u32)>> {
    side.iter()
        .map(|entry| {
            let context = format!("reaction '{reaction}' {which}");
            Ok((lookup(ids, &entry.species, &context)?, entry.coeff))
        })
        .collect()
}

fn lookup(
    ids: &HashMap<&str, SpeciesId>,
    name: &str,
    context: &str,
) -> ProjectResult<SpeciesId> {
    ids.get(name).copied().ok_or_else(|| {
        ProjectError::Validation(ValidationError::MissingReference {
            id: name.to_string(),
            context: context.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ConditionsDef, ReactionDef, RunDef, SCHEMA_VERSION, SpeciesDef};

    fn species(name: &str, mass_number: u32, y0: f64) -> SpeciesDef {
        SpeciesDef {
            name: name.to_string(),
            mass_number,
            y0,
        }
    }

    fn coeff(name: &str, coeff: u32) -> SpeciesCoeffDef {
        SpeciesCoeffDef {
            species: name.to_string(),
            coeff,
        }
    }

    fn pp_file() -> NetworkFile {
        NetworkFile {
            version: SCHEMA_VERSION,
            name: "pp-chain".to_string(),
            species: vec![
                species("p", 1, 0.6),
                species("d", 2, 0.4),
                species("he3", 3, 0.0),
                species("he4", 4, 0.0),
            ],
            conditions: ConditionsDef::default(),
            reactions: vec![
                ReactionDef {
                    name: "p+p->d".to_string(),
                    reactants: vec![coeff("p", 2)],
                    products: vec![coeff("d", 1)],
                    rate: RateDef::Constant { value: 0.5 },
                },
                ReactionDef {
                    name: "p+d->he3".to_string(),
                    reactants: vec![coeff("p", 1), coeff("d", 1)],
                    products: vec![coeff("he3", 1)],
                    rate: RateDef::Constant { value: 0.3 },
                },
                ReactionDef {
                    name: "he3+he3->he4+2p".to_string(),
                    reactants: vec![coeff("he3", 2)],
                    products: vec![coeff("he4", 1), coeff("p", 2)],
                    rate: RateDef::Constant { value: 0.1 },
                },
            ],
            operators: vec![],
            run: RunDef::default(),
        }
    }

    #[test]
    fn compiles_pp_chain_with_default_operator_stack() {
        let mut compiled = compile(&pp_file()).unwrap();
        assert_eq!(compiled.network().reaction_count(), 3);
        assert_eq!(compiled.mass_numbers(), &[1.0, 2.0, 3.0, 4.0]);

        compiled.run().unwrap();
        let y = compiled.engine().state().abundances();
        // Hydrogen burned under the implicit mass-action operator.
        assert!(y[0] < 0.6);
        assert!(y[3] > 0.0);
    }

    #[test]
    fn conservation_gate_rejects_bad_mass_numbers() {
        let mut file = pp_file();
        // Deuterium mislabeled: p + p -> d now loses a nucleon.
        file.species[1].mass_number = 1;
        match compile(&file) {
            Err(ProjectError::NotConserved { reaction, residual }) => {
                assert_eq!(reaction, "p+p->d");
                assert_eq!(residual, -1.0);
            }
            other => panic!("expected NotConserved, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn conservation_gate_can_be_disabled() {
        let mut file = pp_file();
        file.species[1].mass_number = 1;
        file.run.check_conservation = false;
        assert!(compile(&file).is_ok());
    }

    #[test]
    fn reaction_free_file_coasts() {
        let file = NetworkFile {
            version: SCHEMA_VERSION,
            name: "coast".to_string(),
            species: vec![species("x", 1, 1.0)],
            conditions: ConditionsDef::default(),
            reactions: vec![],
            operators: vec![],
            run: RunDef {
                t_end: 0.01,
                ..RunDef::default()
            },
        };
        let mut compiled = compile(&file).unwrap();
        compiled.run().unwrap();
        assert_eq!(compiled.engine().state().abundances()[0], 1.0);
        assert!(compiled.engine().state().time() >= 0.01);
    }

    #[test]
    fn explicit_operator_stack_overrides_default() {
        let file = NetworkFile {
            version: SCHEMA_VERSION,
            name: "decay".to_string(),
            species: vec![species("x", 1, 1.0)],
            conditions: ConditionsDef::default(),
            reactions: vec![],
            operators: vec![OperatorDef::Decay { lambda: 0.5 }],
            run: RunDef {
                t_end: 1.0,
                ..RunDef::default()
            },
        };
        let mut compiled = compile(&file).unwrap();
        compiled.run().unwrap();
        let y = compiled.engine().state().abundances()[0];
        assert!(y < 1.0);
        assert!(y > 0.0);
    }
}
