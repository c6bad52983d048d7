use nf_project::schema::*;
use nf_project::{ProjectError, compile, load, load_yaml, save_json, save_yaml};

fn decay_file() -> NetworkFile {
    NetworkFile {
        version: SCHEMA_VERSION,
        name: "Decay Demo".to_string(),
        species: vec![SpeciesDef {
            name: "x".to_string(),
            mass_number: 1,
            y0: 1.0,
        }],
        conditions: ConditionsDef::default(),
        reactions: vec![],
        operators: vec![OperatorDef::Decay { lambda: 0.5 }],
        run: RunDef {
            t_end: 10.0,
            ..RunDef::default()
        },
    }
}

fn pp_file() -> NetworkFile {
    NetworkFile {
        version: SCHEMA_VERSION,
        name: "PP Chain".to_string(),
        species: vec![
            SpeciesDef {
                name: "p".to_string(),
                mass_number: 1,
                y0: 0.6,
            },
            SpeciesDef {
                name: "d".to_string(),
                mass_number: 2,
                y0: 0.4,
            },
            SpeciesDef {
                name: "he3".to_string(),
                mass_number: 3,
                y0: 0.0,
            },
            SpeciesDef {
                name: "he4".to_string(),
                mass_number: 4,
                y0: 0.0,
            },
        ],
        conditions: ConditionsDef::default(),
        reactions: vec![
            ReactionDef {
                name: "p+p->d".to_string(),
                reactants: vec![SpeciesCoeffDef {
                    species: "p".to_string(),
                    coeff: 2,
                }],
                products: vec![SpeciesCoeffDef {
                    species: "d".to_string(),
                    coeff: 1,
                }],
                rate: RateDef::Constant { value: 0.5 },
            },
            ReactionDef {
                name: "p+d->he3".to_string(),
                reactants: vec![
                    SpeciesCoeffDef {
                        species: "p".to_string(),
                        coeff: 1,
                    },
                    SpeciesCoeffDef {
                        species: "d".to_string(),
                        coeff: 1,
                    },
                ],
                products: vec![SpeciesCoeffDef {
                    species: "he3".to_string(),
                    coeff: 1,
                }],
                rate: RateDef::Arrhenius { a: 0.3, q: 0.0 },
            },
            ReactionDef {
                name: "he3+he3->he4+2p".to_string(),
                reactants: vec![SpeciesCoeffDef {
                    species: "he3".to_string(),
                    coeff: 2,
                }],
                products: vec![
                    SpeciesCoeffDef {
                        species: "he4".to_string(),
                        coeff: 1,
                    },
                    SpeciesCoeffDef {
                        species: "p".to_string(),
                        coeff: 2,
                    },
                ],
                rate: RateDef::Table {
                    t9: vec![0.5, 1.0, 2.0],
                    rate: vec![0.1, 0.1, 0.1],
                },
            },
        ],
        operators: vec![],
        run: RunDef {
            t_end: 10.0,
            record_history: true,
            ..RunDef::default()
        },
    }
}

#[test]
fn roundtrip_yaml_decay_file() {
    let file = decay_file();
    let path = std::env::temp_dir().join("nf_project_roundtrip_decay.yaml");

    save_yaml(&path, &file).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(file, loaded);
}

#[test]
fn roundtrip_json_pp_file() {
    let file = pp_file();
    let path = std::env::temp_dir().join("nf_project_roundtrip_pp.json");

    save_json(&path, &file).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(file, loaded);
}

#[test]
fn load_dispatches_yaml_by_default() {
    let file = decay_file();
    let path = std::env::temp_dir().join("nf_project_dispatch.yaml");

    save_yaml(&path, &file).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(file, loaded);
}

#[test]
fn compiled_decay_file_matches_the_exponential() {
    let mut compiled = compile(&decay_file()).unwrap();
    compiled.run().unwrap();

    let state = compiled.engine().state();
    let analytic = (-0.5 * state.time()).exp();
    assert!((state.abundances()[0] - analytic).abs() < 5e-4);
}

#[test]
fn compiled_pp_file_conserves_weighted_total() {
    let mut compiled = compile(&pp_file()).unwrap();
    let initial: f64 = compiled
        .mass_numbers()
        .iter()
        .zip(compiled.engine().state().abundances().iter())
        .map(|(a, y)| a * y)
        .sum();

    compiled.run().unwrap();

    let total: f64 = compiled
        .mass_numbers()
        .iter()
        .zip(compiled.engine().state().abundances().iter())
        .map(|(a, y)| a * y)
        .sum();
    assert!((total - initial).abs() < 1e-9);
    assert_eq!(
        compiled.engine().history().t.len(),
        compiled.engine().steps()
    );
}

#[test]
fn save_refuses_invalid_files() {
    let mut file = decay_file();
    file.species.clear();
    let path = std::env::temp_dir().join("nf_project_invalid.yaml");

    assert!(matches!(
        save_yaml(&path, &file),
        Err(ProjectError::Validation(_))
    ));
}

#[test]
fn load_rejects_unknown_version() {
    let path = std::env::temp_dir().join("nf_project_future_version.yaml");
    let yaml = "version: 99\nname: future\nspecies:\n  - name: x\n    mass_number: 1\n";
    std::fs::write(&path, yaml).unwrap();

    assert!(matches!(
        load_yaml(&path),
        Err(ProjectError::Validation(_))
    ));
}
