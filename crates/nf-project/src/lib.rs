//! nf-project: canonical network file format, validation, and compilation.

pub mod compile;
pub mod schema;
pub mod validate;

pub use compile::{CompiledRun, compile};
pub use schema::*;
pub use validate::{ValidationError, validate_network_file};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Reaction '{reaction}' does not conserve baryon number (residual {residual})")]
    NotConserved { reaction: String, residual: f64 },

    #[error("Network error: {0}")]
    Net(#[from] nf_net::NetError),

    #[error("Rate error: {0}")]
    Rate(#[from] nf_rates::RateError),

    #[error("State error: {0}")]
    State(#[from] nf_state::StateError),

    #[error("Operator error: {0}")]
    Operator(#[from] nf_ops::OpError),

    #[error("Simulation error: {0}")]
    Sim(#[from] nf_sim::SimError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<NetworkFile> {
    let content = std::fs::read_to_string(path)?;
    let file: NetworkFile = serde_yaml::from_str(&content)?;
    validate_network_file(&file)?;
    Ok(file)
}

pub fn save_yaml(path: &std::path::Path, file: &NetworkFile) -> ProjectResult<()> {
    validate_network_file(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<NetworkFile> {
    let content = std::fs::read_to_string(path)?;
    let file: NetworkFile = serde_json::from_str(&content)?;
    validate_network_file(&file)?;
    Ok(file)
}

pub fn save_json(path: &std::path::Path, file: &NetworkFile) -> ProjectResult<()> {
    validate_network_file(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a network file, dispatching on the path extension.
///
/// `.json` loads as JSON; everything else is treated as YAML.
pub fn load(path: &std::path::Path) -> ProjectResult<NetworkFile> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}
