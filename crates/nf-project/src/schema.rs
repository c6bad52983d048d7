//! Network file schema definitions.

use serde::{Deserialize, Serialize};

use nf_state::StepControl;

/// Current schema version. Files carry an explicit `version` key so older
/// tools fail loudly instead of misreading newer files.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkFile {
    pub version: u32,
    pub name: String,
    pub species: Vec<SpeciesDef>,
    #[serde(default)]
    pub conditions: ConditionsDef,
    #[serde(default)]
    pub reactions: Vec<ReactionDef>,
    #[serde(default)]
    pub operators: Vec<OperatorDef>,
    #[serde(default)]
    pub run: RunDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeciesDef {
    pub name: String,
    /// Mass number A, used by the baryon-conservation gate.
    pub mass_number: u32,
    /// Initial molar abundance.
    #[serde(default)]
    pub y0: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionsDef {
    /// Temperature in units of 10^9 K.
    #[serde(default = "default_unit")]
    pub temperature_t9: f64,
    /// Density in g/cm^3.
    #[serde(default = "default_unit")]
    pub density_g_cm3: f64,
    /// Volume in cm^3.
    #[serde(default = "default_unit")]
    pub volume_cm3: f64,
}

impl Default for ConditionsDef {
    fn default() -> Self {
        Self {
            temperature_t9: 1.0,
            density_g_cm3: 1.0,
            volume_cm3: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReactionDef {
    pub name: String,
    #[serde(default)]
    pub reactants: Vec<SpeciesCoeffDef>,
    #[serde(default)]
    pub products: Vec<SpeciesCoeffDef>,
    pub rate: RateDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeciesCoeffDef {
    pub species: String,
    #[serde(default = "default_coeff")]
    pub coeff: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum RateDef {
    /// Temperature-independent rate.
    Constant { value: f64 },
    /// `a * exp(-q / T9)`.
    Arrhenius { a: f64, q: f64 },
    /// Seven-coefficient REACLIB-style fit in T9.
    ReaclibFit { a: [f64; 7] },
    /// Tabulated rate, linearly interpolated over a strictly increasing
    /// T9 grid. Temperatures outside the grid are a hard error.
    Table { t9: Vec<f64>, rate: Vec<f64> },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum OperatorDef {
    /// Mass-action kinetics over every reaction in the file.
    MassAction,
    /// A single hard-wired channel `i + j -> k` with a constant rate.
    TwoBody {
        reactant_i: String,
        reactant_j: String,
        product_k: String,
        rate: f64,
    },
    /// Uniform exponential decay of every species.
    Decay { lambda: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunDef {
    #[serde(default = "default_t_end")]
    pub t_end: f64,
    #[serde(default = "default_safety")]
    pub safety: f64,
    #[serde(default = "default_y_min")]
    pub y_min: f64,
    #[serde(default = "default_dt_floor")]
    pub dt_floor: f64,
    #[serde(default = "default_dt_fallback")]
    pub dt_fallback: f64,
    #[serde(default)]
    pub record_history: bool,
    #[serde(default)]
    pub clip_to_t_end: bool,
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
    /// Reject the file when a reaction fails the baryon-conservation gate.
    #[serde(default = "default_true")]
    pub check_conservation: bool,
}

impl Default for RunDef {
    fn default() -> Self {
        Self {
            t_end: default_t_end(),
            safety: default_safety(),
            y_min: default_y_min(),
            dt_floor: default_dt_floor(),
            dt_fallback: default_dt_fallback(),
            record_history: false,
            clip_to_t_end: false,
            max_steps: default_max_steps(),
            check_conservation: true,
        }
    }
}

fn default_unit() -> f64 {
    1.0
}

fn default_coeff() -> u32 {
    1
}

fn default_t_end() -> f64 {
    1.0
}

fn default_safety() -> f64 {
    StepControl::default().safety
}

fn default_y_min() -> f64 {
    StepControl::default().y_min
}

fn default_dt_floor() -> f64 {
    StepControl::default().dt_floor
}

fn default_dt_fallback() -> f64 {
    StepControl::default().dt_fallback
}

fn default_max_steps() -> usize {
    1_000_000
}

fn default_true() -> bool {
    true
}
