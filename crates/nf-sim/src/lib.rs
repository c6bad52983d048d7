//! Time integration of reaction networks.
//!
//! The engine drives a `NetworkState` through explicit Euler steps with an
//! adaptive step size derived from the fastest-changing species. Each step
//! clears the derivative accumulator, applies every operator in turn, picks
//! a step size, and commits the update.
//!
//! Provides:
//! - `Engine`, `EngineOptions`, `RunRecord`: the integration loop
//! - `check_non_negative`: post-run abundance diagnostic

pub mod diagnostics;
pub mod engine;
pub mod error;

pub use diagnostics::{DEFAULT_ABUNDANCE_TOL, check_non_negative};
pub use engine::{Engine, EngineOptions, RunRecord};
pub use error::{SimError, SimResult};
