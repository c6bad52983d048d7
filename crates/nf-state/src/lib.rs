//! Evolving abundance state for reaction network integration.
//!
//! Provides:
//! - `Conditions`: fixed thermodynamic environment (T9, density, volume)
//! - `NetworkState`: abundance vector, scratch derivatives, current time
//! - `StepControl`: heuristic adaptive time step rule and its knobs

pub mod conditions;
pub mod error;
pub mod state;
pub mod step;

pub use conditions::Conditions;
pub use error::{StateError, StateResult};
pub use state::NetworkState;
pub use step::StepControl;
