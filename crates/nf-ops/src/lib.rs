//! Physics operators that accumulate abundance derivatives.
//!
//! Each operator reads a `NetworkState` and adds its contribution to the
//! derivative accumulator. Operators never touch abundances or time
//! directly, so any number of them can be stacked in a step and the result
//! is independent of their order.
//!
//! Provides:
//! - `Operator`: the additive contribution trait
//! - `MassActionOperator`: full mass-action kinetics over a network
//! - `TwoBodyOperator`: a single two-body channel with a constant rate
//! - `DecayOperator`: uniform exponential decay of every species

pub mod decay;
pub mod error;
pub mod mass_action;
pub mod traits;
pub mod two_body;

pub use decay::DecayOperator;
pub use error::{OpError, OpResult};
pub use mass_action::MassActionOperator;
pub use traits::Operator;
pub use two_body::TwoBodyOperator;
