//! Core trait for derivative-accumulating operators.

use nf_state::NetworkState;

use crate::error::OpResult;

/// Trait for physics terms that contribute to the abundance derivative.
///
/// An operator reads the current state (abundances, thermodynamic
/// conditions, time) and adds its contribution to the derivative
/// accumulator via the state's `add_to_dy*` methods. It must not write
/// abundances or advance time; the engine owns both.
///
/// Contributions are purely additive, so stacking several operators in a
/// step produces the same derivative regardless of application order.
pub trait Operator: Send + Sync {
    /// Operator name for debugging and diagnostics.
    fn name(&self) -> &str;

    /// Accumulate this operator's contribution into the state's
    /// derivative vector.
    fn apply(&self, state: &mut NetworkState) -> OpResult<()>;
}
