//! Post-run sanity checks on integration output.

use nalgebra::DVector;

use crate::error::{SimError, SimResult};

/// Default tolerance below which a negative abundance is reported.
///
/// Explicit Euler can push a nearly depleted species a few ulps below
/// zero; anything past this tolerance means the step size was too large
/// for the stiffness of the problem.
pub const DEFAULT_ABUNDANCE_TOL: f64 = 1e-14;

/// Error if any abundance is below `-tol`.
///
/// The engine never enforces this on its own; callers decide when to
/// check (after a run, or per recorded history entry).
pub fn check_non_negative(y: &DVector<f64>, tol: f64) -> SimResult<()> {
    for (index, &value) in y.iter().enumerate() {
        if value < -tol {
            return Err(SimError::NegativeAbundance { index, value });
        }
    }
    Ok(())
}
