//! Baryon-number conservation checks on the stoichiometry matrix.
//!
//! Every physical nuclear reaction conserves baryon number, so with mass
//! numbers `A` (one per species) the product `A^T * S` must vanish column
//! by column. A nonzero entry means the corresponding reaction creates or
//! destroys nucleons, which is always a data-entry mistake.

use nalgebra::RowDVector;

use crate::error::{NetError, NetResult};
use crate::network::ReactionNetwork;

/// Default absolute tolerance for conservation residuals.
pub const DEFAULT_CONSERVATION_TOL: f64 = 1e-12;

/// Per-reaction conservation residuals `A^T * S` (one entry per reaction).
///
/// A residual of zero means the reaction conserves baryon number exactly.
pub fn conservation_residuals(
    network: &ReactionNetwork,
    mass_numbers: &[f64],
) -> NetResult<RowDVector<f64>> {
    if mass_numbers.len() != network.species_count() {
        return Err(NetError::LengthMismatch {
            what: "mass numbers",
            expected: network.species_count(),
            actual: mass_numbers.len(),
        });
    }
    let a = RowDVector::from_row_slice(mass_numbers);
    Ok(a * network.stoichiometry())
}

/// True when every reaction's residual is within `tol` of zero.
pub fn check_baryon_conservation(
    network: &ReactionNetwork,
    mass_numbers: &[f64],
    tol: f64,
) -> NetResult<bool> {
    let residuals = conservation_residuals(network, mass_numbers)?;
    Ok(residuals.iter().all(|r| r.abs() <= tol))
}
