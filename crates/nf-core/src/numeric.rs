use crate::RnError;

/// Scalar type for abundances, fluxes, and times
pub type Real = f64;

/// Paired absolute and relative comparison tolerances
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, RnError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RnError::NonFinite { what, value: v })
    }
}
