//! Network abundance state and its update rules.

use crate::conditions::Conditions;
use crate::error::{StateError, StateResult};
use crate::step::StepControl;
use nalgebra::DVector;
use nf_core::{SpeciesId, ensure_finite};

/// Abundance state of a reaction network at one instant.
///
/// Holds the molar abundance vector `Y` (dimensionless, per baryon), a
/// scratch derivative vector `dY/dt`, the thermodynamic conditions and the
/// current time. The derivative vector is only meaningful between a
/// `reset_derivatives` call and the following `apply_update`; operators
/// accumulate into it through the add-only methods, so no operator can
/// overwrite another's contribution.
#[derive(Debug, Clone)]
pub struct NetworkState {
    isotopes: Vec<String>,
    y: DVector<f64>,
    dy: DVector<f64>,
    conditions: Conditions,
    t: f64,
}

impl NetworkState {
    /// Create a state from isotope names and initial abundances.
    ///
    /// Validates that the name and abundance lists have equal length and
    /// that every abundance is finite and non-negative.
    pub fn new(
        isotopes: Vec<String>,
        y0: &[f64],
        conditions: Conditions,
        t0: f64,
    ) -> StateResult<Self> {
        if isotopes.len() != y0.len() {
            return Err(StateError::LengthMismatch {
                what: "initial abundances",
                expected: isotopes.len(),
                actual: y0.len(),
            });
        }

        for (index, &value) in y0.iter().enumerate() {
            ensure_finite(value, "initial abundance")?;
            if value < 0.0 {
                return Err(StateError::NegativeAbundance { index, value });
            }
        }

        let t = ensure_finite(t0, "initial time")?;

        let n = y0.len();
        Ok(Self {
            isotopes,
            y: DVector::from_column_slice(y0),
            dy: DVector::zeros(n),
            conditions,
            t,
        })
    }

    /// Isotope names, in species-index order.
    pub fn isotopes(&self) -> &[String] {
        &self.isotopes
    }

    /// Number of species.
    pub fn len(&self) -> usize {
        self.isotopes.len()
    }

    /// True when the state holds no species.
    pub fn is_empty(&self) -> bool {
        self.isotopes.is_empty()
    }

    /// Current abundance vector.
    pub fn abundances(&self) -> &DVector<f64> {
        &self.y
    }

    /// Current accumulated derivative vector.
    pub fn derivatives(&self) -> &DVector<f64> {
        &self.dy
    }

    /// Abundance of one species (None if the index is out of range).
    pub fn abundance(&self, id: SpeciesId) -> Option<f64> {
        self.y.get(id.index() as usize).copied()
    }

    /// Thermodynamic conditions (fixed for the lifetime of the state).
    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    /// Current time.
    pub fn time(&self) -> f64 {
        self.t
    }

    /// Clear the derivative vector at the start of a step.
    pub fn reset_derivatives(&mut self) {
        self.dy.fill(0.0);
    }

    /// Accumulate a full derivative contribution: `dY += contrib`.
    pub fn add_to_dy(&mut self, contrib: &DVector<f64>) -> StateResult<()> {
        if contrib.len() != self.dy.len() {
            return Err(StateError::LengthMismatch {
                what: "derivative contribution",
                expected: self.dy.len(),
                actual: contrib.len(),
            });
        }
        self.dy += contrib;
        Ok(())
    }

    /// Accumulate a single-species derivative contribution.
    pub fn add_to_dy_at(&mut self, id: SpeciesId, value: f64) -> StateResult<()> {
        let index = id.index() as usize;
        match self.dy.get_mut(index) {
            Some(slot) => {
                *slot += value;
                Ok(())
            }
            None => Err(StateError::SpeciesOutOfRange {
                index,
                len: self.isotopes.len(),
            }),
        }
    }

    /// Forward Euler update: `Y += dY * dt`.
    ///
    /// The caller supplies `dt` from `compute_dt`; no clamping or
    /// non-negativity enforcement happens here.
    pub fn apply_update(&mut self, dt: f64) {
        self.y.axpy(dt, &self.dy, 1.0);
    }

    /// Advance the clock after an update.
    pub fn advance_time(&mut self, dt: f64) {
        self.t += dt;
    }

    /// Adaptive step size from the fractional-change rule.
    ///
    /// Species with `Y <= y_min` or `dY == 0` do not limit the step. When
    /// no species qualifies the fallback step is returned; otherwise the
    /// minimum candidate, clamped below by the floor.
    pub fn compute_dt(&self, control: &StepControl) -> f64 {
        let mut dt = f64::INFINITY;
        let mut limited = false;

        for (&y, &dy) in self.y.iter().zip(self.dy.iter()) {
            if y > control.y_min && dy != 0.0 {
                limited = true;
                let candidate = control.safety * (y / dy).abs();
                if candidate < dt {
                    dt = candidate;
                }
            }
        }

        if !limited {
            return control.dt_fallback;
        }
        dt.max(control.dt_floor)
    }
}
