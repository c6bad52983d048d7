//! Tabulated rates with linear interpolation.

use crate::error::{RateError, RateResult};
use crate::evaluator::RateEvaluator;
use nf_state::NetworkState;

/// Rate interpolated from a `(T9, rate)` table.
///
/// Interpolation is piecewise linear over a strictly increasing
/// temperature grid. Evaluation outside the grid is an error rather than
/// an extrapolation; compilation tables are only trustworthy inside their
/// stated range.
#[derive(Debug, Clone)]
pub struct TabulatedRate {
    t9: Vec<f64>,
    rate: Vec<f64>,
}

impl TabulatedRate {
    /// Create a tabulated rate from parallel grids.
    ///
    /// Validates that the grids have equal length with at least two
    /// points, that temperatures are finite and strictly increasing, and
    /// that rates are finite and non-negative.
    pub fn new(t9: Vec<f64>, rate: Vec<f64>) -> RateResult<Self> {
        if t9.len() != rate.len() {
            return Err(RateError::InvalidArg {
                what: "temperature and rate grids must have equal length",
            });
        }
        if t9.len() < 2 {
            return Err(RateError::InvalidArg {
                what: "rate table needs at least two points",
            });
        }
        for &t in &t9 {
            if !t.is_finite() {
                return Err(RateError::NonFinite {
                    what: "table temperature",
                    value: t,
                });
            }
        }
        if t9.windows(2).any(|w| w[0] >= w[1]) {
            return Err(RateError::InvalidArg {
                what: "temperature grid must be strictly increasing",
            });
        }
        for &r in &rate {
            if !r.is_finite() {
                return Err(RateError::NonFinite {
                    what: "table rate",
                    value: r,
                });
            }
            if r < 0.0 {
                return Err(RateError::InvalidArg {
                    what: "table rates must be non-negative",
                });
            }
        }
        Ok(Self { t9, rate })
    }
}

impl RateEvaluator for TabulatedRate {
    fn eval(&self, state: &NetworkState) -> RateResult<f64> {
        let t = state.conditions().temperature_t9();
        let min = self.t9[0];
        let max = self.t9[self.t9.len() - 1];
        if t < min || t > max {
            return Err(RateError::OutOfRange {
                what: "temperature",
                value: t,
                min,
                max,
            });
        }

        let i = self.t9.partition_point(|&x| x < t);
        if i == 0 {
            return Ok(self.rate[0]);
        }
        let (t0, t1) = (self.t9[i - 1], self.t9[i]);
        let w = (t - t0) / (t1 - t0);
        Ok(self.rate[i - 1] + w * (self.rate[i] - self.rate[i - 1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_core::units::{cm3, g_per_cm3, t9};
    use nf_state::Conditions;

    fn state_at(temp_t9: f64) -> NetworkState {
        let cond = Conditions::new(t9(temp_t9), g_per_cm3(1.0), cm3(1.0)).unwrap();
        NetworkState::new(vec!["x".into()], &[1.0], cond, 0.0).unwrap()
    }

    fn table() -> TabulatedRate {
        TabulatedRate::new(vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 40.0]).unwrap()
    }

    #[test]
    fn interpolates_between_points() {
        assert!((table().eval(&state_at(1.5)).unwrap() - 15.0).abs() < 1e-12);
        assert!((table().eval(&state_at(2.5)).unwrap() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn exact_at_grid_points() {
        assert_eq!(table().eval(&state_at(1.0)).unwrap(), 10.0);
        assert_eq!(table().eval(&state_at(2.0)).unwrap(), 20.0);
        assert_eq!(table().eval(&state_at(3.0)).unwrap(), 40.0);
    }

    #[test]
    fn out_of_range_is_an_error() {
        assert!(matches!(
            table().eval(&state_at(0.5)),
            Err(RateError::OutOfRange { .. })
        ));
        assert!(matches!(
            table().eval(&state_at(3.5)),
            Err(RateError::OutOfRange { .. })
        ));
    }

    #[test]
    fn reject_unsorted_grid() {
        let result = TabulatedRate::new(vec![1.0, 1.0, 3.0], vec![1.0, 2.0, 3.0]);
        assert!(result.is_err());
    }

    #[test]
    fn reject_length_mismatch() {
        let result = TabulatedRate::new(vec![1.0, 2.0], vec![1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn reject_single_point() {
        let result = TabulatedRate::new(vec![1.0], vec![1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn reject_negative_rate() {
        let result = TabulatedRate::new(vec![1.0, 2.0], vec![1.0, -1.0]);
        assert!(result.is_err());
    }
}
