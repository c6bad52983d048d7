//! Adaptive step size rule parameters.

/// Knobs for the fractional-change step size heuristic.
///
/// The rule limits the step so that no well-populated species changes by
/// more than a small fraction of its current abundance:
///
/// ```text
/// dt = min over { i : Y_i > y_min, dY_i != 0 } of safety * |Y_i / dY_i|
/// ```
///
/// clamped below by `dt_floor`. When no species qualifies (all abundances
/// below `y_min` or all derivatives exactly zero) the step falls back to
/// `dt_fallback` so a stalled network still advances in time.
#[derive(Clone, Copy, Debug)]
pub struct StepControl {
    /// Fractional change allowed per step.
    pub safety: f64,
    /// Abundance threshold below which a species does not limit the step.
    pub y_min: f64,
    /// Smallest step ever taken.
    pub dt_floor: f64,
    /// Step taken when no species qualifies for the rule.
    pub dt_fallback: f64,
}

impl Default for StepControl {
    fn default() -> Self {
        Self {
            safety: 0.01,
            y_min: 1e-12,
            dt_floor: 1e-12,
            dt_fallback: 1e-3,
        }
    }
}
