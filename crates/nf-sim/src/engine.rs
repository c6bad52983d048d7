//! Adaptive explicit Euler integration loop.

use nalgebra::DVector;
use tracing::{debug, trace};

use nf_ops::Operator;
use nf_state::{NetworkState, StepControl};

use crate::error::{SimError, SimResult};

/// Options for engine runs.
#[derive(Clone, Debug)]
pub struct EngineOptions {
    /// Adaptive step-size control parameters.
    pub step: StepControl,
    /// Record time and abundances after every committed step.
    pub record_history: bool,
    /// Cap the final step so the run lands exactly on `t_end` instead of
    /// overshooting it.
    pub clip_to_t_end: bool,
    /// Maximum number of steps per `run` call (safety limit).
    pub max_steps: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            step: StepControl::default(),
            record_history: false,
            clip_to_t_end: false,
            max_steps: 1_000_000,
        }
    }
}

/// Record of an engine run: one entry per committed step.
#[derive(Clone, Debug, Default)]
pub struct RunRecord {
    /// Time after each step (seconds).
    pub t: Vec<f64>,
    /// Abundance snapshot after each step.
    pub y: Vec<DVector<f64>>,
}

/// Explicit Euler engine with adaptive step size.
///
/// Each step proceeds in a fixed order: clear the derivative accumulator,
/// apply every operator, derive `dt` from the fastest-changing species,
/// commit `Y += dt * dY` and advance time. Operators only ever add to the
/// accumulator, so their order within a step does not affect the result.
pub struct Engine {
    state: NetworkState,
    operators: Vec<Box<dyn Operator>>,
    options: EngineOptions,
    history: RunRecord,
    steps: usize,
}

impl Engine {
    /// Create an engine over a state and an operator stack.
    ///
    /// The operator list may be empty; the state then coasts forward in
    /// time at the fallback step size with frozen abundances.
    pub fn new(
        state: NetworkState,
        operators: Vec<Box<dyn Operator>>,
        options: EngineOptions,
    ) -> SimResult<Self> {
        let step = &options.step;
        if !step.safety.is_finite() || step.safety <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "safety must be finite and positive",
            });
        }
        if !step.y_min.is_finite() || step.y_min < 0.0 {
            return Err(SimError::InvalidArg {
                what: "y_min must be finite and non-negative",
            });
        }
        if !step.dt_floor.is_finite() || step.dt_floor <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "dt_floor must be finite and positive",
            });
        }
        if !step.dt_fallback.is_finite() || step.dt_fallback <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "dt_fallback must be finite and positive",
            });
        }
        if options.max_steps == 0 {
            return Err(SimError::InvalidArg {
                what: "max_steps must be positive",
            });
        }
        Ok(Self {
            state,
            operators,
            options,
            history: RunRecord::default(),
            steps: 0,
        })
    }

    /// The current state.
    pub fn state(&self) -> &NetworkState {
        &self.state
    }

    /// History recorded so far (empty unless `record_history` is set).
    pub fn history(&self) -> &RunRecord {
        &self.history
    }

    /// Total committed steps over the engine's lifetime.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Take a single adaptive step and return the `dt` that was used.
    pub fn step(&mut self) -> SimResult<f64> {
        self.step_with_cap(None)
    }

    fn step_with_cap(&mut self, cap: Option<f64>) -> SimResult<f64> {
        self.state.reset_derivatives();
        for op in &self.operators {
            op.apply(&mut self.state)?;
        }

        let mut dt = self.state.compute_dt(&self.options.step);
        if let Some(cap) = cap {
            dt = dt.min(cap);
        }

        self.state.apply_update(dt);
        self.state.advance_time(dt);
        self.steps += 1;

        if self.options.record_history {
            self.history.t.push(self.state.time());
            self.history.y.push(self.state.abundances().clone());
        }
        Ok(dt)
    }

    /// Step until the state's time reaches `t_end`.
    ///
    /// The last step may overshoot `t_end`; set `clip_to_t_end` to land on
    /// it exactly. Returns `StepLimit` if `max_steps` is exhausted first.
    pub fn run(&mut self, t_end: f64) -> SimResult<()> {
        if !t_end.is_finite() {
            return Err(SimError::InvalidArg {
                what: "t_end must be finite",
            });
        }

        debug!(t = self.state.time(), t_end, "run started");
        let mut steps_this_run = 0usize;
        while self.state.time() < t_end {
            if steps_this_run >= self.options.max_steps {
                return Err(SimError::StepLimit {
                    max_steps: self.options.max_steps,
                    t: self.state.time(),
                    t_end,
                });
            }
            let cap = if self.options.clip_to_t_end {
                Some(t_end - self.state.time())
            } else {
                None
            };
            let dt = self.step_with_cap(cap)?;
            steps_this_run += 1;
            trace!(step = self.steps, dt, t = self.state.time(), "stepped");
        }
        debug!(steps = steps_this_run, t = self.state.time(), "run finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_ops::DecayOperator;
    use nf_state::Conditions;

    fn single_species_state(y0: f64) -> NetworkState {
        NetworkState::new(vec!["x".to_string()], &[y0], Conditions::default(), 0.0).unwrap()
    }

    fn decay_ops(lambda: f64) -> Vec<Box<dyn Operator>> {
        vec![Box::new(DecayOperator::new(lambda).unwrap())]
    }

    #[test]
    fn engine_options_defaults() {
        let opts = EngineOptions::default();
        assert!(!opts.record_history);
        assert!(!opts.clip_to_t_end);
        assert_eq!(opts.max_steps, 1_000_000);
    }

    #[test]
    fn rejects_bad_step_control() {
        let mut opts = EngineOptions::default();
        opts.step.safety = 0.0;
        let result = Engine::new(single_species_state(1.0), vec![], opts);
        assert!(matches!(result, Err(SimError::InvalidArg { .. })));

        let mut opts = EngineOptions::default();
        opts.max_steps = 0;
        let result = Engine::new(single_species_state(1.0), vec![], opts);
        assert!(matches!(result, Err(SimError::InvalidArg { .. })));
    }

    #[test]
    fn empty_stack_steps_at_fallback() {
        let mut engine =
            Engine::new(single_species_state(1.0), vec![], EngineOptions::default()).unwrap();
        let dt = engine.step().unwrap();
        assert_eq!(dt, 1e-3);
        assert_eq!(engine.state().abundances()[0], 1.0);
        assert_eq!(engine.steps(), 1);
    }

    #[test]
    fn run_may_overshoot_t_end() {
        let mut engine =
            Engine::new(single_species_state(1.0), vec![], EngineOptions::default()).unwrap();
        engine.run(0.0095).unwrap();
        let t = engine.state().time();
        assert!(t >= 0.0095);
        assert!(t < 0.0105);
        assert_eq!(engine.steps(), 10);
    }

    #[test]
    fn clip_lands_exactly_on_t_end() {
        let options = EngineOptions {
            clip_to_t_end: true,
            ..EngineOptions::default()
        };
        let mut engine = Engine::new(single_species_state(1.0), vec![], options).unwrap();
        engine.run(0.0025).unwrap();
        assert_eq!(engine.state().time(), 0.0025);
        assert_eq!(engine.steps(), 3);
    }

    #[test]
    fn step_limit_is_enforced() {
        let options = EngineOptions {
            max_steps: 3,
            ..EngineOptions::default()
        };
        let mut engine = Engine::new(single_species_state(1.0), vec![], options).unwrap();
        assert!(matches!(
            engine.run(1.0),
            Err(SimError::StepLimit { max_steps: 3, .. })
        ));
        assert_eq!(engine.steps(), 3);
    }

    #[test]
    fn history_has_one_entry_per_step() {
        let options = EngineOptions {
            record_history: true,
            ..EngineOptions::default()
        };
        let mut engine =
            Engine::new(single_species_state(1.0), decay_ops(0.5), options).unwrap();
        engine.run(0.1).unwrap();
        assert_eq!(engine.history().t.len(), engine.steps());
        assert_eq!(engine.history().y.len(), engine.steps());
        // Entries are post-step snapshots, so the first one is past t = 0.
        assert!(engine.history().t[0] > 0.0);
    }

    #[test]
    fn history_is_off_by_default() {
        let mut engine = Engine::new(
            single_species_state(1.0),
            decay_ops(0.5),
            EngineOptions::default(),
        )
        .unwrap();
        engine.run(0.1).unwrap();
        assert!(engine.history().t.is_empty());
    }

    #[test]
    fn rejects_non_finite_t_end() {
        let mut engine = Engine::new(
            single_species_state(1.0),
            vec![],
            EngineOptions::default(),
        )
        .unwrap();
        assert!(matches!(
            engine.run(f64::NAN),
            Err(SimError::InvalidArg { .. })
        ));
    }

    #[test]
    fn run_to_past_time_is_a_no_op() {
        let mut engine = Engine::new(
            single_species_state(1.0),
            decay_ops(0.5),
            EngineOptions::default(),
        )
        .unwrap();
        engine.run(-1.0).unwrap();
        assert_eq!(engine.steps(), 0);
        assert_eq!(engine.state().time(), 0.0);
    }
}
